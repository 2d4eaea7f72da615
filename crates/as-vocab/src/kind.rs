//! Concrete vocabulary types and the Rust shape each one is held in.

macro_rules! kinds {
    ($($shape:ident => [$($kind:ident),+ $(,)?]),+ $(,)?) => {
        /// Concrete ActivityStreams types known to this crate.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Kind {
            $($($kind,)+)+
        }

        /// Property layouts shared by several kinds. Named after the node
        /// struct holding that layout.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Shape {
            $($shape,)+
        }

        impl Kind {
            pub const ALL: &'static [Kind] = &[$($(Kind::$kind,)+)+];

            /// The discriminator written in the `type` member.
            pub fn name(self) -> &'static str {
                match self {
                    $($(Kind::$kind => stringify!($kind),)+)+
                }
            }

            pub fn shape(self) -> Shape {
                match self {
                    $($(Kind::$kind => Shape::$shape,)+)+
                }
            }
        }
    };
}

kinds! {
    Object => [
        Object, Article, Audio, Document, Event, Image, Note, Page, Video,
        Application, Group, Organization, Person, Service,
    ],
    Place => [Place],
    Profile => [Profile],
    Relationship => [Relationship],
    Tombstone => [Tombstone],
    Link => [Link, Mention],
    Activity => [
        Activity, Accept, Add, Announce, Block, Create, Delete, Dislike, Flag,
        Follow, Ignore, Invite, Join, Leave, Like, Listen, Move, Offer, Read,
        Reject, Remove, TentativeAccept, TentativeReject, Undo, Update, View,
    ],
    IntransitiveActivity => [IntransitiveActivity, Arrive, Travel],
    Question => [Question],
    Collection => [Collection],
    OrderedCollection => [OrderedCollection],
    CollectionPage => [CollectionPage],
    OrderedCollectionPage => [OrderedCollectionPage],
}

impl Kind {
    pub fn is_actor(self) -> bool {
        matches!(
            self,
            Kind::Application | Kind::Group | Kind::Organization | Kind::Person | Kind::Service
        )
    }

    pub fn is_link(self) -> bool {
        self.shape() == Shape::Link
    }

    /// Kinds that are activities, transitive or not.
    pub fn is_activity(self) -> bool {
        matches!(
            self.shape(),
            Shape::Activity | Shape::IntransitiveActivity | Shape::Question
        )
    }

    pub fn is_collection(self) -> bool {
        matches!(
            self.shape(),
            Shape::Collection
                | Shape::OrderedCollection
                | Shape::CollectionPage
                | Shape::OrderedCollectionPage
        )
    }

    pub fn is_collection_page(self) -> bool {
        matches!(
            self.shape(),
            Shape::CollectionPage | Shape::OrderedCollectionPage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = Kind::ALL.iter().map(|kind| kind.name()).collect();
        assert_eq!(names.len(), Kind::ALL.len());
    }

    #[test]
    fn every_shape_has_a_kind_of_the_same_name() {
        for kind in Kind::ALL {
            let shape = kind.shape();
            let namesake = Kind::ALL
                .iter()
                .find(|candidate| format!("{:?}", shape) == candidate.name());
            assert!(namesake.is_some(), "no kind named after {shape:?}");
        }
    }

    #[test]
    fn classification() {
        assert!(Kind::Person.is_actor());
        assert!(!Kind::Note.is_actor());
        assert!(Kind::Mention.is_link());
        assert!(Kind::Question.is_activity());
        assert!(Kind::Arrive.is_activity());
        assert!(Kind::OrderedCollectionPage.is_collection());
        assert!(Kind::OrderedCollectionPage.is_collection_page());
        assert!(!Kind::Collection.is_collection_page());
    }
}
