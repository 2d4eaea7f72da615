//! Capability interfaces: the sum types reference slots are declared with.

use as_codec::{Capability, CodecError, InterfaceId, NodeReader, Reference, VocabularyNode};

use crate::{
    activity::{Activity, IntransitiveActivity, Question},
    collection::{Collection, CollectionPage, OrderedCollection, OrderedCollectionPage},
    kind::{Kind, Shape},
    link::Link,
    object::{Object, Place, Profile, Relationship, Tombstone},
};

macro_rules! capability {
    (
        $(#[$meta:meta])*
        pub enum $name:ident = $interface:literal {
            $($variant:ident($node:ident),)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub enum $name {
            /// An IRI standing in for the node.
            Iri(String),
            $($variant(Box<$node>),)+
        }

        impl Capability<Kind> for $name {
            const INTERFACE: InterfaceId = InterfaceId::new($interface);

            fn from_iri(iri: String) -> Self {
                $name::Iri(iri)
            }

            fn decode_as(
                handle: Kind,
                types: Vec<String>,
                reader: &mut NodeReader<'_, Kind>,
            ) -> Result<Self, CodecError> {
                match handle.shape() {
                    $(Shape::$node => Ok($name::$variant(Box::new($node::read(handle, types, reader)?))),)+
                    #[allow(unreachable_patterns)]
                    _ => Err(CodecError::UnregisteredType {
                        interface: Self::INTERFACE,
                        handle: handle.name().to_owned(),
                    }),
                }
            }

            fn reference(&self) -> Reference<'_, Kind> {
                match self {
                    $name::Iri(iri) => Reference::Iri(iri),
                    $($name::$variant(node) => Reference::Node(&**node),)+
                }
            }
        }

        impl $name {
            /// The interface this capability is registered under.
            pub fn interface() -> InterfaceId {
                <Self as Capability<Kind>>::INTERFACE
            }

            pub fn iri(iri: impl Into<String>) -> Self {
                $name::Iri(iri.into())
            }

            pub fn as_iri(&self) -> Option<&str> {
                match self {
                    $name::Iri(iri) => Some(iri.as_str()),
                    _ => None,
                }
            }

            /// Concrete type of an embedded node; `None` for a bare IRI.
            pub fn kind(&self) -> Option<Kind> {
                match self.reference() {
                    Reference::Iri(_) => None,
                    Reference::Node(node) => Some(node.handle()),
                }
            }
        }

        $(
            impl From<$node> for $name {
                fn from(node: $node) -> Self {
                    $name::$variant(Box::new(node))
                }
            }
        )+
    };
}

capability! {
    /// Anything that can appear where an Object or a Link is expected.
    pub enum ObjectOrLink = "ObjectOrLink" {
        Object(Object),
        Place(Place),
        Profile(Profile),
        Relationship(Relationship),
        Tombstone(Tombstone),
        Activity(Activity),
        IntransitiveActivity(IntransitiveActivity),
        Question(Question),
        Collection(Collection),
        OrderedCollection(OrderedCollection),
        CollectionPage(CollectionPage),
        OrderedCollectionPage(OrderedCollectionPage),
        Link(Link),
    }
}

capability! {
    /// An `Image` object or a Link to one, as in `icon` and `image`.
    pub enum ImageOrLink = "ImageOrLink" {
        Image(Object),
        Link(Link),
    }
}

capability! {
    pub enum CollectionOrLink = "CollectionOrLink" {
        Collection(Collection),
        OrderedCollection(OrderedCollection),
        CollectionPage(CollectionPage),
        OrderedCollectionPage(OrderedCollectionPage),
        Link(Link),
    }
}

capability! {
    /// A page of a collection or a Link to one, as in `first` and `next`.
    pub enum CollectionPageOrLink = "CollectionPageOrLink" {
        CollectionPage(CollectionPage),
        OrderedCollectionPage(OrderedCollectionPage),
        Link(Link),
    }
}

capability! {
    /// The value of `url`: an IRI or a Link.
    pub enum UriOrLink = "UriOrLink" {
        Link(Link),
    }
}
