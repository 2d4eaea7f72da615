//! Property groups shared between node shapes.
//!
//! Each group is a flat set of optional properties. Fields are declared with
//! the way they are read:
//!
//! - `value<T>`: single scalar, `Option<T>`
//! - `values<T>`: multi-valued scalar, `Vec<T>`
//! - `slot<C>`: single reference slot of capability `C`, `Option<C>`
//! - `slots<C>`: multi-valued reference slot, `Vec<C>`

use std::collections::BTreeMap;

use as_codec::{CodecError, NodeReader, NodeWriter};
use serde_json::{Number, Value};

use crate::{
    capability::{CollectionOrLink, CollectionPageOrLink, ImageOrLink, ObjectOrLink, UriOrLink},
    kind::Kind,
    time::Timestamp,
};

/// Language-tagged values such as `contentMap`.
pub type LanguageMap = BTreeMap<String, String>;

/// A group of properties read and written together.
pub trait PropertyGroup: Sized {
    fn read(reader: &mut NodeReader<'_, Kind>) -> Result<Self, CodecError>;
    fn write(&self, writer: &mut NodeWriter<'_, Kind>) -> Result<(), CodecError>;
}

macro_rules! property_group {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($(#[$fmeta:meta])* $field:ident: $mode:ident<$ty:ty> = $json:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            $($(#[$fmeta])* pub $field: property_group!(@type $mode $ty),)+
        }

        impl PropertyGroup for $name {
            fn read(reader: &mut NodeReader<'_, Kind>) -> Result<Self, CodecError> {
                Ok(Self {
                    $($field: reader.$mode($json)?,)+
                })
            }

            fn write(&self, writer: &mut NodeWriter<'_, Kind>) -> Result<(), CodecError> {
                $(property_group!(@write writer $mode $json self.$field);)+
                Ok(())
            }
        }
    };
    (@type value $ty:ty) => { Option<$ty> };
    (@type values $ty:ty) => { Vec<$ty> };
    (@type slot $ty:ty) => { Option<$ty> };
    (@type slots $ty:ty) => { Vec<$ty> };
    (@write $writer:ident value $json:literal $field:expr) => { $writer.value($json, $field.as_ref())? };
    (@write $writer:ident values $json:literal $field:expr) => { $writer.values($json, &$field)? };
    (@write $writer:ident slot $json:literal $field:expr) => { $writer.slot($json, $field.as_ref())? };
    (@write $writer:ident slots $json:literal $field:expr) => { $writer.slots($json, &$field)? };
}

property_group! {
    /// Properties every Object carries.
    pub struct ObjectProperties {
        id: value<String> = "id",
        attachment: slots<ObjectOrLink> = "attachment",
        attributed_to: slots<ObjectOrLink> = "attributedTo",
        audience: slots<ObjectOrLink> = "audience",
        bcc: slots<ObjectOrLink> = "bcc",
        bto: slots<ObjectOrLink> = "bto",
        cc: slots<ObjectOrLink> = "cc",
        /// Grouping context of the object; not the JSON-LD `@context`.
        context: slots<ObjectOrLink> = "context",
        generator: slots<ObjectOrLink> = "generator",
        icon: slots<ImageOrLink> = "icon",
        image: slots<ImageOrLink> = "image",
        in_reply_to: slots<ObjectOrLink> = "inReplyTo",
        location: slots<ObjectOrLink> = "location",
        preview: slots<ObjectOrLink> = "preview",
        replies: slot<CollectionOrLink> = "replies",
        tag: slots<ObjectOrLink> = "tag",
        to: slots<ObjectOrLink> = "to",
        url: slots<UriOrLink> = "url",
        altitude: value<Number> = "altitude",
        content: value<String> = "content",
        content_map: value<LanguageMap> = "contentMap",
        name: value<String> = "name",
        name_map: value<LanguageMap> = "nameMap",
        /// An `xsd:duration`, kept as written.
        duration: value<String> = "duration",
        media_type: value<String> = "mediaType",
        end_time: value<Timestamp> = "endTime",
        published: value<Timestamp> = "published",
        start_time: value<Timestamp> = "startTime",
        summary: values<String> = "summary",
        summary_map: value<LanguageMap> = "summaryMap",
        updated: value<Timestamp> = "updated",
    }
}

property_group! {
    /// Properties of a Link. Links do not carry Object properties.
    pub struct LinkProperties {
        id: value<String> = "id",
        href: value<String> = "href",
        rel: values<String> = "rel",
        media_type: value<String> = "mediaType",
        name: value<String> = "name",
        name_map: value<LanguageMap> = "nameMap",
        hreflang: value<String> = "hreflang",
        height: value<u64> = "height",
        width: value<u64> = "width",
        preview: slots<ObjectOrLink> = "preview",
    }
}

property_group! {
    /// Properties shared by transitive and intransitive activities.
    pub struct ActivityProperties {
        actor: slots<ObjectOrLink> = "actor",
        target: slots<ObjectOrLink> = "target",
        result: slots<ObjectOrLink> = "result",
        origin: slots<ObjectOrLink> = "origin",
        instrument: slots<ObjectOrLink> = "instrument",
    }
}

property_group! {
    /// The direct object of a transitive activity.
    pub struct TransitiveProperties {
        object: slots<ObjectOrLink> = "object",
    }
}

property_group! {
    pub struct QuestionProperties {
        one_of: slots<ObjectOrLink> = "oneOf",
        any_of: slots<ObjectOrLink> = "anyOf",
        /// May be an object, a link, a date-time or a boolean; kept as JSON.
        closed: value<Value> = "closed",
    }
}

property_group! {
    /// Coordinates are kept as the JSON numbers they were written as.
    pub struct PlaceProperties {
        accuracy: value<Number> = "accuracy",
        latitude: value<Number> = "latitude",
        longitude: value<Number> = "longitude",
        radius: value<Number> = "radius",
        units: value<String> = "units",
    }
}

property_group! {
    pub struct ProfileProperties {
        describes: slot<ObjectOrLink> = "describes",
    }
}

property_group! {
    pub struct RelationshipProperties {
        subject: slot<ObjectOrLink> = "subject",
        object: slots<ObjectOrLink> = "object",
        relationship: slots<ObjectOrLink> = "relationship",
    }
}

property_group! {
    pub struct TombstoneProperties {
        former_type: values<String> = "formerType",
        deleted: value<Timestamp> = "deleted",
    }
}

property_group! {
    pub struct CollectionProperties {
        total_items: value<u64> = "totalItems",
        current: slot<CollectionPageOrLink> = "current",
        first: slot<CollectionPageOrLink> = "first",
        last: slot<CollectionPageOrLink> = "last",
        items: slots<ObjectOrLink> = "items",
    }
}

property_group! {
    pub struct OrderedProperties {
        ordered_items: slots<ObjectOrLink> = "orderedItems",
    }
}

property_group! {
    /// Paging links of a collection page.
    pub struct PageProperties {
        part_of: slot<CollectionOrLink> = "partOf",
        next: slot<CollectionPageOrLink> = "next",
        prev: slot<CollectionPageOrLink> = "prev",
    }
}

property_group! {
    pub struct OrderedPageProperties {
        start_index: value<u64> = "startIndex",
    }
}
