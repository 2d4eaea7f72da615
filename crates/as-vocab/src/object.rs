//! Object shapes: plain objects and actors, plus the object kinds that add
//! properties of their own.

use crate::properties::{
    ObjectProperties, PlaceProperties, ProfileProperties, RelationshipProperties,
    TombstoneProperties,
};

node! {
    /// Any object kind without extra properties: `Object`, `Note`,
    /// `Article`, `Image`, the actor kinds, and so on.
    pub struct Object {
        properties: ObjectProperties,
    }
}

node! {
    /// A logical or physical location.
    pub struct Place {
        properties: ObjectProperties,
        place: PlaceProperties,
    }
}

node! {
    /// Content describing another object.
    pub struct Profile {
        properties: ObjectProperties,
        profile: ProfileProperties,
    }
}

node! {
    /// Describes a relationship between two individuals.
    pub struct Relationship {
        properties: ObjectProperties,
        relationship: RelationshipProperties,
    }
}

node! {
    /// Stands in for an object that has been deleted.
    pub struct Tombstone {
        properties: ObjectProperties,
        tombstone: TombstoneProperties,
    }
}
