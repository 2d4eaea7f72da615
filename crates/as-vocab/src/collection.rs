use crate::properties::{
    CollectionProperties, ObjectProperties, OrderedPageProperties, OrderedProperties,
    PageProperties,
};

node! {
    pub struct Collection {
        properties: ObjectProperties,
        collection: CollectionProperties,
    }
}

node! {
    /// A collection whose items are strictly ordered, in `orderedItems`.
    pub struct OrderedCollection {
        properties: ObjectProperties,
        collection: CollectionProperties,
        ordered: OrderedProperties,
    }
}

node! {
    pub struct CollectionPage {
        properties: ObjectProperties,
        collection: CollectionProperties,
        page: PageProperties,
    }
}

node! {
    pub struct OrderedCollectionPage {
        properties: ObjectProperties,
        collection: CollectionProperties,
        ordered: OrderedProperties,
        page: PageProperties,
        ordered_page: OrderedPageProperties,
    }
}
