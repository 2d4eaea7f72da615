/*! # as-vocab

The ActivityStreams 2.0 core and extended vocabulary, decoded and encoded
through [`as_codec`].

Each concrete type is a [`Kind`]. Kinds sharing a property layout share a
node struct: `Note`, `Person` and `Image` are all held in an [`Object`],
`Create` and `Follow` in an [`Activity`]. Reference slots are typed by the
capability interface they accept, such as [`ObjectOrLink`] or
[`ImageOrLink`], and hold either a bare IRI or an embedded node.

```ignore
use as_vocab::{codec, ObjectOrLink};

let node: ObjectOrLink = codec().decode_node(json)?;
```

*/
#[macro_use]
mod macros;

pub mod activity;
pub mod capability;
pub mod collection;
pub mod kind;
pub mod link;
pub mod object;
pub mod properties;
pub mod registry;
pub mod time;

pub use activity::{Activity, IntransitiveActivity, Question};
pub use capability::{CollectionOrLink, CollectionPageOrLink, ImageOrLink, ObjectOrLink, UriOrLink};
pub use collection::{Collection, CollectionPage, OrderedCollection, OrderedCollectionPage};
pub use kind::{Kind, Shape};
pub use link::Link;
pub use object::{Object, Place, Profile, Relationship, Tombstone};
pub use registry::{lenient_registry, registry};
pub use time::Timestamp;

use as_codec::{Codec, CodecConfig};

/// A codec over the strict vocabulary registry.
pub fn codec() -> Codec<'static, Kind> {
    Codec::new(registry())
}

/// A codec over the registry selected by `lenient`, with `config`.
pub fn codec_with(lenient: bool, config: CodecConfig) -> Codec<'static, Kind> {
    let registry = if lenient {
        lenient_registry()
    } else {
        registry()
    };
    Codec::with_config(registry, config)
}
