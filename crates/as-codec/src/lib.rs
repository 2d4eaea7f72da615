/*! # as-codec

Polymorphic JSON codec for the ActivityStreams vocabulary.

It resolves a JSON node's `type` discriminator to a concrete type through a
closed [`Registry`], and normalizes properties that may appear as a bare
value or as an array into ordered sequences, writing them back in the
tersest shape.

The crate is generic over the concrete-type handle and knows nothing about
ActivityStreams kinds; vocabulary crates implement [`VocabularyNode`] and
[`Capability`] and read their properties through [`NodeReader`].

*/
pub mod cardinality;
pub mod codec;
pub mod error;
pub mod ldmodel;
pub mod node;
pub mod registry;

pub use cardinality::{decode_multi, encode_multi, MultiShape};
pub use codec::{Codec, CodecConfig, CONTEXT, TYPE};
pub use error::{CodecError, RegistryError};
pub use ldmodel::{ContextEntry, Document};
pub use node::{Capability, NodeReader, NodeWriter, Reference, VocabularyNode};
pub use registry::{InterfaceId, Registry, RegistryBuilder, TypeHandle};
