/*! # activitystreams

Reads and writes ActivityStreams 2.0 documents losslessly.

The codec lives in [`as_codec`], the vocabulary in [`as_vocab`]; both are
re-exported here. [`config`] reads the environment the `as-normalize`
binary is configured through.

*/
pub mod config;

pub use as_codec as codec;
pub use as_vocab as vocab;

pub use as_codec::{Codec, CodecConfig, CodecError, ContextEntry, Document};
pub use as_vocab::{Kind, ObjectOrLink};
