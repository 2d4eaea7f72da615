//! Traits implemented by vocabulary types, and the property readers and
//! writers they are decoded and encoded through.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::{
    cardinality::{decode_multi, encode_multi},
    codec::Codec,
    error::CodecError,
    registry::{InterfaceId, TypeHandle},
};

/// A concrete vocabulary type: a fixed set of optional named properties
/// plus its type discriminator.
pub trait VocabularyNode<K: TypeHandle> {
    /// Decodes the properties of a node already resolved to `handle`.
    fn read(handle: K, types: Vec<String>, reader: &mut NodeReader<'_, K>) -> Result<Self, CodecError>
    where
        Self: Sized;

    /// The concrete type this node is encoded as.
    fn handle(&self) -> K;

    /// Declared discriminators. When empty, the registered one is written.
    fn types(&self) -> &[String];

    /// Writes every present property.
    fn write(&self, writer: &mut NodeWriter<'_, K>) -> Result<(), CodecError>;

    /// Rejects a node whose handle cannot be held in this node type.
    fn check(&self) -> Result<(), CodecError> {
        Ok(())
    }
}

/// What a capability value holds: an IRI standing for a node, or the node.
pub enum Reference<'a, K: TypeHandle> {
    Iri(&'a str),
    Node(&'a dyn VocabularyNode<K>),
}

/// A capability interface, represented as a sum type over its members.
pub trait Capability<K: TypeHandle>: Sized {
    const INTERFACE: InterfaceId;

    /// Wraps a bare IRI found where a node of this interface was expected.
    fn from_iri(iri: String) -> Self;

    /// Builds the member matching `handle`.
    fn decode_as(
        handle: K,
        types: Vec<String>,
        reader: &mut NodeReader<'_, K>,
    ) -> Result<Self, CodecError>;

    fn reference(&self) -> Reference<'_, K>;
}

/// Hands out the JSON members of one node, property by property.
///
/// Every read consumes its member; whatever is left once all declared
/// properties have been read is returned by [`NodeReader::remaining`].
pub struct NodeReader<'a, K: TypeHandle> {
    codec: &'a Codec<'a, K>,
    fields: Map<String, Value>,
}

impl<'a, K: TypeHandle> NodeReader<'a, K> {
    pub(crate) fn new(codec: &'a Codec<'a, K>, fields: Map<String, Value>) -> Self {
        Self { codec, fields }
    }

    pub fn codec(&self) -> &Codec<'a, K> {
        self.codec
    }

    fn take(&mut self, name: &str) -> Option<Value> {
        self.fields.remove(name).filter(|value| !value.is_null())
    }

    /// Reads a single-valued scalar property.
    pub fn value<T: DeserializeOwned>(&mut self, name: &str) -> Result<Option<T>, CodecError> {
        self.take(name).map(|value| scalar(name, value)).transpose()
    }

    /// Reads a multi-valued scalar property.
    pub fn values<T: DeserializeOwned>(&mut self, name: &str) -> Result<Vec<T>, CodecError> {
        let value = self.take(name);
        decode_multi(name, value, |item| scalar(name, item))
    }

    /// Reads a single-valued reference slot.
    pub fn slot<C: Capability<K>>(&mut self, name: &str) -> Result<Option<C>, CodecError> {
        let codec = self.codec;
        self.take(name)
            .map(|value| codec.decode_reference(name, value))
            .transpose()
    }

    /// Reads a multi-valued reference slot.
    pub fn slots<C: Capability<K>>(&mut self, name: &str) -> Result<Vec<C>, CodecError> {
        let codec = self.codec;
        let value = self.take(name);
        decode_multi(name, value, |item| codec.decode_reference(name, item))
    }

    /// Takes every member not read so far.
    pub fn remaining(&mut self) -> Map<String, Value> {
        std::mem::take(&mut self.fields)
    }
}

fn scalar<T: DeserializeOwned>(name: &str, value: Value) -> Result<T, CodecError> {
    serde_json::from_value(value).map_err(|err| CodecError::malformed(name, err.to_string()))
}

/// Collects the JSON members of one node being encoded.
pub struct NodeWriter<'a, K: TypeHandle> {
    codec: &'a Codec<'a, K>,
    fields: Map<String, Value>,
}

impl<'a, K: TypeHandle> NodeWriter<'a, K> {
    pub(crate) fn new(codec: &'a Codec<'a, K>) -> Self {
        Self {
            codec,
            fields: Map::new(),
        }
    }

    pub fn codec(&self) -> &Codec<'a, K> {
        self.codec
    }

    fn put(&mut self, name: &str, value: Option<Value>) {
        if let Some(value) = value {
            self.fields.insert(name.to_owned(), value);
        }
    }

    pub fn value<T: Serialize>(&mut self, name: &str, value: Option<&T>) -> Result<(), CodecError> {
        let value = value.map(serde_json::to_value).transpose()?;
        self.put(name, value);
        Ok(())
    }

    pub fn values<T: Serialize>(&mut self, name: &str, values: &[T]) -> Result<(), CodecError> {
        let shape = self.codec.config().shape_for(name);
        let value = encode_multi(values, shape, |item| Ok(serde_json::to_value(item)?))?;
        self.put(name, value);
        Ok(())
    }

    pub fn slot<C: Capability<K>>(&mut self, name: &str, value: Option<&C>) -> Result<(), CodecError> {
        let codec = self.codec;
        let value = value.map(|node| codec.encode_node(node)).transpose()?;
        self.put(name, value);
        Ok(())
    }

    pub fn slots<C: Capability<K>>(&mut self, name: &str, values: &[C]) -> Result<(), CodecError> {
        let codec = self.codec;
        let shape = codec.config().shape_for(name);
        let value = encode_multi(values, shape, |node| codec.encode_node(node))?;
        self.put(name, value);
        Ok(())
    }

    /// Copies members verbatim. Declared properties written later win.
    pub fn extend(&mut self, members: &Map<String, Value>) {
        self.fields
            .extend(members.iter().map(|(name, value)| (name.clone(), value.clone())));
    }

    pub(crate) fn finish(self) -> Map<String, Value> {
        self.fields
    }
}
