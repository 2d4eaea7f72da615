use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::{
    cardinality::{decode_multi, encode_multi, MultiShape},
    error::CodecError,
    ldmodel::{ContextEntry, Document},
    node::{Capability, NodeReader, NodeWriter, Reference},
    registry::{InterfaceId, Registry, TypeHandle},
};

/// The discriminator member of every node.
pub const TYPE: &str = "type";

/// The JSON-LD context member of a document.
pub const CONTEXT: &str = "@context";

/// Names the root node in error reports.
const ROOT: &str = "$";

/// Encoding options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodecConfig {
    /// Properties written as arrays even when they hold a single element.
    pub array_properties: BTreeSet<String>,
}

impl CodecConfig {
    pub fn with_array_property(mut self, property: impl Into<String>) -> Self {
        self.array_properties.insert(property.into());
        self
    }

    pub fn shape_for(&self, property: &str) -> MultiShape {
        if self.array_properties.contains(property) {
            MultiShape::Array
        } else {
            MultiShape::Minimized
        }
    }
}

/// Decodes and encodes vocabulary nodes against a registry.
///
/// A codec borrows its registry and holds no other state, so one value can
/// serve any number of threads.
#[derive(Debug, Clone)]
pub struct Codec<'r, K: TypeHandle> {
    registry: &'r Registry<K>,
    config: CodecConfig,
}

impl<'r, K: TypeHandle> Codec<'r, K> {
    pub fn new(registry: &'r Registry<K>) -> Self {
        Self::with_config(registry, CodecConfig::default())
    }

    pub fn with_config(registry: &'r Registry<K>, config: CodecConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &'r Registry<K> {
        self.registry
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Decodes a node expected to implement the capability `C`.
    pub fn decode_node<C: Capability<K>>(&self, json: Value) -> Result<C, CodecError> {
        self.decode_reference(ROOT, json)
    }

    /// Encodes a node through the capability `C`.
    ///
    /// The node's declared types, when it has any, must resolve back to its
    /// handle, so whatever is written decodes to the same node.
    pub fn encode_node<C: Capability<K>>(&self, node: &C) -> Result<Value, CodecError> {
        let node = match node.reference() {
            Reference::Iri(iri) => return Ok(Value::String(iri.to_owned())),
            Reference::Node(node) => node,
        };

        node.check()?;
        let handle = node.handle();
        let discriminator = self.registry.discriminator_for(C::INTERFACE, handle)?;

        let types = match node.types() {
            [] => vec![discriminator.to_owned()],
            declared => {
                self.check_declared(C::INTERFACE, handle, declared)?;
                declared.to_vec()
            }
        };

        let mut writer = NodeWriter::new(self);
        node.write(&mut writer)?;
        let mut fields = writer.finish();

        let shape = self.config.shape_for(TYPE);
        if let Some(types) = encode_multi(&types, shape, |t| Ok(Value::String(t.clone())))? {
            fields.insert(TYPE.to_owned(), types);
        }

        Ok(Value::Object(fields))
    }

    /// Declared types must resolve back to the handle being encoded.
    fn check_declared(
        &self,
        interface: InterfaceId,
        handle: K,
        declared: &[String],
    ) -> Result<(), CodecError> {
        match self.registry.resolve(interface, declared) {
            Ok(resolved) if resolved == handle => Ok(()),
            Ok(resolved) => Err(CodecError::malformed(
                TYPE,
                format!("{declared:?} resolves to {resolved:?} in {interface}, not {handle:?}"),
            )),
            Err(_) => Err(CodecError::malformed(
                TYPE,
                format!("{declared:?} does not resolve to {handle:?} in {interface}"),
            )),
        }
    }

    /// Decodes the value of a reference slot named `property`.
    pub(crate) fn decode_reference<C: Capability<K>>(
        &self,
        property: &str,
        value: Value,
    ) -> Result<C, CodecError> {
        let mut fields = match value {
            Value::String(iri) => return Ok(C::from_iri(iri)),
            Value::Object(fields) => fields,
            other => return Err(CodecError::unexpected(property, "an object or an IRI", &other)),
        };

        let types = decode_multi(TYPE, fields.remove(TYPE), |value| match value {
            Value::String(t) => Ok(t),
            other => Err(CodecError::unexpected(TYPE, "a string", &other)),
        })?;
        let handle = self.registry.resolve(C::INTERFACE, &types)?;

        let mut reader = NodeReader::new(self, fields);
        C::decode_as(handle, types, &mut reader)
    }

    /// Decodes a document: a root node with an optional `@context`.
    pub fn decode_document<C: Capability<K>>(&self, json: Value) -> Result<Document<C>, CodecError> {
        let (context, root) = match json {
            Value::Object(mut fields) => {
                let context = decode_multi(CONTEXT, fields.remove(CONTEXT), ContextEntry::decode)?;
                (context, Value::Object(fields))
            }
            other => (Vec::new(), other),
        };

        Ok(Document {
            context,
            node: self.decode_node(root)?,
        })
    }

    pub fn encode_document<C: Capability<K>>(&self, document: &Document<C>) -> Result<Value, CodecError> {
        let shape = self.config.shape_for(CONTEXT);
        let context = encode_multi(&document.context, shape, |entry| Ok(entry.encode()))?;

        match (self.encode_node(&document.node)?, context) {
            (root, None) => Ok(root),
            (Value::Object(fields), Some(context)) => {
                let mut document = Map::with_capacity(fields.len() + 1);
                document.insert(CONTEXT.to_owned(), context);
                document.extend(fields);
                Ok(Value::Object(document))
            }
            (_, Some(_)) => Err(CodecError::malformed(
                CONTEXT,
                "a context cannot be attached to a bare IRI",
            )),
        }
    }

    /// Parses JSON text as a document.
    pub fn decode_str<C: Capability<K>>(&self, text: &str) -> Result<Document<C>, CodecError> {
        self.decode_document(serde_json::from_str(text)?)
    }

    pub fn encode_string<C: Capability<K>>(&self, document: &Document<C>) -> Result<String, CodecError> {
        Ok(serde_json::to_string(&self.encode_document(document)?)?)
    }
}
