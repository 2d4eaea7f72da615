//! Linked Data envelope around a root vocabulary node.

use serde_json::{Map, Value};

use crate::{codec::CONTEXT, error::CodecError};

/// One entry of the JSON-LD `@context` member.
#[derive(Debug, Clone, PartialEq)]
// The @context member maps the keys of the JSON structure to terms of
// external vocabularies. It may be a single IRI, an inline definition, or an
// array mixing both.
pub enum ContextEntry {
    /// A remote context, such as `https://www.w3.org/ns/activitystreams`.
    Iri(String),
    /// An inline term definition object.
    Definition(Map<String, Value>),
}

impl ContextEntry {
    pub(crate) fn decode(value: Value) -> Result<Self, CodecError> {
        match value {
            Value::String(iri) => Ok(ContextEntry::Iri(iri)),
            Value::Object(definition) => Ok(ContextEntry::Definition(definition)),
            other => Err(CodecError::unexpected(CONTEXT, "an IRI or an object", &other)),
        }
    }

    pub(crate) fn encode(&self) -> Value {
        match self {
            ContextEntry::Iri(iri) => Value::String(iri.clone()),
            ContextEntry::Definition(definition) => Value::Object(definition.clone()),
        }
    }
}

/// A root node together with the `@context` it was published with.
#[derive(Debug, Clone, PartialEq)]
pub struct Document<C> {
    pub context: Vec<ContextEntry>,
    pub node: C,
}

impl<C> Document<C> {
    pub fn new(node: C) -> Self {
        Self {
            context: Vec::new(),
            node,
        }
    }

    pub fn with_context(mut self, entry: ContextEntry) -> Self {
        self.context.push(entry);
        self
    }
}
