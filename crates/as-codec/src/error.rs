use serde_json::Value;
use thiserror::Error;

use crate::registry::InterfaceId;

/// Errors raised while decoding or encoding vocabulary nodes.
///
/// Decoding is all-or-nothing: whenever one of these is returned, no part of
/// the node being decoded is handed back to the caller.
#[derive(Debug, Error)]
pub enum CodecError {
    /// None of the declared discriminators is registered for the interface
    /// and the interface has no fallback type.
    #[error("no type registered in {interface} for discriminator(s) {discriminators:?}")]
    UnknownDiscriminator {
        interface: InterfaceId,
        discriminators: Vec<String>,
    },

    /// A node was encoded through an interface its type was never registered
    /// for. This is a programming error rather than a data error.
    #[error("type {handle} is not registered in {interface}")]
    UnregisteredType {
        interface: InterfaceId,
        handle: String,
    },

    /// An element of an array-valued property could not be decoded.
    #[error("element {position} of `{property}` could not be decoded: {source}")]
    ElementDecodeFailure {
        property: String,
        position: usize,
        source: Box<CodecError>,
    },

    /// The JSON shape of a property does not match what the property holds.
    #[error("malformed value for `{property}`: {reason}")]
    MalformedValue { property: String, reason: String },

    /// JSON text could not be parsed, or a value could not be serialized.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl CodecError {
    pub fn malformed(property: &str, reason: impl Into<String>) -> Self {
        CodecError::MalformedValue {
            property: property.to_owned(),
            reason: reason.into(),
        }
    }

    /// Builds a [`CodecError::MalformedValue`] naming the JSON kind found.
    pub(crate) fn unexpected(property: &str, expected: &str, found: &Value) -> Self {
        Self::malformed(
            property,
            format!("expected {expected}, found {}", json_kind(found)),
        )
    }
}

/// Errors raised while building a [`Registry`](crate::Registry) from its table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("discriminator `{discriminator}` registered twice in {interface}")]
    DuplicateDiscriminator {
        interface: InterfaceId,
        discriminator: String,
    },
    #[error("type {handle} registered twice in {interface}")]
    DuplicateHandle { interface: InterfaceId, handle: String },
    #[error("fallback {handle} is not a member of {interface}")]
    FallbackNotMember { interface: InterfaceId, handle: String },
    #[error("fallback declared for undeclared interface {interface}")]
    UndeclaredInterface { interface: InterfaceId },
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
