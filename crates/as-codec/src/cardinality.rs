//! Single-or-array normalization.
//!
//! Multi-valued properties accept a bare value or an array on input and are
//! always held as an ordered `Vec` in memory. On output the shape is chosen
//! from the sequence length alone.

use serde_json::Value;

use crate::error::CodecError;

/// How a non-empty sequence is written back to JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MultiShape {
    /// One element is written bare, several as an array.
    #[default]
    Minimized,
    /// Always written as an array.
    Array,
}

/// Decodes a property that may hold a bare value or an array of values.
///
/// Absent and `null` values decode to an empty sequence. Array order is kept.
/// A failing element inside an array is reported with its position.
pub fn decode_multi<T, F>(
    property: &str,
    value: Option<Value>,
    mut decode: F,
) -> Result<Vec<T>, CodecError>
where
    F: FnMut(Value) -> Result<T, CodecError>,
{
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .map(|(position, item)| {
                decode(item).map_err(|source| CodecError::ElementDecodeFailure {
                    property: property.to_owned(),
                    position,
                    source: Box::new(source),
                })
            })
            .collect(),
        Some(single) => Ok(vec![decode(single)?]),
    }
}

/// Encodes a sequence, returning `None` when the property must be omitted.
pub fn encode_multi<T, F>(
    items: &[T],
    shape: MultiShape,
    mut encode: F,
) -> Result<Option<Value>, CodecError>
where
    F: FnMut(&T) -> Result<Value, CodecError>,
{
    match (items, shape) {
        ([], _) => Ok(None),
        ([single], MultiShape::Minimized) => encode(single).map(Some),
        _ => items
            .iter()
            .map(encode)
            .collect::<Result<Vec<_>, _>>()
            .map(|values| Some(Value::Array(values))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn string(value: Value) -> Result<String, CodecError> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(CodecError::unexpected("to", "string", &other)),
        }
    }

    fn encode_string(s: &String) -> Result<Value, CodecError> {
        Ok(Value::String(s.clone()))
    }

    fn seq(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_value_decodes_to_one_element() {
        let decoded = decode_multi("to", Some(json!("a")), string).unwrap();
        assert_eq!(decoded, seq(&["a"]));
    }

    #[test]
    fn array_keeps_order() {
        let decoded = decode_multi("to", Some(json!(["c", "a", "b"])), string).unwrap();
        assert_eq!(decoded, seq(&["c", "a", "b"]));
    }

    #[test]
    fn absent_and_null_decode_to_empty() {
        assert!(decode_multi("to", None, string).unwrap().is_empty());
        assert!(decode_multi("to", Some(Value::Null), string).unwrap().is_empty());
        assert!(decode_multi("to", Some(json!([])), string).unwrap().is_empty());
    }

    #[test]
    fn failing_element_reports_position() {
        let err = decode_multi("to", Some(json!(["ok", 42, "later"])), string).unwrap_err();
        match err {
            CodecError::ElementDecodeFailure {
                property,
                position,
                source,
            } => {
                assert_eq!(property, "to");
                assert_eq!(position, 1);
                assert!(matches!(*source, CodecError::MalformedValue { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn failing_bare_value_is_not_positioned() {
        let err = decode_multi("to", Some(json!(42)), string).unwrap_err();
        assert!(matches!(err, CodecError::MalformedValue { .. }));
    }

    #[test]
    fn encoding_minimizes_cardinality() {
        assert_eq!(encode_multi(&seq(&[]), MultiShape::Minimized, encode_string).unwrap(), None);
        assert_eq!(
            encode_multi(&seq(&["a"]), MultiShape::Minimized, encode_string).unwrap(),
            Some(json!("a"))
        );
        assert_eq!(
            encode_multi(&seq(&["a", "b"]), MultiShape::Minimized, encode_string).unwrap(),
            Some(json!(["a", "b"]))
        );
    }

    #[test]
    fn array_shape_keeps_single_element_arrays() {
        assert_eq!(encode_multi(&seq(&[]), MultiShape::Array, encode_string).unwrap(), None);
        assert_eq!(
            encode_multi(&seq(&["a"]), MultiShape::Array, encode_string).unwrap(),
            Some(json!(["a"]))
        );
    }

    #[test]
    fn decode_inverts_encode_for_every_length() {
        for shape in [MultiShape::Minimized, MultiShape::Array] {
            for len in 0..4 {
                let original: Vec<String> = (0..len).map(|i| format!("item-{i}")).collect();
                let encoded = encode_multi(&original, shape, encode_string).unwrap();
                let decoded = decode_multi("to", encoded, string).unwrap();
                assert_eq!(decoded, original, "length {len}, {shape:?}");
            }
        }
    }
}
