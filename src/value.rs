//! Tagged-union value codec and bound-value resolution.
//!
//! The protocol never ships bare JSON values. Data-model updates wrap every
//! value in a single-tag object (`valueString`, `valueNumber`, ...) and
//! component properties wrap theirs in bound values (`literalString`, ...,
//! `path`). This module owns both encodings.

use serde_json::{json, Map, Value};

use crate::pointer;

/// One decoded protocol value from a `dataModelUpdate` payload.
///
/// Map pairs keep wire order; duplicate keys collapse last-wins when the
/// value is converted to its native form.
#[derive(Debug, Clone, PartialEq)]
pub enum ProtocolValue {
    String(String),
    Number(f64),
    Bool(bool),
    Null,
    List(Vec<ProtocolValue>),
    Map(Vec<(String, ProtocolValue)>),
}

impl ProtocolValue {
    /// Decode a tagged entry object.
    ///
    /// Tags are probed by presence in fixed order: `valueString`,
    /// `valueNumber`, `valueBool`, `valueNull`, `valueList`, `valueMap`. An
    /// entry with no recognized tag, or a tag carrying the wrong JSON type,
    /// produces no value — which is distinct from a `valueNull` entry, a
    /// meaningful null.
    pub fn from_tagged(entry: &Map<String, Value>) -> Option<Self> {
        if let Some(tag) = entry.get("valueString") {
            return tag.as_str().map(|s| Self::String(s.to_string()));
        }
        if let Some(tag) = entry.get("valueNumber") {
            return tag.as_f64().map(Self::Number);
        }
        if let Some(tag) = entry.get("valueBool") {
            return tag.as_bool().map(Self::Bool);
        }
        if entry.contains_key("valueNull") {
            return Some(Self::Null);
        }
        if let Some(tag) = entry.get("valueList") {
            let items = tag.as_array()?;
            return Some(Self::List(
                items
                    .iter()
                    // Untagged elements decode to null so sibling indices
                    // keep their positions.
                    .map(|item| {
                        item.as_object()
                            .and_then(Self::from_tagged)
                            .unwrap_or(Self::Null)
                    })
                    .collect(),
            ));
        }
        if let Some(tag) = entry.get("valueMap") {
            let pairs = tag.as_array()?;
            return Some(Self::Map(
                pairs
                    .iter()
                    .filter_map(|pair| {
                        let pair = pair.as_object()?;
                        let key = pair.get("key")?.as_str()?.to_string();
                        let value = Self::from_tagged(pair)?;
                        Some((key, value))
                    })
                    .collect(),
            ));
        }
        None
    }

    /// Convert to a native JSON value. Map duplicates collapse last-wins.
    pub fn into_native(self) -> Value {
        match self {
            Self::String(s) => Value::String(s),
            Self::Number(n) => Value::from(n),
            Self::Bool(b) => Value::Bool(b),
            Self::Null => Value::Null,
            Self::List(items) => Value::Array(items.into_iter().map(Self::into_native).collect()),
            Self::Map(pairs) => {
                let mut map = Map::new();
                for (key, value) in pairs {
                    map.insert(key, value.into_native());
                }
                Value::Object(map)
            }
        }
    }

    /// Build from a native JSON value: the encode direction, used when a
    /// host echoes edits or fabricates updates.
    pub fn from_native(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => Self::Number(n.as_f64().unwrap_or_default()),
            Value::String(s) => Self::String(s.clone()),
            Value::Array(items) => Self::List(items.iter().map(Self::from_native).collect()),
            Value::Object(map) => Self::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), Self::from_native(v)))
                    .collect(),
            ),
        }
    }

    /// Encode as the tagged wire object.
    pub fn to_tagged(&self) -> Value {
        match self {
            Self::String(s) => json!({ "valueString": s }),
            Self::Number(n) => json!({ "valueNumber": n }),
            Self::Bool(b) => json!({ "valueBool": b }),
            Self::Null => json!({ "valueNull": true }),
            Self::List(items) => {
                json!({ "valueList": items.iter().map(Self::to_tagged).collect::<Vec<_>>() })
            }
            Self::Map(pairs) => {
                let entries: Vec<Value> = pairs
                    .iter()
                    .map(|(key, value)| {
                        let mut entry = Map::new();
                        entry.insert("key".to_string(), Value::String(key.clone()));
                        if let Value::Object(tagged) = value.to_tagged() {
                            entry.extend(tagged);
                        }
                        Value::Object(entry)
                    })
                    .collect();
                json!({ "valueMap": entries })
            }
        }
    }
}

/// Decode one tagged data-model entry straight to a native value.
pub fn decode_entry(entry: &Map<String, Value>) -> Option<Value> {
    ProtocolValue::from_tagged(entry).map(ProtocolValue::into_native)
}

/// A component property that is either an inline literal or a pointer into
/// the owning surface's data model.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundValue {
    LiteralString(String),
    LiteralNumber(f64),
    LiteralBool(bool),
    Path(String),
}

impl BoundValue {
    /// Probe a tagged object, first match wins: `literalString`,
    /// `literalNumber`, `literalBool` (older catalog revisions spell it
    /// `literalBoolean`), then `path`.
    pub fn from_tagged(entry: &Map<String, Value>) -> Option<Self> {
        if let Some(tag) = entry.get("literalString") {
            return tag.as_str().map(|s| Self::LiteralString(s.to_string()));
        }
        if let Some(tag) = entry.get("literalNumber") {
            return tag.as_f64().map(Self::LiteralNumber);
        }
        if let Some(tag) = entry
            .get("literalBool")
            .or_else(|| entry.get("literalBoolean"))
        {
            return tag.as_bool().map(Self::LiteralBool);
        }
        if let Some(tag) = entry.get("path") {
            return tag.as_str().map(|p| Self::Path(p.to_string()));
        }
        None
    }
}

/// Resolve a possibly-bound value against `data`.
///
/// Non-object inputs are already literal and come back unchanged. Objects
/// resolve per tag; an object with no recognized tag resolves to nothing.
/// Resolution is never cached, so re-resolving after a data-model change
/// observes the new value.
pub fn resolve_bound(value: &Value, data: &Value) -> Option<Value> {
    let Some(entry) = value.as_object() else {
        return Some(value.clone());
    };
    match BoundValue::from_tagged(entry)? {
        BoundValue::LiteralString(s) => Some(Value::String(s)),
        BoundValue::LiteralNumber(n) => Some(Value::from(n)),
        BoundValue::LiteralBool(b) => Some(Value::Bool(b)),
        BoundValue::Path(path) => pointer::read(&path, data).cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(raw: Value) -> Map<String, Value> {
        raw.as_object().cloned().unwrap()
    }

    #[test]
    fn test_decode_scalars() {
        assert_eq!(
            decode_entry(&entry(json!({ "valueString": "hi" }))),
            Some(json!("hi"))
        );
        assert_eq!(
            decode_entry(&entry(json!({ "valueNumber": 3.5 }))),
            Some(json!(3.5))
        );
        assert_eq!(
            decode_entry(&entry(json!({ "valueBool": false }))),
            Some(json!(false))
        );
        assert_eq!(
            decode_entry(&entry(json!({ "valueNull": true }))),
            Some(Value::Null)
        );
    }

    #[test]
    fn test_decode_value_map_scenario() {
        let raw = entry(json!({
            "key": "user",
            "valueMap": [ { "key": "name", "valueString": "Ada" } ]
        }));
        assert_eq!(decode_entry(&raw), Some(json!({ "name": "Ada" })));
    }

    #[test]
    fn test_decode_nested_list() {
        let raw = entry(json!({
            "valueList": [
                { "valueNumber": 1 },
                { "valueList": [ { "valueString": "deep" } ] }
            ]
        }));
        assert_eq!(decode_entry(&raw), Some(json!([1.0, ["deep"]])));
    }

    #[test]
    fn test_decode_no_tag_is_absent_not_null() {
        assert_eq!(decode_entry(&entry(json!({ "key": "user" }))), None);
        // valueNull is a value; a missing tag is not.
        assert_eq!(
            decode_entry(&entry(json!({ "key": "user", "valueNull": true }))),
            Some(Value::Null)
        );
    }

    #[test]
    fn test_decode_wrong_typed_tag_is_absent() {
        assert_eq!(decode_entry(&entry(json!({ "valueString": 42 }))), None);
        assert_eq!(decode_entry(&entry(json!({ "valueList": "nope" }))), None);
    }

    #[test]
    fn test_decode_zero_and_false_survive() {
        // The falsy-coalescing decode bug would lose these.
        assert_eq!(
            decode_entry(&entry(json!({ "valueNumber": 0 }))),
            Some(json!(0.0))
        );
        assert_eq!(
            decode_entry(&entry(json!({ "valueBool": false }))),
            Some(json!(false))
        );
        assert_eq!(
            decode_entry(&entry(json!({ "valueString": "" }))),
            Some(json!(""))
        );
    }

    #[test]
    fn test_decode_duplicate_map_keys_last_wins() {
        let raw = entry(json!({
            "valueMap": [
                { "key": "k", "valueNumber": 1 },
                { "key": "k", "valueNumber": 2 }
            ]
        }));
        assert_eq!(decode_entry(&raw), Some(json!({ "k": 2.0 })));
    }

    #[test]
    fn test_untagged_list_element_becomes_null() {
        let raw = entry(json!({
            "valueList": [ { "valueNumber": 1 }, { "unknown": true }, { "valueNumber": 3 } ]
        }));
        assert_eq!(decode_entry(&raw), Some(json!([1.0, null, 3.0])));
    }

    #[test]
    fn test_tagged_round_trip() {
        let value = ProtocolValue::Map(vec![
            ("name".to_string(), ProtocolValue::String("Ada".to_string())),
            (
                "tags".to_string(),
                ProtocolValue::List(vec![ProtocolValue::Bool(true), ProtocolValue::Null]),
            ),
        ]);
        let tagged = value.to_tagged();
        let back = ProtocolValue::from_tagged(tagged.as_object().unwrap()).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_from_native_matches_decoded_shape() {
        let native = json!({ "a": [1.0, "x", null], "b": false });
        let encoded = ProtocolValue::from_native(&native);
        assert_eq!(encoded.into_native(), native);
    }

    #[test]
    fn test_resolve_literals() {
        let data = json!({});
        assert_eq!(
            resolve_bound(&json!({ "literalString": "hi" }), &data),
            Some(json!("hi"))
        );
        assert_eq!(
            resolve_bound(&json!({ "literalNumber": 0 }), &data),
            Some(json!(0.0))
        );
        assert_eq!(
            resolve_bound(&json!({ "literalBool": false }), &data),
            Some(json!(false))
        );
        assert_eq!(
            resolve_bound(&json!({ "literalBoolean": true }), &data),
            Some(json!(true))
        );
    }

    #[test]
    fn test_resolve_path_reference() {
        let data = json!({ "user": { "name": "Ada" } });
        assert_eq!(
            resolve_bound(&json!({ "path": "/user/name" }), &data),
            Some(json!("Ada"))
        );
        assert_eq!(resolve_bound(&json!({ "path": "/missing" }), &data), None);
    }

    #[test]
    fn test_resolve_precedence_literal_before_path() {
        let data = json!({ "x": "from data" });
        assert_eq!(
            resolve_bound(&json!({ "literalString": "inline", "path": "/x" }), &data),
            Some(json!("inline"))
        );
    }

    #[test]
    fn test_resolve_non_object_passes_through() {
        let data = json!({});
        assert_eq!(resolve_bound(&json!("plain"), &data), Some(json!("plain")));
        assert_eq!(resolve_bound(&json!(9), &data), Some(json!(9)));
    }

    #[test]
    fn test_resolve_untagged_object_is_none() {
        assert_eq!(resolve_bound(&json!({ "color": "red" }), &json!({})), None);
    }
}
