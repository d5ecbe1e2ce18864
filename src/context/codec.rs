// ABOUTME: JSON codec for ContextSet - one string per single-valued key,
// ABOUTME: an array of strings for multi-valued keys.

use serde_json::{Map, Value};

use super::ContextSet;

/// Encode a context set as a JSON object.
pub fn serialize(context: &ContextSet) -> Value {
    let mut object = Map::new();
    for (key, values) in context.keys() {
        let mut iter = values.iter();
        let value = match (iter.next(), iter.next()) {
            (Some(only), None) => Value::String(only.clone()),
            _ => Value::Array(values.iter().cloned().map(Value::String).collect()),
        };
        object.insert(key.to_string(), value);
    }
    Value::Object(object)
}

/// Decode a context set from JSON.
///
/// Anything that is not an object decodes to the empty set. Values that are
/// neither scalars nor arrays are skipped, as are non-scalar array elements.
pub fn deserialize(value: &Value) -> ContextSet {
    let mut context = ContextSet::new();
    let Some(object) = value.as_object() else {
        return context;
    };

    for (key, value) in object {
        match value {
            Value::Array(items) => {
                for item in items {
                    if let Some(v) = scalar_to_string(item) {
                        context.insert(key.as_str(), v);
                    }
                }
            }
            other => {
                if let Some(v) = scalar_to_string(other) {
                    context.insert(key.as_str(), v);
                }
            }
        }
    }

    context
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
