// ABOUTME: JSON codec for NodeModel - compact encoding that omits defaulted
// ABOUTME: fields, and a tolerant decoder for edited node arrays.

use std::collections::HashSet;

use serde_json::{Map, Value};

use super::NodeModel;
use crate::context;
use crate::error::NodeDecodeError;

/// Encode a node. Only non-default scope, expiry and context are written.
pub fn encode(node: &NodeModel) -> Value {
    let mut attributes = Map::new();
    attributes.insert("permission".into(), Value::String(node.permission.clone()));
    attributes.insert("value".into(), Value::Bool(node.value));

    if node.is_server_specific() {
        attributes.insert("server".into(), Value::String(node.server.clone()));
    }
    if node.is_world_specific() {
        attributes.insert("world".into(), Value::String(node.world.clone()));
    }
    if node.is_temporary() {
        attributes.insert("expiry".into(), Value::from(node.expiry));
    }
    if !node.context.is_empty() {
        attributes.insert("context".into(), context::codec::serialize(&node.context));
    }

    Value::Object(attributes)
}

/// Encode a sequence of nodes into a JSON array, preserving order.
pub fn encode_all<'a>(nodes: impl IntoIterator<Item = &'a NodeModel>) -> Value {
    Value::Array(nodes.into_iter().map(encode).collect())
}

/// Decode one node entry.
///
/// `permission` is required and must be a non-empty string. Every other field
/// falls back to its default only when absent. Present scalars are coerced the
/// way the editor may write them: `value` accepts `"true"`/`"false"`, `expiry`
/// accepts floats and numeric strings (truncated), `server` and `world` accept
/// any scalar. Arrays, objects and negative expiries are errors. A `context`
/// that is not an object decodes as empty.
pub fn decode(entry: &Value) -> Result<NodeModel, NodeDecodeError> {
    let data = entry.as_object().ok_or(NodeDecodeError::NotAnObject)?;

    let permission = match data.get("permission") {
        Some(Value::String(p)) if !p.is_empty() => p.clone(),
        Some(Value::String(_)) | None | Some(Value::Null) => {
            return Err(NodeDecodeError::MissingPermission);
        }
        Some(_) => {
            return Err(NodeDecodeError::InvalidField {
                field: "permission",
                expected: "a string",
            });
        }
    };

    let mut node = NodeModel::new(permission);

    if let Some(value) = data.get("value") {
        node.value = bool_field(value)?;
    }
    if let Some(server) = data.get("server") {
        node.server = string_field(server, "server")?;
    }
    if let Some(world) = data.get("world") {
        node.world = string_field(world, "world")?;
    }
    if let Some(expiry) = data.get("expiry") {
        node.expiry = expiry_field(expiry)?;
    }
    if let Some(ctx) = data.get("context").filter(|c| c.is_object()) {
        node.context = context::codec::deserialize(ctx);
    }

    Ok(node)
}

/// Decode a node array into a set, skipping entries that cannot be decoded.
pub fn decode_all(entries: &[Value]) -> HashSet<NodeModel> {
    let mut nodes = HashSet::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        if !entry.is_object() {
            continue;
        }
        match decode(entry) {
            Ok(node) => {
                nodes.insert(node);
            }
            Err(e) => tracing::warn!(index, error = %e, "skipping node entry"),
        }
    }

    nodes
}

fn string_field(value: &Value, field: &'static str) -> Result<String, NodeDecodeError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(NodeDecodeError::InvalidField {
            field,
            expected: "a string",
        }),
    }
}

fn bool_field(value: &Value) -> Result<bool, NodeDecodeError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) => Ok(s.trim().eq_ignore_ascii_case("true")),
        _ => Err(NodeDecodeError::InvalidField {
            field: "value",
            expected: "a boolean",
        }),
    }
}

fn expiry_field(value: &Value) -> Result<u64, NodeDecodeError> {
    let invalid = NodeDecodeError::InvalidField {
        field: "expiry",
        expected: "a non-negative number",
    };
    let number = match value {
        Value::Number(n) => match n.as_u64() {
            Some(secs) => return Ok(secs),
            None => n.as_f64(),
        },
        Value::String(s) => {
            let s = s.trim();
            match s.parse::<u64>() {
                Ok(secs) => return Ok(secs),
                Err(_) => s.parse::<f64>().ok(),
            }
        }
        _ => None,
    };

    match number {
        Some(secs) if secs.is_finite() && secs >= 0.0 => Ok(secs.trunc() as u64),
        _ => Err(invalid),
    }
}
