// ABOUTME: Reads an edited document back into node sets - either the single
// ABOUTME: holder layout or one HolderEdit per tab.

use std::collections::HashSet;

use serde_json::Value;

use crate::error::DocumentError;
use crate::node::{self, NodeModel};

/// Edits for one holder: its reference string and the node set it should have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolderEdit {
    pub who: String,
    pub nodes: HashSet<NodeModel>,
}

/// Decode the node array of a single holder block.
///
/// Metadata fields are ignored. The array is read from `nodes`, or from
/// `permissions` when `nodes` is absent.
pub fn parse_permissions(document: &Value) -> Result<HashSet<NodeModel>, DocumentError> {
    let object = document.as_object().ok_or(DocumentError::NotAnObject)?;
    let entries = object
        .get("nodes")
        .or_else(|| object.get("permissions"))
        .and_then(Value::as_array)
        .ok_or(DocumentError::MissingNodes)?;

    Ok(node::codec::decode_all(entries))
}

/// Split a document into per-holder edits.
///
/// Blocks without a non-empty `who` are skipped.
pub fn parse_document(document: &Value) -> Result<Vec<HolderEdit>, DocumentError> {
    let object = document.as_object().ok_or(DocumentError::NotAnObject)?;

    let blocks: Vec<&Value> = match object.get("tabs").and_then(Value::as_array) {
        Some(tabs) => tabs.iter().collect(),
        None => vec![document],
    };

    let mut edits = Vec::with_capacity(blocks.len());
    for (index, block) in blocks.into_iter().enumerate() {
        let who = match block.get("who").and_then(Value::as_str) {
            Some(who) if !who.is_empty() => who.to_string(),
            _ => {
                tracing::warn!(index, "skipping editor block without a target");
                continue;
            }
        };
        let nodes = parse_permissions(block)?;
        edits.push(HolderEdit { who, nodes });
    }

    Ok(edits)
}
