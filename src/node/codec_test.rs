// ABOUTME: Tests for the node JSON codec - compact encoding, defaults,
// ABOUTME: set semantics and tolerance of malformed entries.

use serde_json::json;

use super::NodeModel;
use super::codec::{decode, decode_all, encode, encode_all};
use crate::context::ContextSet;
use crate::error::NodeDecodeError;

fn scoped_node() -> NodeModel {
    NodeModel::new("essentials.fly")
        .value(false)
        .server("survival")
        .world("nether")
        .expiry(1_700_000_000)
        .context(
            ContextSet::new()
                .with("gamemode", "creative")
                .with("region", "spawn")
                .with("region", "market"),
        )
}

#[test]
fn test_minimal_encoding() {
    let json = encode(&NodeModel::new("essentials.home"));
    assert_eq!(json, json!({"permission": "essentials.home", "value": true}));
}

#[test]
fn test_full_encoding() {
    let json = encode(&scoped_node());

    assert_eq!(
        json,
        json!({
            "permission": "essentials.fly",
            "value": false,
            "server": "survival",
            "world": "nether",
            "expiry": 1_700_000_000u64,
            "context": {"gamemode": "creative", "region": ["market", "spawn"]}
        })
    );
}

#[test]
fn test_round_trip() {
    let nodes = [
        NodeModel::new("essentials.home"),
        NodeModel::new("essentials.warp").value(false),
        NodeModel::new("worldedit.*").world("creative"),
        NodeModel::new("group.admin").server("lobby").expiry(42),
        scoped_node(),
    ];

    for node in nodes {
        assert_eq!(decode(&encode(&node)).unwrap(), node);
    }
}

#[test]
fn test_decode_defaults() {
    let node = decode(&json!({"permission": "essentials.home"})).unwrap();

    assert!(node.value);
    assert_eq!(node.server, "global");
    assert_eq!(node.world, "global");
    assert_eq!(node.expiry, 0);
    assert!(node.context.is_empty());
}

#[test]
fn test_decode_missing_permission() {
    assert_eq!(
        decode(&json!({"value": true})),
        Err(NodeDecodeError::MissingPermission)
    );
    assert_eq!(
        decode(&json!({"permission": ""})),
        Err(NodeDecodeError::MissingPermission)
    );
}

#[test]
fn test_decode_wrong_type() {
    let err = decode(&json!({"permission": "a", "value": [true]})).unwrap_err();
    assert_eq!(
        err,
        NodeDecodeError::InvalidField {
            field: "value",
            expected: "a boolean"
        }
    );

    assert!(decode(&json!({"permission": "a", "expiry": -5})).is_err());
    assert!(decode(&json!({"permission": "a", "expiry": "soon"})).is_err());
    assert!(decode(&json!({"permission": "a", "world": {"name": "nether"}})).is_err());
}

#[test]
fn test_decode_coerces_scalars() {
    let node = decode(&json!({
        "permission": "a",
        "value": "false",
        "server": 1,
        "expiry": "1700000000"
    }))
    .unwrap();

    assert!(!node.value);
    assert_eq!(node.server, "1");
    assert_eq!(node.expiry, 1_700_000_000);
    assert!(decode(&json!({"permission": "a", "value": "TRUE"})).unwrap().value);
}

#[test]
fn test_decode_all_keeps_coercible_entries() {
    let nodes = decode_all(
        json!([
            {"permission": "a", "expiry": 1.7e9},
            {"permission": "b", "value": "false"},
            {"permission": "c", "expiry": "12.9"}
        ])
        .as_array()
        .unwrap(),
    );

    assert_eq!(nodes.len(), 3);
    assert!(nodes.contains(&NodeModel::new("a").expiry(1_700_000_000)));
    assert!(nodes.contains(&NodeModel::new("b").value(false)));
    assert!(nodes.contains(&NodeModel::new("c").expiry(12)));
}

#[test]
fn test_decode_context_not_object_is_empty() {
    let node = decode(&json!({"permission": "a", "context": "world=nether"})).unwrap();
    assert!(node.context.is_empty());
}

#[test]
fn test_decode_all_skips_stray_entries() {
    let nodes = decode_all(
        json!([
            {"permission": "a"},
            "not-an-object",
            null,
            {"permission": "b", "value": false}
        ])
        .as_array()
        .unwrap(),
    );

    assert_eq!(nodes.len(), 2);
    assert!(nodes.contains(&NodeModel::new("a")));
    assert!(nodes.contains(&NodeModel::new("b").value(false)));
}

#[test]
fn test_decode_all_skips_undecodable_objects() {
    let nodes = decode_all(
        json!([
            {"value": false},
            {"permission": "b", "world": ["nether"]},
            {"permission": "c"}
        ])
        .as_array()
        .unwrap(),
    );

    assert_eq!(nodes.len(), 1);
    assert!(nodes.contains(&NodeModel::new("c")));
}

#[test]
fn test_decode_all_dedups_by_full_tuple() {
    let nodes = decode_all(
        json!([
            {"permission": "a", "value": true, "world": "nether"},
            {"world": "nether", "value": true, "permission": "a"}
        ])
        .as_array()
        .unwrap(),
    );
    assert_eq!(nodes.len(), 1);
}

#[test]
fn test_context_distinguishes_nodes() {
    let nodes = decode_all(
        json!([
            {"permission": "a"},
            {"permission": "a", "context": {"world": "nether"}}
        ])
        .as_array()
        .unwrap(),
    );
    assert_eq!(nodes.len(), 2);
}

#[test]
fn test_encode_all_preserves_order() {
    let json = encode_all(&[NodeModel::new("b"), NodeModel::new("a")]);
    assert_eq!(json[0]["permission"], "b");
    assert_eq!(json[1]["permission"], "a");
}
