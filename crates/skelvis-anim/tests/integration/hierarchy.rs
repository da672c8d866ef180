//! Hierarchy construction and traversal through the public API

use glam::{Mat4, Vec3};
use pretty_assertions::assert_eq;
use skelvis_anim::{AnimError, NodeHierarchy, NodeId};

use super::common::{arm, assert_vec3_near};

#[test]
fn test_depth_first_visits_root_first_and_each_node_once() {
    let mut h = NodeHierarchy::new();
    let root = h.create_node("root", None, Mat4::IDENTITY).unwrap();
    let a = h.create_node("a", Some(root), Mat4::IDENTITY).unwrap();
    let b = h.create_node("b", Some(root), Mat4::IDENTITY).unwrap();
    h.create_node("a1", Some(a), Mat4::IDENTITY).unwrap();
    h.create_node("a2", Some(a), Mat4::IDENTITY).unwrap();
    h.create_node("b1", Some(b), Mat4::IDENTITY).unwrap();

    let names: Vec<&str> = h.depth_first(root).map(|n| n.name()).collect();
    assert_eq!(names, vec!["root", "a", "a1", "a2", "b", "b1"]);

    let mut ids: Vec<NodeId> = h.depth_first(root).map(|n| n.id()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), h.len());
}

#[test]
fn test_every_parent_precedes_its_children() {
    let h = arm();
    let order: Vec<NodeId> = h.depth_first(NodeId::ROOT).map(|n| n.id()).collect();
    for node in h.nodes() {
        if let Some(parent) = node.parent() {
            let p = order.iter().position(|&id| id == parent).unwrap();
            let c = order.iter().position(|&id| id == node.id()).unwrap();
            assert!(p < c, "{} visited before its parent", node.name());
        }
    }
}

#[test]
fn test_deep_chain_traversal() {
    let mut h = NodeHierarchy::new();
    let mut parent = h.create_node("joint0", None, Mat4::IDENTITY).unwrap();
    for i in 1..10_000 {
        parent = h
            .create_node(format!("joint{i}"), Some(parent), Mat4::IDENTITY)
            .unwrap();
    }
    assert_eq!(h.depth_first(NodeId::ROOT).count(), 10_000);
}

#[test]
fn test_bind_world_positions() {
    let h = arm();
    let hand = h.find("Hand").unwrap();
    assert_vec3_near(h.node(hand).bind_world_position(), Vec3::new(0.0, 2.0, 0.0));
}

#[test]
fn test_invalid_construction_is_reported() {
    let mut h = NodeHierarchy::new();
    assert!(matches!(
        h.create_node("orphan", Some(NodeId::new(3)), Mat4::IDENTITY),
        Err(AnimError::MissingRoot(_))
    ));

    h.create_node("root", None, Mat4::IDENTITY).unwrap();
    assert_eq!(
        h.create_node("root", Some(NodeId::ROOT), Mat4::IDENTITY),
        Err(AnimError::DuplicateNode("root".to_string()))
    );
}
