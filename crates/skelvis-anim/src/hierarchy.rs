//! Indexed node hierarchy for skeletons and scene graphs
//!
//! Nodes live in a single arena owned by [`NodeHierarchy`]. A node's id is
//! its index in that arena and never changes once the node is created.
//! The first node created is the root (id 0); every later node names an
//! existing parent, so the parent/child relation is always a tree.

use std::collections::HashMap;
use std::fmt;

use glam::{Mat4, Vec3};
use log::{debug, warn};

use crate::error::{AnimError, Result};

/// Number of skinning matrices an evaluator produces
pub const MAX_BONES: usize = 100;

/// Stable index of a node inside its hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Id of the root node
    pub const ROOT: Self = Self(0);

    /// Create an id from an arena index
    pub const fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Arena index of this id
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named transform node
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    id: NodeId,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Rest-position transform relative to the parent
    local_bind: Mat4,
    /// Maps bind-pose model space into this bone's local space
    inverse_bind: Mat4,
    /// Skinning matrix slot, set once the node is known to be a bone
    bone_slot: Option<usize>,
    /// Bind-pose transform relative to the hierarchy root's parent space
    bind_world: Mat4,
}

impl Node {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Parent node, `None` for the root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in creation order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn local_bind_transform(&self) -> Mat4 {
        self.local_bind
    }

    pub fn inverse_bind_offset(&self) -> Mat4 {
        self.inverse_bind
    }

    pub fn is_bone(&self) -> bool {
        self.bone_slot.is_some()
    }

    /// Slot this bone writes in the skinning matrix array
    pub fn bone_slot(&self) -> Option<usize> {
        self.bone_slot
    }

    pub fn bind_world_transform(&self) -> Mat4 {
        self.bind_world
    }

    /// World position of the node in bind pose
    pub fn bind_world_position(&self) -> Vec3 {
        self.bind_world.transform_point3(Vec3::ZERO)
    }
}

/// Arena of nodes forming a single tree
#[derive(Debug, Clone, Default)]
pub struct NodeHierarchy {
    nodes: Vec<Node>,
    by_name: HashMap<String, NodeId>,
}

impl NodeHierarchy {
    /// Create an empty hierarchy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a node under `parent`, or the root when `parent` is `None`
    ///
    /// The first node must be the root and only one root may exist.
    pub fn create_node(
        &mut self,
        name: impl Into<String>,
        parent: Option<NodeId>,
        local_bind: Mat4,
    ) -> Result<NodeId> {
        let name = name.into();

        if self.by_name.contains_key(&name) {
            return Err(AnimError::DuplicateNode(name));
        }

        let parent_world = match parent {
            None if !self.nodes.is_empty() => return Err(AnimError::RootAlreadyExists(name)),
            None => Mat4::IDENTITY,
            Some(_) if self.nodes.is_empty() => return Err(AnimError::MissingRoot(name)),
            Some(parent_id) => match self.nodes.get(parent_id.index()) {
                Some(parent_node) => parent_node.bind_world,
                None => {
                    return Err(AnimError::UnknownParent {
                        name,
                        parent: parent_id,
                    });
                }
            },
        };

        let id = NodeId::new(self.nodes.len());
        if let Some(parent_id) = parent {
            self.nodes[parent_id.index()].children.push(id);
        }

        debug!("Created node {} '{}' under {:?}", id, name, parent);

        self.by_name.insert(name.clone(), id);
        self.nodes.push(Node {
            name,
            id,
            parent,
            children: Vec::new(),
            local_bind,
            inverse_bind: Mat4::IDENTITY,
            bone_slot: None,
            bind_world: parent_world * local_bind,
        });

        Ok(id)
    }

    /// Mark the named node as a bone whose slot equals its id
    ///
    /// A bone missing from the hierarchy is attached to the root with an
    /// identity bind transform so its skinning slot still gets written.
    pub fn bind_bone(&mut self, name: &str, inverse_bind: Mat4) -> Result<NodeId> {
        let id = self.bone_node(name)?;
        self.mark_bone(id, id.index(), inverse_bind);
        Ok(id)
    }

    /// Mark the named node as a bone writing to an explicit slot
    pub fn bind_bone_at_slot(
        &mut self,
        name: &str,
        slot: usize,
        inverse_bind: Mat4,
    ) -> Result<NodeId> {
        let id = self.bone_node(name)?;
        self.mark_bone(id, slot, inverse_bind);
        Ok(id)
    }

    fn bone_node(&mut self, name: &str) -> Result<NodeId> {
        match self.find(name) {
            Some(id) => Ok(id),
            None => {
                warn!("Bone '{}' has no node in the hierarchy, attaching to root", name);
                self.create_node(name, Some(NodeId::ROOT), Mat4::IDENTITY)
            }
        }
    }

    /// Node currently writing to skinning slot `slot`
    pub fn bone_at_slot(&self, slot: usize) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.bone_slot == Some(slot))
            .map(NodeId::new)
    }

    fn mark_bone(&mut self, id: NodeId, slot: usize, inverse_bind: Mat4) {
        let owner = self
            .nodes
            .iter()
            .find(|n| n.id != id && n.bone_slot == Some(slot));
        if let Some(owner) = owner {
            warn!(
                "Bone '{}' shares skinning slot {} with bone '{}'",
                self.nodes[id.index()].name,
                slot,
                owner.name
            );
        }
        let node = &mut self.nodes[id.index()];
        if slot >= MAX_BONES {
            warn!(
                "Bone '{}' uses slot {} outside the {} skinning matrices",
                node.name, slot, MAX_BONES
            );
        }
        node.inverse_bind = inverse_bind;
        node.bone_slot = Some(slot);
    }

    /// Get a node by id
    ///
    /// Panics if the id does not belong to this hierarchy.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Get a node by id, `None` if it does not exist
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Find a node id by name
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    pub fn root(&self) -> Option<NodeId> {
        (!self.nodes.is_empty()).then_some(NodeId::ROOT)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in id order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of nodes flagged as bones
    pub fn bone_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_bone()).count()
    }

    /// Iterate the subtree at `start`, parents strictly before children
    pub fn depth_first(&self, start: NodeId) -> DepthFirst<'_> {
        DepthFirst {
            hierarchy: self,
            stack: vec![start],
        }
    }

    /// Visit the subtree at `start` depth-first, each node exactly once
    pub fn for_each_depth_first<F>(&self, start: NodeId, mut visitor: F)
    where
        F: FnMut(&Node),
    {
        for node in self.depth_first(start) {
            visitor(node);
        }
    }
}

/// Pre-order traversal using an explicit stack
#[derive(Debug)]
pub struct DepthFirst<'a> {
    hierarchy: &'a NodeHierarchy,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.hierarchy.node(id);
        // Reverse so the first child is visited first
        self.stack.extend(node.children.iter().rev().copied());
        Some(node)
    }
}
