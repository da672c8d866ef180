//! Pose evaluation and skinning matrix production
//!
//! An [`Animator`] is the per-instance playback state of one animated object.
//! Each [`Animator::update`] advances the clip time and walks the hierarchy
//! once, parents before children, producing world transforms for every node
//! and a skinning matrix for every bone.

use std::collections::HashSet;

use glam::{Mat4, Vec3};
use log::{trace, warn};

use super::clip::AnimationClip;
use super::state::AnimationState;
use crate::hierarchy::{MAX_BONES, NodeHierarchy, NodeId};

/// Per-instance animation playback and pose cache
#[derive(Debug, Clone)]
pub struct Animator<'a> {
    state: AnimationState<'a>,
    /// Skinning matrices uploaded to the renderer, identity when unwritten
    skinning: Vec<Mat4>,
    /// World transform of every node, indexed by node id
    world_transforms: Vec<Mat4>,
    /// Nodes already reported for writing outside the skinning array
    overflow_reported: HashSet<NodeId>,
}

impl Default for Animator<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Animator<'a> {
    /// Create an idle animator with identity skinning matrices
    pub fn new() -> Self {
        Self {
            state: AnimationState::idle(),
            skinning: vec![Mat4::IDENTITY; MAX_BONES],
            world_transforms: Vec::new(),
            overflow_reported: HashSet::new(),
        }
    }

    /// Create an idle animator whose world cache starts at the bind pose
    pub fn with_bind_pose(hierarchy: &NodeHierarchy) -> Self {
        let mut animator = Self::new();
        animator.reset_to_bind_pose(hierarchy);
        animator
    }

    fn reset_to_bind_pose(&mut self, hierarchy: &NodeHierarchy) {
        self.world_transforms = hierarchy
            .nodes()
            .iter()
            .map(|n| n.bind_world_transform())
            .collect();
    }

    /// Start playing `clip` from tick 0
    pub fn play(&mut self, clip: &'a AnimationClip) {
        self.state.play(clip);
    }

    /// Return to idle, keeping the last computed pose
    pub fn stop(&mut self) {
        self.state.stop();
    }

    pub fn current_clip(&self) -> Option<&'a AnimationClip> {
        self.state.clip()
    }

    /// Current playback time in ticks
    pub fn current_time(&self) -> f32 {
        self.state.time()
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_active()
    }

    /// Advance playback by `delta_seconds` and recompute the pose
    ///
    /// A no-op while idle: skinning matrices keep their last values.
    pub fn update(&mut self, delta_seconds: f32, hierarchy: &NodeHierarchy) {
        let Some(clip) = self.state.clip() else {
            return;
        };

        self.state.advance(delta_seconds);
        self.compute_pose(clip, hierarchy);
    }

    /// Walk the hierarchy from the root and rebuild every world transform
    fn compute_pose(&mut self, clip: &AnimationClip, hierarchy: &NodeHierarchy) {
        let Some(root) = hierarchy.root() else {
            return;
        };

        if self.world_transforms.len() != hierarchy.len() {
            self.reset_to_bind_pose(hierarchy);
        }

        let time = self.state.time();

        for node in hierarchy.depth_first(root) {
            let local = match clip.find_track(node.id()) {
                Some(track) => track.sample(time).to_matrix(),
                None => node.local_bind_transform(),
            };

            // Parents are always visited first, so their entry is current
            let parent_world = node
                .parent()
                .map_or(Mat4::IDENTITY, |p| self.world_transforms[p.index()]);
            let world = parent_world * local;
            self.world_transforms[node.id().index()] = world;

            let Some(slot) = node.bone_slot() else {
                continue;
            };

            if slot < MAX_BONES {
                self.skinning[slot] = world * node.inverse_bind_offset();
            } else if self.overflow_reported.insert(node.id()) {
                warn!(
                    "Bone '{}' slot {} exceeds {} skinning matrices, skipping",
                    node.name(),
                    slot,
                    MAX_BONES
                );
            }
        }

        trace!(
            "Pose for clip '{}' at tick {:.3}: {} nodes",
            clip.name(),
            time,
            hierarchy.len()
        );
    }

    /// Skinning matrices, always [`MAX_BONES`] long
    pub fn skinning_matrices(&self) -> &[Mat4] {
        &self.skinning
    }

    /// Skinning matrices flattened column-major for GPU upload
    pub fn skinning_data(&self) -> Vec<f32> {
        self.skinning
            .iter()
            .flat_map(Mat4::to_cols_array)
            .collect()
    }

    /// Cached world transform of `node`, `None` before the first pose
    pub fn world_transform(&self, node: NodeId) -> Option<Mat4> {
        self.world_transforms.get(node.index()).copied()
    }

    /// Cached world position of `node` (its transform applied to the origin)
    pub fn world_position(&self, node: NodeId) -> Option<Vec3> {
        self.world_transform(node)
            .map(|m| m.transform_point3(Vec3::ZERO))
    }

    /// World positions of all bone nodes, in id order
    pub fn bone_positions(&self, hierarchy: &NodeHierarchy) -> Vec<Vec3> {
        hierarchy
            .nodes()
            .iter()
            .filter(|n| n.is_bone())
            .filter_map(|n| self.world_position(n.id()))
            .collect()
    }

    /// Line segments from each bone to its parent bone, for skeleton display
    pub fn bone_segments(&self, hierarchy: &NodeHierarchy) -> Vec<(Vec3, Vec3)> {
        hierarchy
            .nodes()
            .iter()
            .filter(|n| n.is_bone())
            .filter_map(|n| {
                let parent = n.parent()?;
                if !hierarchy.node(parent).is_bone() {
                    return None;
                }
                Some((self.world_position(n.id())?, self.world_position(parent)?))
            })
            .collect()
    }
}
