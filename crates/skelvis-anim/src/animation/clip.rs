//! Animation clips bound to a node hierarchy

use std::collections::HashMap;

use log::{debug, warn};

use super::track::{BoneChannels, KeyframeTrack};
use crate::error::{AnimError, Result};
use crate::hierarchy::{NodeHierarchy, NodeId};

/// Tick rate used when the source data does not provide one
pub const DEFAULT_TICKS_PER_SECOND: f32 = 25.0;

/// A named set of keyframe tracks keyed by node id
///
/// Built once against a specific [`NodeHierarchy`] and immutable afterwards.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    name: String,
    duration: f32,
    ticks_per_second: f32,
    tracks: HashMap<NodeId, KeyframeTrack>,
}

impl AnimationClip {
    /// Build a clip, binding each bone's channels to the hierarchy by name
    ///
    /// Channels naming a bone the hierarchy does not contain are dropped with
    /// a warning. A missing or non-positive tick rate falls back to
    /// [`DEFAULT_TICKS_PER_SECOND`].
    pub fn new<I>(
        name: impl Into<String>,
        duration: f32,
        ticks_per_second: Option<f32>,
        channels: I,
        hierarchy: &NodeHierarchy,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = BoneChannels>,
    {
        let name = name.into();

        if !(duration.is_finite() && duration > 0.0) {
            return Err(AnimError::InvalidDuration {
                clip: name,
                duration,
            });
        }

        let ticks_per_second = match ticks_per_second {
            Some(tps) if tps.is_finite() && tps > 0.0 => tps,
            _ => DEFAULT_TICKS_PER_SECOND,
        };

        let mut tracks = HashMap::new();
        for bone_channels in channels {
            let Some(node) = hierarchy.find(&bone_channels.bone) else {
                warn!(
                    "Clip '{}': bone '{}' not found in hierarchy, dropping track",
                    name, bone_channels.bone
                );
                continue;
            };

            let track = KeyframeTrack::new(node, bone_channels)?;
            if tracks.insert(node, track).is_some() {
                warn!(
                    "Clip '{}': more than one track for node {}, keeping the last",
                    name, node
                );
            }
        }

        debug!(
            "Built clip '{}': {} ticks at {} ticks/s, {} tracks",
            name,
            duration,
            ticks_per_second,
            tracks.len()
        );

        Ok(Self {
            name,
            duration,
            ticks_per_second,
            tracks,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Clip length in ticks
    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn ticks_per_second(&self) -> f32 {
        self.ticks_per_second
    }

    /// Clip length in seconds
    pub fn duration_seconds(&self) -> f32 {
        self.duration / self.ticks_per_second
    }

    /// Track animating `node`, if any
    pub fn find_track(&self, node: NodeId) -> Option<&KeyframeTrack> {
        self.tracks.get(&node)
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    pub fn tracks(&self) -> impl Iterator<Item = &KeyframeTrack> {
        self.tracks.values()
    }
}
