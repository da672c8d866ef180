//! Per-bone keyframe tracks

use glam::{Quat, Vec3};
#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

use super::interpolation::sample_keys;
use super::types::{Keyframe, Lerp, LocalPose};
use crate::error::{AnimError, Result};
use crate::hierarchy::NodeId;

/// A validated keyframe sequence for one channel
///
/// Always holds at least one key, with non-decreasing timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel<T> {
    keys: Vec<Keyframe<T>>,
}

impl<T: Lerp> Channel<T> {
    /// Validate and wrap a key sequence
    ///
    /// `bone` and `channel` only label the error.
    pub fn new(keys: Vec<Keyframe<T>>, bone: &str, channel: &'static str) -> Result<Self> {
        if keys.is_empty() {
            return Err(AnimError::EmptyChannel {
                bone: bone.to_string(),
                channel,
            });
        }

        if let Some(index) = keys.windows(2).position(|w| w[1].time < w[0].time) {
            return Err(AnimError::NonMonotonicKeys {
                bone: bone.to_string(),
                channel,
                index: index + 1,
            });
        }

        Ok(Self { keys })
    }

    pub fn keys(&self) -> &[Keyframe<T>] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Never true for a constructed channel
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Value of the channel at `time` in ticks
    pub fn sample(&self, time: f32) -> T {
        sample_keys(&self.keys, time).unwrap_or(self.keys[0].value)
    }
}

/// Unvalidated keyframe data for one bone, as handed over by an importer
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct BoneChannels {
    pub bone: String,
    #[cfg_attr(feature = "serde-support", serde(default))]
    pub positions: Vec<Keyframe<Vec3>>,
    #[cfg_attr(feature = "serde-support", serde(default))]
    pub rotations: Vec<Keyframe<Quat>>,
    #[cfg_attr(feature = "serde-support", serde(default))]
    pub scales: Vec<Keyframe<Vec3>>,
}

impl BoneChannels {
    pub fn new(bone: impl Into<String>) -> Self {
        Self {
            bone: bone.into(),
            ..Self::default()
        }
    }

    pub fn with_position(mut self, time: f32, value: Vec3) -> Self {
        self.positions.push(Keyframe::new(time, value));
        self
    }

    pub fn with_rotation(mut self, time: f32, value: Quat) -> Self {
        self.rotations.push(Keyframe::new(time, value));
        self
    }

    pub fn with_scale(mut self, time: f32, value: Vec3) -> Self {
        self.scales.push(Keyframe::new(time, value));
        self
    }
}

/// Keyframe track bound to one hierarchy node
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeTrack {
    node: NodeId,
    bone: String,
    positions: Channel<Vec3>,
    rotations: Channel<Quat>,
    scales: Channel<Vec3>,
}

impl KeyframeTrack {
    /// Validate all three channels and bind them to `node`
    ///
    /// Rotation keys are normalized here so single-key and interpolated
    /// channels both yield unit quaternions.
    pub fn new(node: NodeId, channels: BoneChannels) -> Result<Self> {
        let BoneChannels {
            bone,
            positions,
            mut rotations,
            scales,
        } = channels;

        for (index, key) in rotations.iter_mut().enumerate() {
            let length = key.value.length();
            if !(length.is_finite() && length > f32::EPSILON) {
                return Err(AnimError::DegenerateRotation { bone, index });
            }
            key.value = key.value / length;
        }

        let positions = Channel::new(positions, &bone, "position")?;
        let rotations = Channel::new(rotations, &bone, "rotation")?;
        let scales = Channel::new(scales, &bone, "scale")?;

        Ok(Self {
            node,
            bone,
            positions,
            rotations,
            scales,
        })
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn bone_name(&self) -> &str {
        &self.bone
    }

    pub fn positions(&self) -> &Channel<Vec3> {
        &self.positions
    }

    pub fn rotations(&self) -> &Channel<Quat> {
        &self.rotations
    }

    pub fn scales(&self) -> &Channel<Vec3> {
        &self.scales
    }

    /// Interpolate each channel independently at `time`
    pub fn sample(&self, time: f32) -> LocalPose {
        LocalPose {
            translation: self.positions.sample(time),
            rotation: self.rotations.sample(time),
            scale: self.scales.sample(time),
        }
    }
}
