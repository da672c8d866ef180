//! Rig description data handed over by an asset importer
//!
//! [`RigDef`] is the plain data an importer produces (node list, bone
//! bindings and clips). [`RigAsset::from_def`] validates it and builds the
//! immutable [`NodeHierarchy`] and [`ClipLibrary`] that playback reads.
//! With the `serde-support` feature the definitions deserialize from JSON.

use glam::{Mat4, Quat, Vec3};
use log::debug;
#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

use crate::animation::{AnimationClip, BoneChannels};
use crate::error::{AnimError, Result};
use crate::hierarchy::NodeHierarchy;
use crate::library::ClipLibrary;

/// Bind transform given either as a matrix or as separate factors
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-support", serde(untagged))]
pub enum TransformDef {
    /// Column-major 4x4 matrix
    Matrix(Mat4),
    /// Translation, rotation and scale composed as `T * R * S`
    Trs {
        #[cfg_attr(feature = "serde-support", serde(default))]
        translation: Vec3,
        #[cfg_attr(feature = "serde-support", serde(default))]
        rotation: Quat,
        #[cfg_attr(feature = "serde-support", serde(default = "unit_scale"))]
        scale: Vec3,
    },
}

#[cfg(feature = "serde-support")]
fn unit_scale() -> Vec3 {
    Vec3::ONE
}

impl TransformDef {
    pub fn to_matrix(&self) -> Mat4 {
        match *self {
            Self::Matrix(m) => m,
            Self::Trs {
                translation,
                rotation,
                scale,
            } => {
                Mat4::from_translation(translation)
                    * Mat4::from_quat(rotation)
                    * Mat4::from_scale(scale)
            }
        }
    }
}

impl Default for TransformDef {
    fn default() -> Self {
        Self::Matrix(Mat4::IDENTITY)
    }
}

/// A node of the imported hierarchy
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct NodeDef {
    pub name: String,
    /// Parent node name, `None` for the root
    #[cfg_attr(feature = "serde-support", serde(default))]
    pub parent: Option<String>,
    #[cfg_attr(feature = "serde-support", serde(default))]
    pub transform: TransformDef,
}

/// A bone reference discovered while importing skinned meshes
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct BoneDef {
    pub name: String,
    /// Inverse bind (offset) matrix
    #[cfg_attr(feature = "serde-support", serde(default))]
    pub offset: Mat4,
    /// Explicit skinning slot; the node id is used when absent
    #[cfg_attr(feature = "serde-support", serde(default))]
    pub slot: Option<usize>,
}

/// An imported animation
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct ClipDef {
    pub name: String,
    /// Length in ticks
    pub duration: f32,
    #[cfg_attr(feature = "serde-support", serde(default))]
    pub ticks_per_second: Option<f32>,
    #[cfg_attr(feature = "serde-support", serde(default))]
    pub channels: Vec<BoneChannels>,
}

/// Everything an importer hands over for one animated model
///
/// Nodes must be listed parents first; the first node is the root.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct RigDef {
    pub nodes: Vec<NodeDef>,
    #[cfg_attr(feature = "serde-support", serde(default))]
    pub bones: Vec<BoneDef>,
    #[cfg_attr(feature = "serde-support", serde(default))]
    pub clips: Vec<ClipDef>,
}

/// Validated, immutable hierarchy and clips of one model
#[derive(Debug, Clone, Default)]
pub struct RigAsset {
    pub hierarchy: NodeHierarchy,
    pub clips: ClipLibrary,
}

impl RigAsset {
    /// Build the hierarchy, bind bones and build every clip
    pub fn from_def(def: &RigDef) -> Result<Self> {
        let mut hierarchy = NodeHierarchy::new();

        for node in &def.nodes {
            let parent = match &node.parent {
                None => None,
                Some(parent) => Some(hierarchy.find(parent).ok_or_else(|| {
                    AnimError::UnknownParentName {
                        name: node.name.clone(),
                        parent: parent.clone(),
                    }
                })?),
            };
            hierarchy.create_node(node.name.clone(), parent, node.transform.to_matrix())?;
        }

        for bone in &def.bones {
            match bone.slot {
                Some(slot) => hierarchy.bind_bone_at_slot(&bone.name, slot, bone.offset)?,
                None => hierarchy.bind_bone(&bone.name, bone.offset)?,
            };
        }

        let mut clips = ClipLibrary::new();
        for clip in &def.clips {
            clips.insert(AnimationClip::new(
                clip.name.clone(),
                clip.duration,
                clip.ticks_per_second,
                clip.channels.iter().cloned(),
                &hierarchy,
            )?);
        }

        debug!(
            "Imported rig: {} nodes, {} bones, {} clips",
            hierarchy.len(),
            hierarchy.bone_count(),
            clips.len()
        );

        Ok(Self { hierarchy, clips })
    }
}
