//! Skeletal animation playback
//!
//! This module provides single-clip playback over a [`NodeHierarchy`]:
//! - Keyframe channels with linear (position, scale) and spherical
//!   (rotation) interpolation
//! - Clips binding per-bone tracks to hierarchy nodes by name
//! - A looping animator producing world transforms and skinning matrices
//! - A player exposing clips of a [`ClipLibrary`] by name
//!
//! # Example
//!
//! ```rust
//! use glam::{Mat4, Quat, Vec3};
//! use skelvis_anim::animation::{AnimationClip, Animator, BoneChannels};
//! use skelvis_anim::NodeHierarchy;
//!
//! let mut hierarchy = NodeHierarchy::new();
//! let root = hierarchy.create_node("root", None, Mat4::IDENTITY)?;
//! hierarchy.create_node("hip", Some(root), Mat4::IDENTITY)?;
//! hierarchy.bind_bone("hip", Mat4::IDENTITY)?;
//!
//! let walk = BoneChannels::new("hip")
//!     .with_position(0.0, Vec3::ZERO)
//!     .with_position(10.0, Vec3::new(10.0, 0.0, 0.0))
//!     .with_rotation(0.0, Quat::IDENTITY)
//!     .with_scale(0.0, Vec3::ONE);
//! let clip = AnimationClip::new("walk", 10.0, Some(10.0), [walk], &hierarchy)?;
//!
//! let mut animator = Animator::new();
//! animator.play(&clip);
//! animator.update(0.5, &hierarchy);
//!
//! let hip = hierarchy.find("hip").unwrap();
//! assert!((animator.world_position(hip).unwrap().x - 5.0).abs() < 1e-4);
//! # Ok::<(), skelvis_anim::AnimError>(())
//! ```
//!
//! [`NodeHierarchy`]: crate::hierarchy::NodeHierarchy
//! [`ClipLibrary`]: crate::library::ClipLibrary

mod clip;
mod evaluator;
mod interpolation;
mod player;
mod state;
mod track;
mod types;

pub use clip::{AnimationClip, DEFAULT_TICKS_PER_SECOND};
pub use evaluator::Animator;
pub use interpolation::{find_segment_index, sample_keys, segment_alpha};
pub use player::AnimationPlayer;
pub use state::AnimationState;
pub use track::{BoneChannels, Channel, KeyframeTrack};
pub use types::{Keyframe, Lerp, LocalPose};
