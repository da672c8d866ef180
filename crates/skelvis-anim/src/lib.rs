//! Skeletal animation for imported 3D models
//!
//! Builds an immutable node hierarchy from importer data, validates keyframe
//! clips against it and evaluates one clip at a time into world transforms
//! and a fixed-size array of skinning matrices ready for GPU upload.
//!
//! See [`animation`] for a playback example.

pub mod animation;
pub mod error;
pub mod hierarchy;
pub mod import;
pub mod library;

// Re-export common types
pub use animation::{AnimationClip, AnimationPlayer, Animator, BoneChannels, Keyframe};
pub use error::{AnimError, Result};
pub use hierarchy::{MAX_BONES, Node, NodeHierarchy, NodeId};
pub use import::{BoneDef, ClipDef, NodeDef, RigAsset, RigDef, TransformDef};
pub use library::ClipLibrary;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
