use thiserror::Error;

use crate::hierarchy::NodeId;

/// Error types for building node hierarchies and animation clips
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimError {
    /// A node was created with a parent before the root existed
    #[error("Hierarchy has no root: node '{0}' must be created as the root")]
    MissingRoot(String),

    /// A second parentless node was created
    #[error("Hierarchy already has a root: node '{0}' needs a parent")]
    RootAlreadyExists(String),

    /// Parent id does not belong to this hierarchy
    #[error("Unknown parent node {parent} for node '{name}'")]
    UnknownParent { name: String, parent: NodeId },

    /// Parent referenced by name during import does not exist
    #[error("Unknown parent node '{parent}' for node '{name}'")]
    UnknownParentName { name: String, parent: String },

    /// Node names must be unique, tracks bind to them by name
    #[error("Duplicate node name: {0}")]
    DuplicateNode(String),

    /// A keyframe channel was built without samples
    #[error("Empty {channel} channel for bone '{bone}'")]
    EmptyChannel { bone: String, channel: &'static str },

    /// Keyframe timestamps went backwards
    #[error("Non-monotonic {channel} timestamps for bone '{bone}' at key {index}")]
    NonMonotonicKeys {
        bone: String,
        channel: &'static str,
        index: usize,
    },

    /// Rotation key cannot be normalized to a unit quaternion
    #[error("Degenerate rotation for bone '{bone}' at key {index}")]
    DegenerateRotation { bone: String, index: usize },

    /// Clip duration must be positive for time wrapping
    #[error("Invalid duration {duration} for clip '{clip}'")]
    InvalidDuration { clip: String, duration: f32 },

    /// Clip requested by name is not in the library
    #[error("Unknown animation clip: {0}")]
    UnknownClip(String),
}

/// Result type using AnimError
pub type Result<T> = std::result::Result<T, AnimError>;
