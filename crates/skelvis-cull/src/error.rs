//! Error types for frustum and camera construction

use thiserror::Error;

/// Errors raised while building culling inputs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CullError {
    /// A plane extracted from the view-projection matrix has no direction
    #[error("Degenerate {0} frustum plane, view-projection matrix is singular")]
    DegenerateFrustum(&'static str),

    /// Camera parameters cannot produce a perspective projection
    #[error("Invalid camera: {0}")]
    InvalidCamera(String),
}

/// Result type for culling operations
pub type Result<T> = std::result::Result<T, CullError>;
