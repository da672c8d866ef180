//! Frustum culling for skeletal scenes
//!
//! Extracts the six planes of a view volume from a view-projection matrix and
//! tests model-space bounding boxes, placed by a world transform, against
//! them. The box test is conservative: it never culls a visible box, but can
//! keep a box that lies just outside an edge or corner of the volume.
//!
//! # Example
//!
//! ```rust
//! use glam::{Mat4, Vec3};
//! use skelvis_cull::{Aabb, Camera, Culler};
//!
//! let culler = Culler::from_camera(&Camera::default())?;
//! let bounds = Aabb::from_points([Vec3::new(-1.0, 0.0, -1.0), Vec3::new(1.0, 2.0, 1.0)])
//!     .expect("non-empty point set");
//!
//! assert!(culler.is_visible(&bounds, &Mat4::IDENTITY));
//! assert!(!culler.is_visible(&bounds, &Mat4::from_translation(Vec3::new(0.0, 0.0, 50.0))));
//! # Ok::<(), skelvis_cull::CullError>(())
//! ```

pub mod aabb;
pub mod camera;
pub mod culler;
pub mod error;
pub mod frustum;

// Re-export common types
pub use aabb::Aabb;
pub use camera::Camera;
pub use culler::{CullResult, CullStats, Culler};
pub use error::{CullError, Result};
pub use frustum::{Frustum, FrustumSide, Plane, extract_frustum, is_visible};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
