//! Perspective camera producing the matrices culling needs

use glam::{Mat4, Vec3};
#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

use crate::error::{CullError, Result};

/// Free-look perspective camera with an OpenGL depth range
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-support", serde(default))]
pub struct Camera {
    pub position: Vec3,
    /// Viewing direction, need not be normalized
    pub front: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Width over height
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            fov: 55.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Camera {
    /// Camera at `position` looking at `target`
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            front: target - position,
            ..Self::default()
        }
    }

    pub fn with_aspect(mut self, aspect: f32) -> Self {
        self.aspect = aspect;
        self
    }

    /// Check the parameters describe a usable perspective projection
    pub fn validate(&self) -> Result<()> {
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(CullError::InvalidCamera(format!(
                "field of view {} outside (0, 180) degrees",
                self.fov
            )));
        }
        if !(self.aspect.is_finite() && self.aspect > 0.0) {
            return Err(CullError::InvalidCamera(format!(
                "aspect ratio {} must be positive",
                self.aspect
            )));
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(CullError::InvalidCamera(format!(
                "clip range {}..{} must satisfy 0 < near < far",
                self.near, self.far
            )));
        }
        if self.front.length_squared() == 0.0 || self.front.cross(self.up).length_squared() == 0.0
        {
            return Err(CullError::InvalidCamera(
                "front must be non-zero and not parallel to up".to_string(),
            ));
        }
        Ok(())
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.front.normalize(), self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov.to_radians(), self.aspect, self.near, self.far)
    }

    /// `projection * view`, the matrix frustum planes are extracted from
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
