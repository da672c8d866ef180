//! Common types for the animation system

use glam::{Mat4, Quat, Vec3};
#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

/// Trait for values that can be blended between two keyframes
pub trait Lerp: Copy {
    /// Interpolate from `self` towards `other` by `t` in `[0, 1]`
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Vec3 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Vec3::lerp(*self, *other, t)
    }
}

impl Lerp for Quat {
    /// Spherical interpolation, renormalized against drift
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self.slerp(*other, t).normalize()
    }
}

/// A single timestamped sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct Keyframe<T> {
    /// Time in clip ticks
    pub time: f32,
    pub value: T,
}

impl<T> Keyframe<T> {
    pub const fn new(time: f32, value: T) -> Self {
        Self { time, value }
    }
}

/// Local transform split into translation, rotation and scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalPose {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl LocalPose {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Compose as `translation * rotation * scale`
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translation)
            * Mat4::from_quat(self.rotation)
            * Mat4::from_scale(self.scale)
    }
}

impl Default for LocalPose {
    fn default() -> Self {
        Self::IDENTITY
    }
}
