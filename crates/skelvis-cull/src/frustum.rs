//! View frustum extraction and box visibility
//!
//! Planes are pulled straight out of a combined view-projection matrix
//! (Gribb-Hartmann) for the OpenGL clip range, where a point is inside when
//! `-w <= x, y, z <= w`. Every plane is normalized so signed distances are
//! comparable across planes.

use std::fmt;

use glam::{Mat4, Vec3, Vec4};
use log::trace;

use crate::aabb::Aabb;
use crate::error::{CullError, Result};

/// Below this normal length a plane is treated as degenerate
const MIN_NORMAL_LENGTH: f32 = 1e-6;

/// Plane as `normal . point + distance = 0`, normal pointing inside
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub distance: f32,
}

impl Plane {
    pub const fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Plane through `point` facing along `normal`
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        Self {
            normal,
            distance: -normal.dot(point),
        }
    }

    /// Signed distance from a point, negative on the outside
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    /// Scale to a unit normal, `None` when the normal has no length
    fn normalized(coefficients: Vec4) -> Option<Self> {
        let normal = coefficients.truncate();
        let length = normal.length();
        (length > MIN_NORMAL_LENGTH).then(|| Self {
            normal: normal / length,
            distance: coefficients.w / length,
        })
    }
}

/// Which side of the frustum a plane bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrustumSide {
    Left,
    Right,
    Bottom,
    Top,
    Near,
    Far,
}

impl FrustumSide {
    /// All sides in plane storage order
    pub const ALL: [Self; 6] = [
        Self::Left,
        Self::Right,
        Self::Bottom,
        Self::Top,
        Self::Near,
        Self::Far,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Top => "top",
            Self::Near => "near",
            Self::Far => "far",
        }
    }
}

impl fmt::Display for FrustumSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Six inward-facing planes of a view volume
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    planes: [Plane; 6],
}

impl Frustum {
    /// Extract and normalize the planes of `view_projection`
    ///
    /// Fails when a plane has a zero normal, which only happens for a
    /// singular matrix.
    pub fn from_view_projection(view_projection: &Mat4) -> Result<Self> {
        let m = view_projection;
        let (r0, r1, r2, r3) = (m.row(0), m.row(1), m.row(2), m.row(3));

        // Same order as FrustumSide::ALL
        let raw = [r3 + r0, r3 - r0, r3 + r1, r3 - r1, r3 + r2, r3 - r2];

        let mut planes = [Plane::new(Vec3::ZERO, 0.0); 6];
        for ((plane, coefficients), side) in planes.iter_mut().zip(raw).zip(FrustumSide::ALL) {
            *plane = Plane::normalized(coefficients)
                .ok_or(CullError::DegenerateFrustum(side.name()))?;
        }

        trace!("Extracted frustum planes: {:?}", planes);
        Ok(Self { planes })
    }

    /// Build from already normalized, inward-facing planes
    pub const fn from_planes(planes: [Plane; 6]) -> Self {
        Self { planes }
    }

    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    pub fn plane(&self, side: FrustumSide) -> &Plane {
        &self.planes[side as usize]
    }

    /// Check if a world-space point is inside every plane
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(point) >= 0.0)
    }

    /// First plane with every corner strictly outside, if any
    pub fn rejecting_side(&self, corners: &[Vec3; 8]) -> Option<FrustumSide> {
        self.planes
            .iter()
            .zip(FrustumSide::ALL)
            .find(|(plane, _)| corners.iter().all(|c| plane.distance_to_point(*c) < 0.0))
            .map(|(_, side)| side)
    }

    /// Conservative visibility of a model-space box placed by `world`
    ///
    /// Rejects only when a single plane has all 8 world-space corners on its
    /// outside. A box outside the volume near an edge or corner, with no
    /// single separating plane, is reported visible.
    pub fn is_box_visible(&self, bounds: &Aabb, world: &Mat4) -> bool {
        self.rejecting_side(&bounds.transformed(world)).is_none()
    }
}

/// Derive the frustum of a combined view-projection matrix
pub fn extract_frustum(view_projection: &Mat4) -> Result<Frustum> {
    Frustum::from_view_projection(view_projection)
}

/// Check a local box given by its extremes against `frustum`
pub fn is_visible(frustum: &Frustum, aabb_min: Vec3, aabb_max: Vec3, world: &Mat4) -> bool {
    frustum.is_box_visible(&Aabb::new(aabb_min, aabb_max), world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn camera_frustum() -> Frustum {
        // Camera at the origin looking down -Z with a 90 degree field of view
        let projection = Mat4::perspective_rh_gl(FRAC_PI_2, 1.0, 0.1, 100.0);
        Frustum::from_view_projection(&projection).unwrap()
    }

    #[test]
    fn test_planes_are_normalized() {
        for plane in camera_frustum().planes() {
            assert!((plane.normal.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_near_and_far_planes() {
        let frustum = camera_frustum();
        let near = frustum.plane(FrustumSide::Near);
        assert!((near.distance_to_point(Vec3::new(0.0, 0.0, -0.1))).abs() < 1e-4);
        assert!(near.normal.z < 0.0);

        let far = frustum.plane(FrustumSide::Far);
        assert!((far.distance_to_point(Vec3::new(0.0, 0.0, -100.0))).abs() < 0.1);
        assert!(far.normal.z > 0.0);
    }

    #[test]
    fn test_contains_point() {
        let frustum = camera_frustum();
        assert!(frustum.contains_point(Vec3::new(0.0, 0.0, -10.0)));
        assert!(frustum.contains_point(Vec3::new(9.0, -9.0, -10.0)));
        assert!(!frustum.contains_point(Vec3::new(11.0, 0.0, -10.0)));
        assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, 10.0)));
        assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, -200.0)));
    }

    #[test]
    fn test_box_inside_is_visible() {
        let frustum = camera_frustum();
        assert!(is_visible(
            &frustum,
            -Vec3::ONE,
            Vec3::ONE,
            &Mat4::from_translation(Vec3::new(0.0, 0.0, -10.0))
        ));
    }

    #[test]
    fn test_box_behind_camera_is_rejected() {
        let frustum = camera_frustum();
        let bounds = Aabb::new(-Vec3::ONE, Vec3::ONE);
        let world = Mat4::from_translation(Vec3::new(0.0, 0.0, 10.0));
        assert!(!frustum.is_box_visible(&bounds, &world));
    }

    #[test]
    fn test_box_before_near_plane_is_rejected_by_near() {
        let frustum = camera_frustum();
        let corners = Aabb::new(Vec3::splat(-0.01), Vec3::splat(0.01))
            .transformed(&Mat4::from_translation(Vec3::new(0.0, 0.0, -0.05)));
        assert_eq!(frustum.rejecting_side(&corners), Some(FrustumSide::Near));
    }

    #[test]
    fn test_box_right_of_view_is_rejected() {
        let frustum = camera_frustum();
        let corners = Aabb::new(-Vec3::ONE, Vec3::ONE)
            .transformed(&Mat4::from_translation(Vec3::new(50.0, 0.0, -10.0)));
        assert_eq!(frustum.rejecting_side(&corners), Some(FrustumSide::Right));
    }

    #[test]
    fn test_degenerate_box_uses_point_test() {
        let frustum = camera_frustum();
        let inside = Vec3::new(1.0, 1.0, -5.0);
        let outside = Vec3::new(0.0, 50.0, -5.0);
        assert!(is_visible(&frustum, inside, inside, &Mat4::IDENTITY));
        assert!(!is_visible(&frustum, outside, outside, &Mat4::IDENTITY));
    }

    #[test]
    fn test_singular_matrix_is_rejected() {
        let err = Frustum::from_view_projection(&Mat4::ZERO).unwrap_err();
        assert_eq!(err, CullError::DegenerateFrustum("left"));
    }

    #[test]
    fn test_plane_from_normal_and_point() {
        let plane = Plane::from_normal_and_point(Vec3::Y, Vec3::new(3.0, 2.0, 1.0));
        assert_eq!(plane.distance_to_point(Vec3::new(0.0, 5.0, 0.0)), 3.0);
        assert_eq!(plane.distance_to_point(Vec3::new(7.0, 2.0, 7.0)), 0.0);
    }
}
