//! Visibility of placed boxes through the public API

use glam::{Mat4, Quat, Vec3};
use pretty_assertions::assert_eq;
use skelvis_cull::{Aabb, Camera, Culler, Frustum, extract_frustum, is_visible};
use std::f32::consts::FRAC_PI_4;
use test_case::test_case;

fn unit_box() -> Aabb {
    Aabb::new(-Vec3::ONE, Vec3::ONE)
}

/// Orthographic view of the unit square in x and y, looking down -Z
fn box_frustum() -> Frustum {
    let projection = Mat4::orthographic_rh_gl(-1.0, 1.0, -1.0, 1.0, 0.1, 100.0);
    extract_frustum(&projection).unwrap()
}

#[test_case(Vec3::new(0.0, 0.0, -10.0), true ; "straight ahead")]
#[test_case(Vec3::new(0.0, 0.0, 10.0), false ; "behind")]
#[test_case(Vec3::new(-100.0, 0.0, -10.0), false ; "far left")]
#[test_case(Vec3::new(0.0, 0.0, -500.0), false ; "beyond far plane")]
#[test_case(Vec3::new(4.0, 0.0, -10.0), true ; "partially inside right edge")]
fn test_default_camera_visibility(offset: Vec3, expected: bool) {
    let camera = Camera {
        position: Vec3::ZERO,
        aspect: 1.0,
        ..Camera::default()
    };
    let culler = Culler::from_camera(&camera).unwrap();
    let world = Mat4::from_translation(offset);
    assert_eq!(culler.is_visible(&unit_box(), &world), expected);
}

#[test]
fn test_enclosed_box_is_visible() {
    let frustum = box_frustum();
    let world = Mat4::from_translation(Vec3::new(0.0, 0.0, -50.0));
    assert!(is_visible(&frustum, Vec3::splat(-0.5), Vec3::splat(0.5), &world));
}

#[test]
fn test_box_outside_single_plane_is_culled() {
    let frustum = box_frustum();
    let world = Mat4::from_translation(Vec3::new(3.0, 0.0, -50.0));
    assert!(!is_visible(&frustum, Vec3::splat(-0.5), Vec3::splat(0.5), &world));
}

#[test]
fn test_corner_straddling_box_is_conservatively_visible() {
    // A thin slab rotated across the top-right corner: every plane has a
    // corner inside, yet x + y > 2 everywhere on the slab
    let frustum = box_frustum();
    let slab = Aabb::new(Vec3::new(-2.0, -0.1, -1.0), Vec3::new(2.0, 0.1, 1.0));
    let world = Mat4::from_rotation_translation(
        Quat::from_rotation_z(-FRAC_PI_4),
        Vec3::new(1.6, 1.6, -5.0),
    );

    let corners = slab.transformed(&world);
    assert!(corners.iter().all(|c| c.x + c.y > 2.0));
    assert!(corners.iter().all(|c| !frustum.contains_point(*c)));

    assert!(frustum.is_box_visible(&slab, &world));
}

#[test]
fn test_rotation_changes_world_bounds() {
    let frustum = box_frustum();
    // Long along x: fully right of the view unless rotated to point along z
    let rod = Aabb::new(Vec3::new(2.0, -0.1, -0.1), Vec3::new(6.0, 0.1, 0.1));
    let place = Vec3::new(0.0, 0.0, -10.0);

    assert!(!frustum.is_box_visible(&rod, &Mat4::from_translation(place)));

    let turned = Mat4::from_rotation_translation(Quat::from_rotation_y(FRAC_PI_4 * 2.0), place);
    assert!(frustum.is_box_visible(&rod, &turned));
}

#[test]
fn test_bounds_from_mesh_points() {
    let points = (0..20).map(|i| {
        let t = i as f32;
        Vec3::new(t.sin(), t * 0.1, t.cos())
    });
    let bounds = Aabb::from_points(points).unwrap();
    assert!(bounds.min.y == 0.0 && (bounds.max.y - 1.9).abs() < 1e-5);

    let culler = Culler::from_camera(&Camera::default()).unwrap();
    assert!(culler.is_visible(&bounds, &Mat4::IDENTITY));
}
