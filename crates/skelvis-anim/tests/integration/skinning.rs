//! Skinning matrix output

use glam::{Mat4, Vec3};
use pretty_assertions::assert_eq;
use skelvis_anim::animation::Animator;
use skelvis_anim::{AnimationClip, MAX_BONES, NodeHierarchy};

use super::common::{arm, assert_vec3_near, slide, slide_clip};

#[test]
fn test_skinning_moves_bind_vertices_with_bones() {
    let h = arm();
    let clip = slide_clip(&h);
    let mut animator = Animator::new();
    animator.play(&clip);
    animator.update(0.5, &h);

    // A vertex at the hand's bind position follows the whole arm
    let hand = h.find("Hand").unwrap();
    let slot = h.node(hand).bone_slot().unwrap();
    let skinned = animator.skinning_matrices()[slot].transform_point3(Vec3::new(0.0, 2.0, 0.0));
    assert_vec3_near(skinned, Vec3::new(5.0, 2.0, 0.0));
}

#[test]
fn test_skinning_is_identity_at_bind_pose() {
    let h = arm();
    let still = AnimationClip::new(
        "still",
        10.0,
        None,
        [slide("UpperArm", Vec3::ZERO, 10.0)],
        &h,
    )
    .unwrap();
    let mut animator = Animator::new();
    animator.play(&still);
    animator.update(0.2, &h);

    for node in h.nodes().iter().filter(|n| n.is_bone()) {
        let m = animator.skinning_matrices()[node.bone_slot().unwrap()];
        assert!(m.abs_diff_eq(Mat4::IDENTITY, 1e-5), "{} not at rest", node.name());
    }
}

#[test]
fn test_skinning_data_layout() {
    let h = arm();
    let animator = Animator::with_bind_pose(&h);
    let data = animator.skinning_data();
    assert_eq!(data.len(), MAX_BONES * 16);
    assert_eq!(&data[..16], &Mat4::IDENTITY.to_cols_array()[..]);
}

#[test]
fn test_out_of_range_slot_is_skipped() {
    let mut h = NodeHierarchy::new();
    let root = h.create_node("root", None, Mat4::IDENTITY).unwrap();
    h.create_node("tail", Some(root), Mat4::from_translation(Vec3::X))
        .unwrap();
    h.bind_bone_at_slot("tail", MAX_BONES + 5, Mat4::IDENTITY)
        .unwrap();

    let clip = AnimationClip::new("wag", 10.0, None, [slide("tail", Vec3::Y, 10.0)], &h).unwrap();
    let mut animator = Animator::new();
    animator.play(&clip);
    for _ in 0..10 {
        animator.update(0.1, &h);
    }

    assert_eq!(animator.skinning_matrices().len(), MAX_BONES);
    assert!(animator.skinning_matrices().iter().all(|m| *m == Mat4::IDENTITY));
    let tail = h.find("tail").unwrap();
    assert!(animator.world_position(tail).is_some());
}
