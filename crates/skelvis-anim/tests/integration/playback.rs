//! Clip playback over time

use glam::{Mat4, Quat, Vec3};
use pretty_assertions::assert_eq;
use skelvis_anim::animation::{Animator, sample_keys};
use skelvis_anim::{AnimationClip, AnimationPlayer, BoneChannels, ClipLibrary, Keyframe, NodeId};
use test_case::test_case;

use super::common::{arm, assert_vec3_near, slide, slide_clip};

#[test]
fn test_midpoint_position_after_half_second() {
    let h = arm();
    let clip = slide_clip(&h);
    let mut animator = Animator::with_bind_pose(&h);
    animator.play(&clip);

    animator.update(0.5, &h);

    let upper = h.find("UpperArm").unwrap();
    assert_vec3_near(animator.world_position(upper).unwrap(), Vec3::new(5.0, 0.0, 0.0));
}

#[test]
fn test_time_wraps_after_twelve_ticks() {
    let h = arm();
    let clip = slide_clip(&h);
    let mut animator = Animator::new();
    animator.play(&clip);

    for _ in 0..4 {
        animator.update(0.3, &h);
    }

    assert!((animator.current_time() - 2.0).abs() < 1e-4);
}

#[test_case(0.05 ; "small steps")]
#[test_case(0.37 ; "uneven steps")]
#[test_case(2.5 ; "steps longer than the clip")]
fn test_time_stays_inside_clip(step: f32) {
    let h = arm();
    let clip = slide_clip(&h);
    let mut animator = Animator::new();
    animator.play(&clip);

    for _ in 0..100 {
        animator.update(step, &h);
        let t = animator.current_time();
        assert!((0.0..clip.duration()).contains(&t), "time {t} escaped the clip");
    }
}

#[test]
fn test_missing_bone_track_is_dropped() {
    let h = arm();
    let clip = AnimationClip::new(
        "broken",
        10.0,
        None,
        [
            slide("Missing", Vec3::X, 10.0),
            slide("Hand", Vec3::X, 10.0),
        ],
        &h,
    )
    .unwrap();

    assert_eq!(clip.track_count(), 1);
    assert!(clip.find_track(h.find("Hand").unwrap()).is_some());
    assert!(clip.find_track(NodeId::new(h.len())).is_none());

    let mut animator = Animator::new();
    animator.play(&clip);
    animator.update(0.1, &h);
}

#[test]
fn test_untracked_nodes_keep_bind_pose() {
    let h = arm();
    let clip = slide_clip(&h);
    let mut animator = Animator::new();
    animator.play(&clip);
    animator.update(0.5, &h);

    // LowerArm follows UpperArm but keeps its own one-unit offset
    let lower = h.find("LowerArm").unwrap();
    assert_vec3_near(animator.world_position(lower).unwrap(), Vec3::new(5.0, 1.0, 0.0));
    let hand = h.find("Hand").unwrap();
    assert_vec3_near(animator.world_position(hand).unwrap(), Vec3::new(5.0, 2.0, 0.0));
}

#[test]
fn test_single_key_is_constant() {
    let keys = [Keyframe::new(3.0, Vec3::new(1.0, 2.0, 3.0))];
    for t in [-5.0, 0.0, 3.0, 7.5, 1000.0] {
        assert_eq!(sample_keys(&keys, t), Some(Vec3::new(1.0, 2.0, 3.0)));
    }
}

#[test]
fn test_rotation_track_stays_normalized() {
    let h = arm();
    let twist = BoneChannels::new("LowerArm")
        .with_position(0.0, Vec3::Y)
        .with_rotation(0.0, Quat::IDENTITY)
        .with_rotation(5.0, Quat::from_rotation_y(2.0))
        .with_rotation(10.0, Quat::from_rotation_x(-1.0))
        .with_scale(0.0, Vec3::ONE);
    let clip = AnimationClip::new("twist", 10.0, None, [twist], &h).unwrap();
    let track = clip.find_track(h.find("LowerArm").unwrap()).unwrap();

    for step in 0..=40 {
        let pose = track.sample(step as f32 * 0.25);
        assert!((pose.rotation.length() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn test_player_switches_clips_by_name() {
    let h = arm();
    let wave = AnimationClip::new(
        "wave",
        20.0,
        Some(20.0),
        [slide("Hand", Vec3::Z, 20.0)],
        &h,
    )
    .unwrap();
    let library: ClipLibrary = [slide_clip(&h), wave].into_iter().collect();

    let mut player = AnimationPlayer::new(&library, &h);
    assert_eq!(player.list_clip_names(), vec!["slide", "wave"]);

    player.play("slide").unwrap();
    player.tick(0.4, &h);
    player.play("wave").unwrap();
    assert_eq!(player.current_clip_name(), Some("wave"));
    assert_eq!(player.animator().current_time(), 0.0);

    player.tick(0.5, &h);
    assert!((player.animator().current_time() - 10.0).abs() < 1e-4);
}

#[test]
fn test_idle_animator_shows_bind_pose() {
    let h = arm();
    let mut animator = Animator::with_bind_pose(&h);
    animator.update(1.0, &h);

    assert!(!animator.is_playing());
    let hand = h.find("Hand").unwrap();
    assert_vec3_near(animator.world_position(hand).unwrap(), Vec3::new(0.0, 2.0, 0.0));
    assert!(animator.skinning_matrices().iter().all(|m| *m == Mat4::IDENTITY));
}
