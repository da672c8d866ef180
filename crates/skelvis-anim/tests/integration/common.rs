use glam::{Mat4, Quat, Vec3};
use skelvis_anim::{AnimationClip, BoneChannels, NodeHierarchy};

/// Route `log` output through the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Root with a three-bone arm, each segment one unit along +Y
pub fn arm() -> NodeHierarchy {
    init_logging();
    let mut h = NodeHierarchy::new();
    let root = h.create_node("Armature", None, Mat4::IDENTITY).unwrap();
    let upper = h
        .create_node("UpperArm", Some(root), Mat4::IDENTITY)
        .unwrap();
    let lower = h
        .create_node("LowerArm", Some(upper), Mat4::from_translation(Vec3::Y))
        .unwrap();
    h.create_node("Hand", Some(lower), Mat4::from_translation(Vec3::Y))
        .unwrap();

    h.bind_bone("UpperArm", Mat4::IDENTITY).unwrap();
    h.bind_bone("LowerArm", Mat4::from_translation(-Vec3::Y))
        .unwrap();
    h.bind_bone("Hand", Mat4::from_translation(-2.0 * Vec3::Y))
        .unwrap();
    h
}

/// Translation-only channels sliding `bone` from the origin to `end`
pub fn slide(bone: &str, end: Vec3, duration: f32) -> BoneChannels {
    BoneChannels::new(bone)
        .with_position(0.0, Vec3::ZERO)
        .with_position(duration, end)
        .with_rotation(0.0, Quat::IDENTITY)
        .with_scale(0.0, Vec3::ONE)
}

/// Ten-tick clip at ten ticks per second moving UpperArm to (10, 0, 0)
pub fn slide_clip(h: &NodeHierarchy) -> AnimationClip {
    AnimationClip::new(
        "slide",
        10.0,
        Some(10.0),
        [slide("UpperArm", Vec3::new(10.0, 0.0, 0.0), 10.0)],
        h,
    )
    .unwrap()
}

pub fn assert_vec3_near(actual: Vec3, expected: Vec3) {
    assert!(
        (actual - expected).length() < 1e-4,
        "expected {expected:?}, got {actual:?}"
    );
}
