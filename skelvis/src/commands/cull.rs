//! Frustum culling of scene objects

use anyhow::{Context, Result};
use console::Style;
use glam::Mat4;
use log::debug;

use skelvis_anim::{AnimError, Animator};
use skelvis_cull::Culler;

use crate::scene::SceneAsset;
use crate::utils::{add_table_row, create_table, format_ratio, format_vec3};

/// Visibility of every object, in scene order
pub fn visibility(scene: &SceneAsset, clip: Option<&str>, time: f32) -> Result<Vec<bool>> {
    let hierarchy = &scene.rig.hierarchy;
    let mut animator = Animator::with_bind_pose(hierarchy);

    if let Some(name) = clip {
        let clip = scene
            .rig
            .clips
            .get(name)
            .ok_or_else(|| AnimError::UnknownClip(name.to_string()))?;
        animator.play(clip);
        animator.update(time, hierarchy);
        debug!("Posed '{}' at tick {:.3}", name, animator.current_time());
    }

    let culler = Culler::from_camera(&scene.camera).context("Cannot build view frustum")?;
    let worlds: Vec<Mat4> = scene
        .objects
        .iter()
        .map(|o| o.world_transform(&animator))
        .collect();

    let result = culler.cull(scene.objects.iter().zip(&worlds).map(|(o, w)| (&o.bounds, w)));
    let mut visible = vec![false; scene.objects.len()];
    for index in result.visible {
        visible[index] = true;
    }
    Ok(visible)
}

pub fn execute(scene: &SceneAsset, clip: Option<&str>, time: f32) -> Result<()> {
    let visible = visibility(scene, clip, time)?;

    let mut table = create_table(&["Object", "Local center", "Visible"]);
    for (object, &is_visible) in scene.objects.iter().zip(&visible) {
        let status = if is_visible {
            Style::new().green().apply_to("yes")
        } else {
            Style::new().red().apply_to("no")
        };
        add_table_row(
            &mut table,
            vec![
                object.name.clone(),
                format_vec3(object.bounds.center()),
                status.to_string(),
            ],
        );
    }
    table.printstd();

    let count = visible.iter().filter(|v| **v).count();
    println!(
        "\nVisible: {}/{} ({})",
        count,
        visible.len(),
        format_ratio(count, visible.len())
    );
    Ok(())
}
