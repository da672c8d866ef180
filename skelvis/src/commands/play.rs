//! Simulated playback of one clip

use anyhow::{Context, Result, bail};
use glam::Vec3;
use serde::Serialize;

use skelvis_anim::{AnimationPlayer, NodeHierarchy};

use crate::cli::OutputFormat;
use crate::scene::SceneAsset;
use crate::utils::format_vec3;

#[derive(Debug, Serialize)]
pub struct BoneSample {
    pub name: String,
    pub position: Vec3,
}

#[derive(Debug, Serialize)]
pub struct FrameSample {
    pub frame: usize,
    /// Clip time in ticks after the update
    pub time: f32,
    pub bones: Vec<BoneSample>,
}

#[derive(Debug, Serialize)]
pub struct PlaybackReport {
    pub clip: String,
    pub fps: f32,
    pub frames: Vec<FrameSample>,
}

/// Run `frames` fixed updates of `1 / fps` seconds and record bone positions
pub fn simulate(
    scene: &SceneAsset,
    clip: Option<&str>,
    fps: f32,
    frames: usize,
) -> Result<PlaybackReport> {
    if !(fps.is_finite() && fps > 0.0) {
        bail!("Frame rate must be positive, got {fps}");
    }

    let hierarchy = &scene.rig.hierarchy;
    let library = &scene.rig.clips;
    let name = match clip {
        Some(name) => name,
        None => library
            .first()
            .map(|c| c.name())
            .context("Scene has no animation clips")?,
    };

    let mut player = AnimationPlayer::new(library, hierarchy);
    player.play(name)?;

    let delta = 1.0 / fps;
    let mut samples = Vec::with_capacity(frames);
    for frame in 1..=frames {
        player.tick(delta, hierarchy);
        samples.push(FrameSample {
            frame,
            time: player.animator().current_time(),
            bones: bone_samples(&player, hierarchy),
        });
    }

    Ok(PlaybackReport {
        clip: name.to_string(),
        fps,
        frames: samples,
    })
}

fn bone_samples(player: &AnimationPlayer<'_>, hierarchy: &NodeHierarchy) -> Vec<BoneSample> {
    hierarchy
        .nodes()
        .iter()
        .filter(|n| n.is_bone())
        .filter_map(|n| {
            Some(BoneSample {
                name: n.name().to_string(),
                position: player.animator().world_position(n.id())?,
            })
        })
        .collect()
}

pub fn execute(
    scene: &SceneAsset,
    clip: Option<&str>,
    fps: f32,
    frames: usize,
    format: OutputFormat,
) -> Result<()> {
    let report = simulate(scene, clip, fps, frames)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!("Clip '{}' at {} fps", report.clip, report.fps);
            for frame in &report.frames {
                println!("\nFrame {} (tick {:.3})", frame.frame, frame.time);
                for bone in &frame.bones {
                    println!("  {:<20} {}", bone.name, format_vec3(bone.position));
                }
            }
        }
    }
    Ok(())
}
