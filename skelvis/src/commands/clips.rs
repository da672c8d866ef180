//! Clip listing

use anyhow::Result;

use crate::scene::SceneAsset;
use crate::utils::{add_table_row, create_table};

pub fn execute(scene: &SceneAsset) -> Result<()> {
    let clips = &scene.rig.clips;
    if clips.is_empty() {
        println!("No animation clips");
        return Ok(());
    }

    let mut table = create_table(&["Name", "Ticks", "Ticks/s", "Seconds", "Tracks"]);
    for clip in clips.iter() {
        add_table_row(
            &mut table,
            vec![
                clip.name().to_string(),
                format!("{:.2}", clip.duration()),
                format!("{:.2}", clip.ticks_per_second()),
                format!("{:.3}", clip.duration_seconds()),
                clip.track_count().to_string(),
            ],
        );
    }
    table.printstd();

    println!("\n{} clips", clips.len());
    Ok(())
}
