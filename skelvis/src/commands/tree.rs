//! Node hierarchy display

use anyhow::Result;

use crate::scene::SceneAsset;
use crate::utils::{TreeOptions, render_hierarchy};

pub fn execute(
    scene: &SceneAsset,
    max_depth: Option<usize>,
    detailed: bool,
    no_color: bool,
) -> Result<()> {
    let hierarchy = &scene.rig.hierarchy;
    let options = TreeOptions {
        max_depth,
        no_color,
        show_metadata: detailed,
    };

    print!("{}", render_hierarchy(hierarchy, &options));
    println!(
        "\n{} nodes, {} bones",
        hierarchy.len(),
        hierarchy.bone_count()
    );
    Ok(())
}
