//! Main entry point for the skelvis CLI

use anyhow::Result;
use clap::CommandFactory;
use clap::Parser;
use clap_complete::{Generator, generate};
use std::io;

use skelvis::cli::{Cli, Commands};
use skelvis::commands;
use skelvis::scene::load_scene_async;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logger, RUST_LOG still overrides the flags
    let level = match (cli.verbose, cli.quiet) {
        (0, true) => log::LevelFilter::Error,
        (0, false) => log::LevelFilter::Warn,
        (1, _) => log::LevelFilter::Info,
        (2, _) => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    // Execute command
    match cli.command {
        Commands::Tree {
            scene,
            depth,
            detailed,
            no_color,
        } => {
            let asset = load_scene_async(scene.scene).await?;
            commands::tree::execute(&asset, depth, detailed, no_color)
        }

        Commands::Clips { scene } => {
            let asset = load_scene_async(scene.scene).await?;
            commands::clips::execute(&asset)
        }

        Commands::Play {
            scene,
            clip,
            fps,
            frames,
            format,
        } => {
            let asset = load_scene_async(scene.scene).await?;
            commands::play::execute(&asset, clip.as_deref(), fps, frames, format)
        }

        Commands::Cull { scene, clip, time } => {
            let asset = load_scene_async(scene.scene).await?;
            commands::cull::execute(&asset, clip.as_deref(), time.unwrap_or(0.0))
        }

        Commands::Completions { shell } => {
            print_completions(shell, &mut Cli::command());
            Ok(())
        }
    }
}

fn print_completions<G: Generator>(generator: G, cmd: &mut clap::Command) {
    generate(
        generator,
        cmd,
        cmd.get_name().to_string(),
        &mut io::stdout(),
    );
}
