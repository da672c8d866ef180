//! Root CLI structure for skelvis

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "skelvis")]
#[command(about = "Inspect, play and cull skeletal animation scenes", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Scene file shared by every scene command
#[derive(Args, Debug, Clone)]
pub struct SceneArgs {
    /// Path to the JSON scene description
    #[arg(env = "SKELVIS_SCENE")]
    pub scene: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Display the node hierarchy as a tree
    Tree {
        #[command(flatten)]
        scene: SceneArgs,

        /// Maximum depth to display
        #[arg(long)]
        depth: Option<usize>,

        /// Show bind positions and bone slots
        #[arg(short, long)]
        detailed: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// List the animation clips of a scene
    Clips {
        #[command(flatten)]
        scene: SceneArgs,
    },

    /// Play a clip and report bone positions per frame
    Play {
        #[command(flatten)]
        scene: SceneArgs,

        /// Clip to play, defaults to the first clip
        #[arg(short, long)]
        clip: Option<String>,

        /// Frames per second of the simulated update loop
        #[arg(long, default_value = "30")]
        fps: f32,

        /// Number of frames to simulate
        #[arg(short = 'n', long, default_value = "10")]
        frames: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Test every scene object against the camera frustum
    Cull {
        #[command(flatten)]
        scene: SceneArgs,

        /// Pose attached objects with this clip
        #[arg(short, long)]
        clip: Option<String>,

        /// Playback time in seconds for the clip pose
        #[arg(short, long, requires = "clip")]
        time: Option<f32>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
