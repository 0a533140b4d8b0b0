//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use storygrid::SceneId;

/// StoryGrid - six-frame storyboard scripting and grid generation
#[derive(Parser, Debug)]
#[command(name = "storygrid")]
#[command(about = "Six-frame storyboard scripting and grid generation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to bundled, home and ./storygrid.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a script file into its six scenes
    Parse {
        /// Script file
        file: PathBuf,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Write a new six-frame script for a product
    Script {
        /// Product name
        #[arg(long)]
        keyword: String,

        /// Selling points or product description
        #[arg(long)]
        description: Option<String>,

        /// Write the script here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Translate a script between Chinese and English
    Translate {
        /// Script file
        file: PathBuf,

        /// Write the translation here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Rewrite one scene and print the updated scenes
    Refine {
        /// Script file
        file: PathBuf,

        /// Scene to rewrite (C01..C06)
        #[arg(long)]
        scene: SceneId,

        /// Product name
        #[arg(long)]
        keyword: String,

        /// Selling points or product description
        #[arg(long)]
        description: Option<String>,
    },

    /// Render the 3x2 storyboard grid and save it as PNG
    Grid {
        /// Script file
        file: PathBuf,

        /// Reference image for product appearance
        #[arg(long)]
        reference: Option<PathBuf>,

        /// Export directory (defaults to output.directory from config)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
