//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Maru - headless driver for the chapter navigation and tour core
#[derive(Parser, Debug)]
#[command(name = "maru")]
#[command(about = "Validate story content and replay navigation headlessly", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file layered over the bundled defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load and validate a story content file
    Validate {
        /// Path to the content TOML file
        content: PathBuf,

        /// Print the parsed chapters as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay an input script against headless backends
    Simulate {
        /// Path to the content TOML file
        content: PathBuf,

        /// Comma-separated events, e.g. "wheel:120,wait:2500,key:left,click:0.5"
        #[arg(long, default_value = "")]
        events: String,

        /// Viewport width
        #[arg(long, default_value = "1440")]
        width: f64,

        /// Viewport height
        #[arg(long, default_value = "900")]
        height: f64,

        /// Run timers on the wall clock instead of a virtual one
        #[arg(long)]
        realtime: bool,
    },

    /// Walk the guided tour and print where each card lands
    Tour {
        /// Path to the content TOML file
        content: PathBuf,

        /// Viewport width
        #[arg(long, default_value = "1440")]
        width: f64,

        /// Viewport height
        #[arg(long, default_value = "900")]
        height: f64,
    },
}
