//! Maru CLI binary.
//!
//! This binary drives the navigation core without a browser:
//! - Validate story content files
//! - Replay input scripts against in-memory backends
//! - Walk the guided tour and report card placement

use clap::Parser;

mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, SimulationOptions, simulate, validate_content, walk_tour};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins unless --verbose is given
    if cli.verbose {
        maru::init_telemetry_with_level(true)?;
    } else {
        maru::init_telemetry()?;
    }

    // Execute the requested command
    match cli.command {
        Commands::Validate { content, json } => {
            validate_content(&content, json)?;
        }

        Commands::Simulate {
            content,
            events,
            width,
            height,
            realtime,
        } => {
            simulate(SimulationOptions {
                content,
                config: cli.config,
                events,
                viewport: maru::Viewport::new(width, height),
                realtime,
            })
            .await?;
        }

        Commands::Tour {
            content,
            width,
            height,
        } => {
            walk_tour(
                &content,
                cli.config.as_deref(),
                maru::Viewport::new(width, height),
            )
            .await?;
        }
    }

    Ok(())
}
