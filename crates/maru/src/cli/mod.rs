//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the maru binary.

mod commands;
mod script;
mod simulate;
mod tour;
mod validate;

pub use commands::{Cli, Commands};
pub use simulate::{SimulationOptions, simulate};
pub use tour::walk_tour;
pub use validate::validate_content;

use maru::{
    Backends, Experience, MaruConfig, MaruResult, StoryContent, Viewport,
};
use maru_stage::{InMemoryPresentation, RecordingAudio, TimedAnimationEngine};
use std::path::Path;
use std::sync::Arc;

/// Load configuration from an explicit file, or with the usual precedence.
pub fn load_config(path: Option<&Path>) -> MaruResult<MaruConfig> {
    match path {
        Some(path) => MaruConfig::from_file(path),
        None => MaruConfig::load(),
    }
}

/// Headless experience plus handles on its backends.
pub(crate) struct Headless {
    pub experience: Experience,
    pub stage: InMemoryPresentation,
    pub audio: RecordingAudio,
}

/// Wire content to in-memory backends laid out for `viewport`.
pub(crate) fn headless(
    content: StoryContent,
    config: MaruConfig,
    viewport: Viewport,
) -> MaruResult<Headless> {
    let landmarks: Vec<usize> = content
        .registry()
        .iter()
        .map(|chapter| chapter.landmarks().len())
        .collect();
    let stage = InMemoryPresentation::maru_layout(viewport, &landmarks, content.tour_steps().len());
    let audio = RecordingAudio::new();
    let backends = Backends::new(
        Arc::new(TimedAnimationEngine::new(stage.clone())),
        Arc::new(stage.clone()),
        Arc::new(audio.clone()),
    );
    let experience = Experience::new(content, config, backends)?;
    Ok(Headless {
        experience,
        stage,
        audio,
    })
}
