//! Chapter navigation for Maru.
//!
//! This crate owns the story's single source of truth: which chapter is
//! settled and whether a transition is in flight. It provides:
//!
//! - **Content loading**: chapters, landmarks and the tour script from TOML
//! - **Navigation state machine**: at most one transition in flight, four
//!   independently scheduled channels, commit on page-translation completion
//! - **Input routing**: wheel, keyboard and timeline gestures with cooldown
//! - **Ambient sound**: one looping chapter sound at a time
//! - **Detail popover**: landmark descriptions opened over the story
//! - **Configuration**: bundled timings layered with user overrides
//!
//! # Example
//!
//! ```rust,ignore
//! use maru_narrative::{InputRouter, MaruConfig, Navigator, SoundController, StoryContent};
//! use std::sync::Arc;
//!
//! # async fn example(engine: Arc<dyn maru_interface::AnimationEngine>,
//! #     stage: Arc<dyn maru_interface::Presentation>,
//! #     audio: Arc<dyn maru_interface::AmbientAudio>) -> Result<(), Box<dyn std::error::Error>> {
//! let config = MaruConfig::load()?;
//! let (registry, _tour) = StoryContent::from_file("story.toml")?.into_parts();
//! let registry = Arc::new(registry);
//!
//! let sound = SoundController::new(&registry, audio, stage.clone());
//! let navigator = Navigator::new(registry, config.transition, engine, stage.clone(), sound);
//! navigator.enter().await;
//!
//! let mut router = InputRouter::new(navigator.clone(), stage, config.input);
//! router.route(&maru_core::InputEvent::Wheel { delta_y: 120.0 });
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod content;
mod detail;
mod input;
mod navigator;
mod registry;
mod sound;
mod state;

pub use config::{DetailConfig, InputConfig, MaruConfig, TourConfig, TransitionConfig};
pub use content::StoryContent;
pub use detail::DetailView;
pub use input::{IgnoreReason, InputRouter, RouteOutcome, timeline_index};
pub use navigator::{Navigator, TransitionHandle};
pub use registry::ChapterRegistry;
pub use sound::SoundController;
pub use state::{NavigationPhase, NavigationState};
