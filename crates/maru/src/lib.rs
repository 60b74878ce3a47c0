//! Maru: chapter navigation and guided tour core.
//!
//! Maru drives a scroll-based narrative site made of full-viewport chapters.
//! This crate assembles the pieces:
//!
//! - **Navigation**: [`Navigator`] serializes chapter transitions and
//!   sequences their animation channels
//! - **Input**: [`InputRouter`] turns wheel, key and timeline input into
//!   navigation requests
//! - **Tour**: [`TourEngine`] walks the user through the interface
//! - **Experience**: [`Experience`] routes every input event to the right part
//!
//! Rendering, animation and audio stay behind the traits in
//! [`maru_interface`]; [`maru_stage`] provides headless implementations.
//!
//! # Example
//!
//! ```rust,ignore
//! use maru::{Backends, Experience, MaruConfig, StoryContent};
//! use maru_stage::{InMemoryPresentation, RecordingAudio, TimedAnimationEngine};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let content = StoryContent::from_file("demos/rajasthan.toml")?;
//! let stage = InMemoryPresentation::default();
//! let backends = Backends::new(
//!     Arc::new(TimedAnimationEngine::new(stage.clone())),
//!     Arc::new(stage),
//!     Arc::new(RecordingAudio::new()),
//! );
//!
//! let mut experience = Experience::new(content, MaruConfig::load()?, backends)?;
//! experience.enter().await;
//! experience.handle(&maru::InputEvent::Wheel { delta_y: 120.0 }).await;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod experience;

pub use experience::{Backends, Experience, Handled};

pub use maru_core::{
    Chapter, ElementId, InputEvent, Key, Landmark, Placement, TourStep, TourTarget, Viewport,
    init_telemetry, init_telemetry_with_level,
};
pub use maru_error::{MaruError, MaruErrorKind, MaruResult};
pub use maru_interface::{AmbientAudio, AnimationEngine, Completion, Presentation};
pub use maru_narrative::{
    ChapterRegistry, IgnoreReason, InputRouter, MaruConfig, NavigationPhase, NavigationState,
    Navigator, RouteOutcome, StoryContent, TransitionHandle,
};
pub use maru_tour::{TourEngine, TourState, card_position};
