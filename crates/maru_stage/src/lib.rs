//! Headless backends for the Maru trait seams.
//!
//! - [`InMemoryPresentation`] keeps element geometry, styles, classes and text
//!   in memory and logs every change as a [`StageEvent`]
//! - [`TimedAnimationEngine`] completes each tween after its total duration
//! - [`RecordingAudio`] tracks which ambient loops are playing
//!
//! Together they drive the navigator and the tour without a browser: in the
//! command line simulator and in tests under a paused Tokio clock.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod audio;
mod engine;
mod event;
mod presentation;

pub use audio::{AudioEvent, RecordingAudio};
pub use engine::TimedAnimationEngine;
pub use event::StageEvent;
pub use presentation::{ElementState, InMemoryPresentation};
