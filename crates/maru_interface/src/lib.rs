//! Trait seams for the Maru navigation core.
//!
//! The core never touches a document or an audio element directly. It talks
//! to three capabilities:
//!
//! - [`AnimationEngine`] schedules tweens and hands back a [`Completion`]
//!   that resolves exactly once when the tween settles
//! - [`Presentation`] measures geometry and mutates styles, classes and text
//! - [`AmbientAudio`] plays and pauses looping chapter sounds

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod animation;
mod audio;
mod presentation;

pub use animation::{AnimationEngine, Completion, CompletionSignal};
pub use audio::AmbientAudio;
pub use presentation::Presentation;
