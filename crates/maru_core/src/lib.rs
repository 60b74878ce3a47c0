//! Core data types for the Maru narrative navigation core.
//!
//! This crate provides the data model shared by the navigation state machine,
//! the input router and the guided tour: chapters and their landmarks,
//! element identifiers, viewport geometry, tween descriptions and tour steps.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chapter;
mod element;
mod geometry;
mod input;
mod telemetry;
mod tour;
mod tween;

pub use chapter::{AccentColor, Chapter, ChapterBuilder, Landmark, SoundSource};
pub use element::{ElementId, class};
pub use geometry::{Point, Rect, Size, Viewport};
pub use input::{InputEvent, Key};
pub use telemetry::{init_telemetry, init_telemetry_with_level};
pub use tour::{Placement, TourStep, TourTarget};
pub use tween::{Ease, Property, PropertyKind, Stagger, Tween, TweenBuilder};
