//! Guided tour overlay for Maru.
//!
//! A [`TourEngine`] steps through a fixed script. Each step highlights a live
//! element with a padded spotlight and places an info card next to it,
//! falling back to a centered card when the element cannot be found. The
//! pure placement math lives in [`card_position`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod engine;
mod placement;

pub use engine::{TourEngine, TourState};
pub use placement::card_position;
