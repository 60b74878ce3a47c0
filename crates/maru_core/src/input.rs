//! Raw input surface.

use serde::{Deserialize, Serialize};

/// Keys the experience reacts to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Key {
    /// Previous chapter, previous tour step
    #[strum(to_string = "ArrowLeft", serialize = "left")]
    ArrowLeft,
    /// Next chapter, next tour step
    #[strum(to_string = "ArrowRight", serialize = "right")]
    ArrowRight,
    /// Activates a focused landmark, advances the tour
    Enter,
    /// Closes the detail popover or the tour
    #[strum(to_string = "Escape", serialize = "esc")]
    Escape,
}

/// A user input event, already reduced to what the core cares about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Mouse wheel or trackpad scroll
    Wheel {
        /// Vertical delta as reported by the platform
        delta_y: f64,
    },
    /// Key press
    Key(Key),
    /// Click on the timeline strip at a viewport x coordinate
    TimelineClick {
        /// Horizontal pointer position
        client_x: f64,
    },
    /// Click, or Enter while focused, on a landmark affordance
    LandmarkActivate {
        /// Chapter owning the landmark
        chapter: usize,
        /// Landmark index within the chapter
        landmark: usize,
    },
    /// Click on the detail popover's backdrop or close button
    DetailDismiss,
    /// Click on the sound toggle
    SoundToggle,
    /// Click on the tour overlay or the tour close button
    TourDismiss,
}
