//! Guided tour step definitions.

use crate::ElementId;
use maru_error::{ContentError, ContentErrorKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Where the tour card sits relative to its target.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    /// Centered over the target
    Center,
    /// To the right, flipping left when it would overflow
    Right,
    /// To the left
    Left,
    /// Above, horizontally centered
    Top,
    /// Above and pulled to the left of the target
    TopLeft,
    /// Below, aligned to the target's left edge
    #[default]
    Bottom,
}

/// What a tour step highlights.
///
/// The chapter-relative targets resolve against whichever chapter is active
/// when the step is positioned, so they may not resolve at all mid-transition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TourTarget {
    /// The whole experience canvas
    Canvas,
    /// Glass card of the active chapter
    ActiveChapterCard,
    /// First landmark of the active chapter
    ActiveChapterLandmark,
    /// Timeline strip
    Timeline,
    /// Sound toggle button
    SoundToggle,
    /// Any other element
    Element(ElementId),
}

impl FromStr for TourTarget {
    type Err = ContentError;

    /// Parses the content-file spelling: a known name, or `#id` for an
    /// arbitrary element.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "canvas" => Ok(Self::Canvas),
            "active-chapter-card" => Ok(Self::ActiveChapterCard),
            "active-chapter-landmark" => Ok(Self::ActiveChapterLandmark),
            "timeline" => Ok(Self::Timeline),
            "sound-toggle" => Ok(Self::SoundToggle),
            other => match other.strip_prefix('#') {
                Some(id) if !id.is_empty() => Ok(Self::Element(ElementId::new(id))),
                _ => Err(ContentError::new(ContentErrorKind::UnknownTourTarget(
                    other.to_string(),
                ))),
            },
        }
    }
}

/// One step of the guided tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct TourStep {
    /// Element to highlight; `None` centers the card in the viewport
    target: Option<TourTarget>,
    /// Card heading
    title: String,
    /// Card body
    text: String,
    /// Preferred card placement
    placement: Placement,
}

impl TourStep {
    /// Create a tour step.
    pub fn new(
        target: Option<TourTarget>,
        title: impl Into<String>,
        text: impl Into<String>,
        placement: Placement,
    ) -> Self {
        Self {
            target,
            title: title.into(),
            text: text.into(),
            placement,
        }
    }

    /// The tour shipped with the experience.
    pub fn default_steps() -> Vec<TourStep> {
        vec![
            TourStep::new(
                None,
                "Welcome to Maru",
                "A digital journey through the soul of Rajasthan. This guided tour will help you navigate the experience with grace and ease.",
                Placement::Center,
            ),
            TourStep::new(
                Some(TourTarget::Canvas),
                "The Canvas",
                "The interface is designed as a seamless, horizontal canvas. Use your mouse wheel, trackpad, or arrow keys to scroll between cities.",
                Placement::Center,
            ),
            TourStep::new(
                Some(TourTarget::ActiveChapterCard),
                "The Stories",
                "Each location is captured in a glass card, containing the essence of the city. Read the descriptions to immerse yourself in the narrative.",
                Placement::Right,
            ),
            TourStep::new(
                Some(TourTarget::ActiveChapterLandmark),
                "Discover Landmarks",
                "Interact with these buttons to uncover hidden details, architectural marvels, and cultural insights specific to each location.",
                Placement::Right,
            ),
            TourStep::new(
                Some(TourTarget::Timeline),
                "Your Thread",
                "The timeline at the bottom represents your journey. Click anywhere on it to swiftly travel between chapters.",
                Placement::Top,
            ),
            TourStep::new(
                Some(TourTarget::SoundToggle),
                "Immersive Audio",
                "For the full experience, enable the sound. Each city has its own unique ambient soundscape.",
                Placement::TopLeft,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_and_element_targets() {
        assert_eq!("timeline".parse::<TourTarget>().unwrap(), TourTarget::Timeline);
        assert_eq!(
            "#start-tour-btn".parse::<TourTarget>().unwrap(),
            TourTarget::Element(ElementId::new("start-tour-btn"))
        );
        assert!("glass-card".parse::<TourTarget>().is_err());
        assert!("#".parse::<TourTarget>().is_err());
    }

    #[test]
    fn placement_spelling() {
        assert_eq!("top-left".parse::<Placement>().unwrap(), Placement::TopLeft);
        assert_eq!(Placement::default(), Placement::Bottom);
    }
}
