//! Typed element identifiers.
//!
//! Every element the core touches is named here once, so the navigator and
//! the tour never build ad hoc selector strings.

use serde::{Deserialize, Serialize};

/// Class names the core toggles.
pub mod class {
    /// Marks the settled chapter and the active tour layers.
    pub const ACTIVE: &str = "active";
    /// Marks the open detail popover.
    pub const VISIBLE: &str = "visible";
    /// Keeps an element's box but makes it invisible.
    pub const HIDDEN: &str = "hidden";
}

/// Identifier of an element in the presentation layer.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("{}", _0)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Wrap an arbitrary identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Horizontal strip holding every chapter panel.
    pub fn container() -> Self {
        Self::new("chapters-container")
    }

    /// The canvas wrapping the whole experience.
    pub fn canvas() -> Self {
        Self::new("maru-canvas")
    }

    /// Filled part of the timeline.
    pub fn progress() -> Self {
        Self::new("thread-progress")
    }

    /// Clickable timeline strip.
    pub fn timeline() -> Self {
        Self::new("thread-timeline")
    }

    /// Displacement filter driving the distortion pulse.
    pub fn distortion() -> Self {
        Self::new("distortion-filter")
    }

    /// Document root, carrier of the accent color variable.
    pub fn root() -> Self {
        Self::new(":root")
    }

    /// Ambient sound toggle button.
    pub fn sound_toggle() -> Self {
        Self::new("sound-toggle")
    }

    /// Chapter panel.
    pub fn chapter(index: usize) -> Self {
        Self(format!("chapter-{index}"))
    }

    /// Chapter title characters.
    pub fn chapter_title(index: usize) -> Self {
        Self(format!("chapter-{index}-title"))
    }

    /// Chapter description words.
    pub fn chapter_description(index: usize) -> Self {
        Self(format!("chapter-{index}-description"))
    }

    /// Glass card holding the chapter text.
    pub fn chapter_card(index: usize) -> Self {
        Self(format!("chapter-{index}-card"))
    }

    /// Landmark affordance inside a chapter.
    pub fn landmark(chapter: usize, index: usize) -> Self {
        Self(format!("chapter-{chapter}-landmark-{index}"))
    }

    /// Detail popover backdrop.
    pub fn detail_view() -> Self {
        Self::new("detail-view")
    }

    /// Detail popover content panel.
    pub fn detail_content() -> Self {
        Self::new("detail-content")
    }

    /// Detail popover icon.
    pub fn detail_icon() -> Self {
        Self::new("detail-emoji")
    }

    /// Detail popover title.
    pub fn detail_title() -> Self {
        Self::new("detail-title")
    }

    /// Detail popover body.
    pub fn detail_description() -> Self {
        Self::new("detail-description")
    }

    /// Dimming layer behind the tour.
    pub fn tour_overlay() -> Self {
        Self::new("tour-overlay")
    }

    /// Highlight around the tour target.
    pub fn tour_spotlight() -> Self {
        Self::new("tour-spotlight")
    }

    /// Floating tour card.
    pub fn tour_card() -> Self {
        Self::new("tour-card")
    }

    /// Tour card heading.
    pub fn tour_title() -> Self {
        Self::new("tour-title")
    }

    /// Tour card body.
    pub fn tour_text() -> Self {
        Self::new("tour-text")
    }

    /// Tour "Prev" button.
    pub fn tour_prev() -> Self {
        Self::new("tour-prev")
    }

    /// Tour "Next"/"Finish" button.
    pub fn tour_next() -> Self {
        Self::new("tour-next")
    }

    /// Tour progress dot.
    pub fn tour_dot(index: usize) -> Self {
        Self(format!("tour-dot-{index}"))
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chapter_scoped_ids_are_distinct() {
        assert_ne!(ElementId::chapter(1), ElementId::chapter(2));
        assert_ne!(ElementId::chapter_title(1), ElementId::chapter_description(1));
        assert_eq!(ElementId::landmark(3, 0).as_str(), "chapter-3-landmark-0");
    }
}
