//! Chapter and landmark records.

use crate::ElementId;
use serde::{Deserialize, Serialize};

/// Accent color token applied to the root while a chapter is active.
///
/// The token is passed through to the presentation layer untouched, so any
/// value it understands (`#c2410c`, `rgb(...)`, a named color) is accepted.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("{}", _0)]
#[serde(transparent)]
pub struct AccentColor(String);

impl AccentColor {
    /// Create an accent color from a token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccentColor {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

/// Reference to a chapter's looping ambient sound.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("{}", _0)]
#[serde(transparent)]
pub struct SoundSource(String);

impl SoundSource {
    /// Create a sound source from a URL or path.
    pub fn new(src: impl Into<String>) -> Self {
        Self(src.into())
    }

    /// The raw source string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SoundSource {
    fn from(src: &str) -> Self {
        Self::new(src)
    }
}

/// A point of interest inside a chapter that opens the detail popover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Landmark {
    /// Index of the owning chapter
    chapter: usize,
    /// Position within the chapter's landmark list
    index: usize,
    /// Popover title
    title: String,
    /// Popover body
    description: String,
    /// Emoji or short glyph shown in the popover
    icon: String,
}

impl Landmark {
    /// Create a landmark record.
    pub fn new(
        chapter: usize,
        index: usize,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            chapter,
            index,
            title: title.into(),
            description: description.into(),
            icon: icon.into(),
        }
    }

    /// Element the landmark affordance is rendered as.
    pub fn anchor(&self) -> ElementId {
        ElementId::landmark(self.chapter, self.index)
    }
}

/// One narrative unit (a city) with its text, accent and ambient sound.
///
/// Chapters are constructed once from static content and never change; the
/// "active" flag lives in the presentation layer and is owned by the
/// navigator.
///
/// # Examples
///
/// ```
/// use maru_core::Chapter;
///
/// let jaipur = Chapter::builder()
///     .index(0usize)
///     .title("Jaipur")
///     .description("The pink city.")
///     .accent_color("#e07a5f")
///     .build()
///     .unwrap();
///
/// assert_eq!(jaipur.title(), "Jaipur");
/// assert!(jaipur.ambient_sound().is_none());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Chapter {
    /// Ordinal position, equal to the narrative order
    index: usize,
    /// Title text
    title: String,
    /// Description text
    description: String,
    /// Accent color token
    accent_color: AccentColor,
    /// Optional ambient sound
    #[builder(default)]
    ambient_sound: Option<SoundSource>,
    /// Landmarks in display order
    #[builder(default)]
    landmarks: Vec<Landmark>,
}

impl Chapter {
    /// Creates a new chapter builder.
    pub fn builder() -> ChapterBuilder {
        ChapterBuilder::default()
    }

    /// Element holding the whole chapter panel.
    pub fn element(&self) -> ElementId {
        ElementId::chapter(self.index)
    }

    /// Element holding the split title characters.
    pub fn title_element(&self) -> ElementId {
        ElementId::chapter_title(self.index)
    }

    /// Element holding the split description words.
    pub fn description_element(&self) -> ElementId {
        ElementId::chapter_description(self.index)
    }

    /// Number of characters the title reveal staggers over.
    pub fn title_glyphs(&self) -> usize {
        self.title.chars().filter(|c| !c.is_whitespace()).count()
    }

    /// Number of words the description reveal staggers over.
    pub fn description_words(&self) -> usize {
        self.description.split_whitespace().count()
    }
}
