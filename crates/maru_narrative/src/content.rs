//! Story content loaded from TOML.
//!
//! Intermediate `Toml*` structures mirror the file layout; conversion into
//! domain types assigns indices and validates.
//!
//! ```toml
//! [[chapters]]
//! title = "Jaipur"
//! description = "The pink city"
//! accent_color = "#e07a5f"
//! ambient_sound_src = "audio/jaipur.mp3"
//!
//! [[chapters.landmarks]]
//! title = "Hawa Mahal"
//! description = "Palace of winds"
//! icon = "🏰"
//!
//! [[tour.steps]]
//! target = "timeline"
//! title = "Your Thread"
//! text = "Click anywhere on it to travel between chapters."
//! position = "top"
//! ```

use crate::ChapterRegistry;
use maru_core::{Chapter, Landmark, Placement, SoundSource, TourStep, TourTarget};
use maru_error::{ContentError, ContentErrorKind};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Deserialize)]
struct TomlContent {
    chapters: Vec<TomlChapter>,
    #[serde(default)]
    tour: Option<TomlTour>,
}

#[derive(Debug, Clone, Deserialize)]
struct TomlChapter {
    title: String,
    description: String,
    accent_color: String,
    #[serde(default)]
    ambient_sound_src: Option<String>,
    #[serde(default)]
    landmarks: Vec<TomlLandmark>,
}

#[derive(Debug, Clone, Deserialize)]
struct TomlLandmark {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    icon: String,
}

#[derive(Debug, Clone, Deserialize)]
struct TomlTour {
    steps: Vec<TomlTourStep>,
}

#[derive(Debug, Clone, Deserialize)]
struct TomlTourStep {
    #[serde(default)]
    target: Option<String>,
    title: String,
    text: String,
    #[serde(default)]
    position: Option<String>,
}

impl TomlChapter {
    fn into_chapter(self, index: usize) -> Result<Chapter, ContentError> {
        let landmarks = self
            .landmarks
            .into_iter()
            .enumerate()
            .map(|(i, l)| Landmark::new(index, i, l.title, l.description, l.icon))
            .collect::<Vec<_>>();

        Chapter::builder()
            .index(index)
            .title(self.title)
            .description(self.description)
            .accent_color(self.accent_color)
            .ambient_sound(
                self.ambient_sound_src
                    .filter(|src| !src.trim().is_empty())
                    .map(SoundSource::new),
            )
            .landmarks(landmarks)
            .build()
            .map_err(|e| ContentError::new(ContentErrorKind::TomlParse(e.to_string())))
    }
}

impl TomlTourStep {
    fn into_step(self) -> Result<TourStep, ContentError> {
        let target = self
            .target
            .filter(|t| !t.trim().is_empty())
            .map(|t| t.parse::<TourTarget>())
            .transpose()?;
        let placement = match self.position {
            Some(p) => Placement::from_str(p.trim())
                .map_err(|_| ContentError::new(ContentErrorKind::UnknownPlacement(p)))?,
            None => Placement::default(),
        };
        Ok(TourStep::new(target, self.title, self.text, placement))
    }
}

/// Everything the experience shows: chapters and the guided tour script.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct StoryContent {
    /// Chapters in narrative order
    registry: ChapterRegistry,
    /// Tour steps; the shipped tour when the file declares none
    tour_steps: Vec<TourStep>,
}

impl StoryContent {
    /// Loads content from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML is invalid
    /// - Validation fails (no chapters, blank titles, unknown tour targets)
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ContentError::new(ContentErrorKind::FileRead(e.to_string())))?;
        content.parse()
    }

    /// Split into the registry and the tour script.
    pub fn into_parts(self) -> (ChapterRegistry, Vec<TourStep>) {
        (self.registry, self.tour_steps)
    }
}

impl FromStr for StoryContent {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: TomlContent = toml::from_str(s)
            .map_err(|e| ContentError::new(ContentErrorKind::TomlParse(e.to_string())))?;

        let chapters = raw
            .chapters
            .into_iter()
            .enumerate()
            .map(|(index, chapter)| chapter.into_chapter(index))
            .collect::<Result<Vec<_>, _>>()?;
        let registry = ChapterRegistry::new(chapters)?;

        let tour_steps = match raw.tour {
            Some(tour) if tour.steps.is_empty() => {
                return Err(ContentError::new(ContentErrorKind::EmptyTour));
            }
            Some(tour) => tour
                .steps
                .into_iter()
                .map(TomlTourStep::into_step)
                .collect::<Result<Vec<_>, _>>()?,
            None => TourStep::default_steps(),
        };

        debug!(
            chapters = registry.len(),
            tour_steps = tour_steps.len(),
            "Parsed story content"
        );
        Ok(Self {
            registry,
            tour_steps,
        })
    }
}
