//! Ordered chapter registry.

use maru_core::{Chapter, Landmark};
use maru_error::{ContentError, ContentErrorKind};
use tracing::debug;

/// The chapters of the story in narrative order.
///
/// Resolved once at startup and read-only afterwards. Never empty.
///
/// # Examples
///
/// ```
/// use maru_core::Chapter;
/// use maru_narrative::ChapterRegistry;
///
/// let chapters = (0usize..6)
///     .map(|i| {
///         Chapter::builder()
///             .index(i)
///             .title(format!("City {i}"))
///             .description("...")
///             .accent_color("#fff")
///             .build()
///             .unwrap()
///     })
///     .collect();
///
/// let registry = ChapterRegistry::new(chapters).unwrap();
/// assert_eq!(registry.progress_percent(3), 60.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterRegistry {
    chapters: Vec<Chapter>,
}

impl ChapterRegistry {
    /// Validate and wrap chapters.
    ///
    /// # Errors
    ///
    /// Returns a `ContentError` if the list is empty, a chapter index does not
    /// match its position, or a title or accent color is blank.
    pub fn new(chapters: Vec<Chapter>) -> Result<Self, ContentError> {
        if chapters.is_empty() {
            return Err(ContentError::new(ContentErrorKind::NoChapters));
        }

        for (position, chapter) in chapters.iter().enumerate() {
            if *chapter.index() != position {
                return Err(ContentError::new(ContentErrorKind::IndexMismatch {
                    position,
                    declared: *chapter.index(),
                }));
            }
            if chapter.title().trim().is_empty() {
                return Err(ContentError::new(ContentErrorKind::EmptyTitle(position)));
            }
            if chapter.accent_color().as_str().trim().is_empty() {
                return Err(ContentError::new(ContentErrorKind::EmptyAccentColor(
                    position,
                )));
            }
            for landmark in chapter.landmarks() {
                if landmark.title().trim().is_empty() {
                    return Err(ContentError::new(ContentErrorKind::EmptyLandmarkTitle {
                        chapter: position,
                        landmark: *landmark.index(),
                    }));
                }
            }
        }

        debug!(count = chapters.len(), "Chapter registry resolved");
        Ok(Self { chapters })
    }

    /// Number of chapters.
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    /// Always false; an empty registry cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Index of the final chapter.
    pub fn last_index(&self) -> usize {
        self.chapters.len() - 1
    }

    /// Chapter at `index`.
    pub fn get(&self, index: usize) -> Option<&Chapter> {
        self.chapters.get(index)
    }

    /// Chapter at `index`, clamped into range.
    pub fn clamped(&self, index: usize) -> &Chapter {
        &self.chapters[self.clamp(index)]
    }

    /// All chapters in order.
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Iterate chapters in order.
    pub fn iter(&self) -> impl Iterator<Item = &Chapter> {
        self.chapters.iter()
    }

    /// Landmark lookup.
    pub fn landmark(&self, chapter: usize, landmark: usize) -> Option<&Landmark> {
        self.get(chapter)?.landmarks().get(landmark)
    }

    /// Clamp an index into `[0, len - 1]`.
    pub fn clamp(&self, index: usize) -> usize {
        index.min(self.last_index())
    }

    /// Progress indicator width for a settled chapter.
    ///
    /// `index / (len - 1) * 100`: 0 at the first chapter, 100 at the last.
    /// A single-chapter story reports 0.
    pub fn progress_percent(&self, index: usize) -> f64 {
        let last = self.last_index();
        if last == 0 {
            return 0.0;
        }
        self.clamp(index) as f64 / last as f64 * 100.0
    }
}
