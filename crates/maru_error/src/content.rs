//! Content loading error types.

/// Specific error conditions for chapter and tour content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ContentErrorKind {
    /// Failed to read the content file
    #[display("Failed to read content file: {}", _0)]
    FileRead(String),
    /// Failed to parse TOML content
    #[display("Failed to parse TOML: {}", _0)]
    TomlParse(String),
    /// Content declares no chapters
    #[display("Content must declare at least one chapter")]
    NoChapters,
    /// Chapter index disagrees with its position in the list
    #[display("Chapter at position {} declares index {}", position, declared)]
    IndexMismatch {
        /// Position in the chapter list
        position: usize,
        /// Index the chapter carries
        declared: usize,
    },
    /// Chapter title is empty or whitespace
    #[display("Chapter {} has an empty title", _0)]
    EmptyTitle(usize),
    /// Chapter accent color is empty or whitespace
    #[display("Chapter {} has an empty accent color", _0)]
    EmptyAccentColor(usize),
    /// Landmark is missing a title
    #[display("Landmark {} of chapter {} has an empty title", landmark, chapter)]
    EmptyLandmarkTitle {
        /// Chapter index
        chapter: usize,
        /// Landmark index within the chapter
        landmark: usize,
    },
    /// Tour step names a target that is not known
    #[display("Unknown tour target '{}'", _0)]
    UnknownTourTarget(String),
    /// Tour step names a placement that is not known
    #[display("Unknown tour placement '{}'", _0)]
    UnknownPlacement(String),
    /// Tour declares no steps
    #[display("Tour must declare at least one step")]
    EmptyTour,
}

/// Error type for content loading and validation.
///
/// # Examples
///
/// ```
/// use maru_error::{ContentError, ContentErrorKind};
///
/// let err = ContentError::new(ContentErrorKind::EmptyTitle(2));
/// assert!(format!("{}", err).contains("Chapter 2"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Content Error: {} at line {} in {}", kind, line, file)]
pub struct ContentError {
    /// The specific error condition
    pub kind: ContentErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ContentError {
    /// Create a new ContentError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ContentErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
