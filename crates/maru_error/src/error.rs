//! Top-level error wrapper types.

use crate::{AnimationError, AudioError, BuilderError, ConfigError, ContentError};

/// Every error the Maru crates can produce.
///
/// # Examples
///
/// ```
/// use maru_error::{ConfigError, MaruError};
///
/// let err: MaruError = ConfigError::new("bad cooldown").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MaruErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Content loading or validation error
    #[from(ContentError)]
    Content(ContentError),
    /// Animation engine error
    #[from(AnimationError)]
    Animation(AnimationError),
    /// Ambient audio playback error
    #[from(AudioError)]
    Audio(AudioError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
}

/// Maru error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Maru Error: {}", _0)]
pub struct MaruError(Box<MaruErrorKind>);

impl MaruError {
    /// Create a new error from a kind.
    pub fn new(kind: MaruErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MaruErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to MaruErrorKind
impl<T> From<T> for MaruError
where
    T: Into<MaruErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Maru operations.
pub type MaruResult<T> = std::result::Result<T, MaruError>;
