//! Ambient audio error types.

/// Playback was refused by the audio backend (typically an autoplay policy).
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Audio Error: {} at line {} in {}", message, line, file)]
pub struct AudioError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl AudioError {
    /// Create a new AudioError at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
