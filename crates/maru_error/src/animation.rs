//! Animation engine error types.

/// Specific animation failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AnimationErrorKind {
    /// The engine dropped a tween without signalling completion
    #[display("Tween on '{}' was dropped before completing", _0)]
    Dropped(String),
    /// The engine refused to schedule a tween
    #[display("Tween on '{}' was rejected: {}", target, reason)]
    Rejected {
        /// Element the tween addressed
        target: String,
        /// Engine-supplied reason
        reason: String,
    },
}

/// Animation error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Animation Error: {} at line {} in {}", kind, line, file)]
pub struct AnimationError {
    kind: AnimationErrorKind,
    line: u32,
    file: &'static str,
}

impl AnimationError {
    /// Create a new animation error with caller location tracking.
    #[track_caller]
    pub fn new(kind: AnimationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AnimationErrorKind {
        &self.kind
    }
}
