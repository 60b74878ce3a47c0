//! Ambient audio capability.

use async_trait::async_trait;
use maru_core::SoundSource;
use maru_error::MaruResult;

/// Backend playing per-chapter ambient loops.
#[async_trait]
pub trait AmbientAudio: Send + Sync {
    /// Start the source looping from where it was paused.
    ///
    /// # Errors
    ///
    /// Returns an `AudioError` when the backend refuses playback, for
    /// example because of an autoplay policy.
    async fn play_looped(&self, source: &SoundSource) -> MaruResult<()>;

    /// Pause the source. Pausing a silent source is a no-op.
    fn pause(&self, source: &SoundSource);
}
