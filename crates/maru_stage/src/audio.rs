//! Recording audio backend.

use async_trait::async_trait;
use maru_core::SoundSource;
use maru_error::{AudioError, MaruResult};
use maru_interface::AmbientAudio;
use parking_lot::Mutex;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// One call the backend received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioEvent {
    /// Playback started or resumed
    Played(SoundSource),
    /// Playback paused
    Paused(SoundSource),
}

#[derive(Debug, Default)]
struct AudioInner {
    playing: BTreeSet<String>,
    events: Vec<AudioEvent>,
}

/// Audio backend that remembers which sources are playing.
///
/// Can be told to refuse playback, the way a browser does before the user
/// has interacted with the page.
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    inner: Arc<Mutex<AudioInner>>,
    refuse: Arc<AtomicBool>,
}

impl RecordingAudio {
    /// Backend that accepts playback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse (or accept again) every play request.
    pub fn set_refuse(&self, refuse: bool) {
        self.refuse.store(refuse, Ordering::SeqCst);
    }

    /// Sources currently playing.
    pub fn playing(&self) -> Vec<SoundSource> {
        self.inner
            .lock()
            .playing
            .iter()
            .map(|s| SoundSource::new(s.as_str()))
            .collect()
    }

    /// Whether `source` is playing.
    pub fn is_playing(&self, source: &SoundSource) -> bool {
        self.inner.lock().playing.contains(source.as_str())
    }

    /// Every call in order.
    pub fn events(&self) -> Vec<AudioEvent> {
        self.inner.lock().events.clone()
    }
}

#[async_trait]
impl AmbientAudio for RecordingAudio {
    async fn play_looped(&self, source: &SoundSource) -> MaruResult<()> {
        if self.refuse.load(Ordering::SeqCst) {
            debug!(source = source.as_str(), "Refusing playback");
            return Err(AudioError::new(format!("playback of {} refused", source.as_str())).into());
        }
        let mut inner = self.inner.lock();
        inner.playing.insert(source.as_str().to_string());
        inner.events.push(AudioEvent::Played(source.clone()));
        Ok(())
    }

    fn pause(&self, source: &SoundSource) {
        let mut inner = self.inner.lock();
        if inner.playing.remove(source.as_str()) {
            inner.events.push(AudioEvent::Paused(source.clone()));
        }
    }
}
