//! Per-chapter ambient sound switching.

use crate::ChapterRegistry;
use maru_core::{ElementId, SoundSource, class};
use maru_interface::{AmbientAudio, Presentation};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, instrument};

/// Owns the sound-enabled flag and keeps at most one chapter loop playing.
///
/// Sound starts disabled. Playback rejections (autoplay policies) are
/// swallowed: the sound simply stays silent.
#[derive(Clone)]
pub struct SoundController {
    audio: Arc<dyn AmbientAudio>,
    stage: Arc<dyn Presentation>,
    sources: Arc<Vec<Option<SoundSource>>>,
    enabled: Arc<AtomicBool>,
}

impl std::fmt::Debug for SoundController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoundController")
            .field("sources", &self.sources)
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

impl SoundController {
    /// Collect each chapter's ambient source from the registry.
    pub fn new(
        registry: &ChapterRegistry,
        audio: Arc<dyn AmbientAudio>,
        stage: Arc<dyn Presentation>,
    ) -> Self {
        let sources = registry
            .iter()
            .map(|chapter| chapter.ambient_sound().clone())
            .collect();
        Self {
            audio,
            stage,
            sources: Arc::new(sources),
            enabled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether the user has switched sound on.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Flip the sound flag, update the toggle and start or stop playback.
    ///
    /// Returns the new flag.
    #[instrument(skip(self))]
    pub async fn toggle(&self, current: usize) -> bool {
        let enabled = !self.enabled.fetch_xor(true, Ordering::SeqCst);
        info!(enabled, "Sound toggled");

        let toggle = ElementId::sound_toggle();
        self.stage
            .set_attribute(&toggle, "aria-pressed", if enabled { "true" } else { "false" });
        self.stage
            .set_attribute(&toggle, "title", if enabled { "Mute" } else { "Listen" });
        self.stage.set_class(&toggle, class::ACTIVE, enabled);

        if enabled {
            self.play_for(current).await;
        } else {
            self.stop_all();
        }
        enabled
    }

    /// Play the chapter's loop and pause every other one, if sound is on.
    #[instrument(skip(self))]
    pub async fn play_for(&self, current: usize) {
        if !self.is_enabled() {
            return;
        }

        for (index, source) in self.sources.iter().enumerate() {
            let Some(source) = source else { continue };
            if index == current {
                if let Err(e) = self.audio.play_looped(source).await {
                    debug!(chapter = index, error = %e, "Ambient playback rejected");
                }
            } else {
                self.audio.pause(source);
            }
        }
    }

    /// Pause every chapter loop.
    pub fn stop_all(&self) {
        for source in self.sources.iter().flatten() {
            self.audio.pause(source);
        }
    }
}
