//! Tests for the landmark popover and ambient sound controller.

use maru_core::{Chapter, ElementId, Landmark, PropertyKind, SoundSource, class};
use maru_interface::Presentation;
use maru_narrative::{ChapterRegistry, DetailConfig, DetailView, SoundController};
use maru_stage::{AudioEvent, InMemoryPresentation, RecordingAudio, TimedAnimationEngine};
use std::sync::Arc;
use std::time::Duration;

fn registry() -> ChapterRegistry {
    let sounds = [Some("audio/jaipur.mp3"), None, Some("audio/udaipur.mp3")];
    let chapters = sounds
        .iter()
        .enumerate()
        .map(|(i, sound)| {
            Chapter::builder()
                .index(i)
                .title(format!("City {i}"))
                .description("Stone")
                .accent_color("#d4a373")
                .ambient_sound(sound.map(SoundSource::new))
                .build()
                .unwrap()
        })
        .collect();
    ChapterRegistry::new(chapters).unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_detail_open_fills_and_shows() {
    let stage = InMemoryPresentation::default();
    let detail = DetailView::new(
        Arc::new(TimedAnimationEngine::new(stage.clone())),
        Arc::new(stage.clone()),
        DetailConfig::default(),
    );
    assert!(!detail.is_open());

    detail.open(&Landmark::new(0, 0, "Hawa Mahal", "Palace of winds", "🏰"));
    assert!(detail.is_open());
    assert_eq!(stage.text(&ElementId::detail_title()).unwrap(), "Hawa Mahal");
    assert_eq!(stage.text(&ElementId::detail_icon()).unwrap(), "🏰");
    assert_eq!(
        stage.value(&ElementId::detail_content(), PropertyKind::Scale),
        Some(0.5)
    );

    tokio::time::sleep(Duration::from_millis(700)).await;
    assert_eq!(
        stage.value(&ElementId::detail_content(), PropertyKind::Scale),
        Some(1.0)
    );
}

#[tokio::test(start_paused = true)]
async fn test_detail_close_hides_after_scale_out() {
    let stage = InMemoryPresentation::default();
    let detail = DetailView::new(
        Arc::new(TimedAnimationEngine::new(stage.clone())),
        Arc::new(stage.clone()),
        DetailConfig::default(),
    );
    assert!(detail.close().is_none());

    detail.open(&Landmark::new(1, 0, "Mehrangarh", "Fort", "🏯"));
    let closing = detail.close().expect("open popover closes");
    assert!(stage.has_class(&ElementId::detail_view(), class::VISIBLE));

    closing.await.unwrap();
    assert!(!detail.is_open());
    assert_eq!(stage.value(&ElementId::detail_content(), PropertyKind::Scale), None);
    assert_eq!(stage.value(&ElementId::detail_content(), PropertyKind::Opacity), None);
}

#[tokio::test]
async fn test_sound_starts_disabled_and_toggles() {
    let stage = InMemoryPresentation::default();
    let audio = RecordingAudio::new();
    let sound = SoundController::new(&registry(), Arc::new(audio.clone()), Arc::new(stage.clone()));

    assert!(!sound.is_enabled());
    sound.play_for(0).await;
    assert!(audio.events().is_empty());

    assert!(sound.toggle(0).await);
    let toggle = ElementId::sound_toggle();
    assert_eq!(stage.attribute(&toggle, "aria-pressed").as_deref(), Some("true"));
    assert_eq!(stage.attribute(&toggle, "title").as_deref(), Some("Mute"));
    assert!(audio.is_playing(&SoundSource::new("audio/jaipur.mp3")));

    sound.play_for(2).await;
    assert_eq!(audio.playing(), vec![SoundSource::new("audio/udaipur.mp3")]);

    // Chapter without a sound: everything else pauses.
    sound.play_for(1).await;
    assert!(audio.playing().is_empty());

    assert!(!sound.toggle(1).await);
    assert_eq!(stage.attribute(&toggle, "aria-pressed").as_deref(), Some("false"));
    assert_eq!(stage.attribute(&toggle, "title").as_deref(), Some("Listen"));
}

#[tokio::test]
async fn test_disabling_sound_pauses_everything() {
    let audio = RecordingAudio::new();
    let sound = SoundController::new(
        &registry(),
        Arc::new(audio.clone()),
        Arc::new(InMemoryPresentation::default()),
    );

    sound.toggle(2).await;
    sound.toggle(2).await;
    assert!(audio.playing().is_empty());
    assert_eq!(
        audio.events(),
        vec![
            AudioEvent::Played(SoundSource::new("audio/udaipur.mp3")),
            AudioEvent::Paused(SoundSource::new("audio/udaipur.mp3")),
        ]
    );
}

#[tokio::test]
async fn test_refused_playback_is_swallowed() {
    let audio = RecordingAudio::new();
    audio.set_refuse(true);
    let sound = SoundController::new(
        &registry(),
        Arc::new(audio.clone()),
        Arc::new(InMemoryPresentation::default()),
    );

    assert!(sound.toggle(0).await);
    assert!(sound.is_enabled());
    assert!(audio.playing().is_empty());
}
