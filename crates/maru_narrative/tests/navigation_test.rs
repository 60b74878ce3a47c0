use maru_core::{Chapter, ElementId, Landmark, PropertyKind, SoundSource, Viewport, class};
use maru_interface::Presentation;
use maru_narrative::{
    ChapterRegistry, NavigationPhase, Navigator, SoundController, TransitionConfig,
};
use maru_stage::{InMemoryPresentation, RecordingAudio, StageEvent, TimedAnimationEngine};
use std::sync::Arc;
use std::time::Duration;

const ACCENTS: [&str; 6] = ["#e07a5f", "#3d405b", "#81b29a", "#f2cc8f", "#c05299", "#d4a373"];

fn story(count: usize) -> ChapterRegistry {
    let chapters = (0..count)
        .map(|i| {
            Chapter::builder()
                .index(i)
                .title(format!("City {i}"))
                .description("Sand and stone under a wide sky")
                .accent_color(ACCENTS[i % ACCENTS.len()])
                .ambient_sound(Some(SoundSource::new(format!("audio/city-{i}.mp3"))))
                .landmarks(vec![Landmark::new(i, 0, "Fort", "Old walls", "🏰")])
                .build()
                .unwrap()
        })
        .collect();
    ChapterRegistry::new(chapters).unwrap()
}

struct Harness {
    stage: InMemoryPresentation,
    engine: TimedAnimationEngine,
    audio: RecordingAudio,
    navigator: Navigator,
}

fn harness(count: usize) -> Harness {
    let registry = Arc::new(story(count));
    let stage = InMemoryPresentation::maru_layout(Viewport::new(1440.0, 900.0), &vec![1; count], 0);
    let engine = TimedAnimationEngine::new(stage.clone());
    let audio = RecordingAudio::new();
    let sound = SoundController::new(&registry, Arc::new(audio.clone()), Arc::new(stage.clone()));
    let navigator = Navigator::new(
        registry,
        TransitionConfig::default(),
        Arc::new(engine.clone()),
        Arc::new(stage.clone()),
        sound,
    );
    Harness {
        stage,
        engine,
        audio,
        navigator,
    }
}

#[tokio::test(start_paused = true)]
async fn transition_settles_on_target() {
    let h = harness(6);
    h.navigator.enter().await;

    let handle = h.navigator.request_go_to(2).expect("accepted");
    assert_eq!((handle.from(), handle.to()), (0, 2));

    let state = h.navigator.state();
    assert!(state.is_transitioning());
    assert_eq!(state.current_chapter(), 0);
    assert!(state.last_transition().is_some());

    assert_eq!(handle.settled().await, Some(2));
    assert_eq!(h.navigator.state().phase(), NavigationPhase::Idle(2));
    assert_eq!(h.stage.with_class(class::ACTIVE), vec![ElementId::chapter(2)]);
    assert_eq!(
        h.stage.value(&ElementId::container(), PropertyKind::X),
        Some(-2.0 * 1440.0)
    );
}

#[tokio::test(start_paused = true)]
async fn requests_during_a_transition_are_dropped() {
    let h = harness(6);
    h.navigator.enter().await;

    let first = h.navigator.request_go_to(1).expect("accepted");
    assert!(h.navigator.request_go_to(3).is_none());
    assert!(h.navigator.request_go_to(0).is_none());

    assert_eq!(first.settled().await, Some(1));
    assert_eq!(h.navigator.state().current_chapter(), 1);
}

#[tokio::test(start_paused = true)]
async fn request_for_the_settled_chapter_is_dropped() {
    let h = harness(6);
    assert!(h.navigator.request_go_to(0).is_none());
    assert!(!h.navigator.state().is_transitioning());
}

#[tokio::test(start_paused = true)]
async fn out_of_range_target_is_clamped() {
    let h = harness(6);
    let handle = h.navigator.request_go_to(42).expect("accepted");
    assert_eq!(handle.to(), 5);
    assert_eq!(handle.settled().await, Some(5));
}

#[tokio::test(start_paused = true)]
async fn current_chapter_only_changes_at_page_completion() {
    let h = harness(6);
    h.navigator.enter().await;
    let handle = h.navigator.request_go_to(1).expect("accepted");

    tokio::time::sleep(Duration::from_millis(1799)).await;
    assert!(h.navigator.state().is_transitioning());
    assert_eq!(h.navigator.state().current_chapter(), 0);
    assert!(h.stage.with_class(class::ACTIVE).is_empty());

    assert_eq!(handle.settled().await, Some(1));
    assert!(!h.navigator.state().is_transitioning());
}

#[tokio::test(start_paused = true)]
async fn outgoing_hide_precedes_page_and_reveal_follows_it() {
    let h = harness(6);
    h.navigator.enter().await;
    tokio::time::sleep(Duration::from_secs(3)).await;
    h.stage.clear_events();

    let handle = h.navigator.request_go_to(2).expect("accepted");
    handle.settled().await;

    let container = ElementId::container();
    let deactivated = h
        .stage
        .position(|e| e.is_class_change(&ElementId::chapter(0), class::ACTIVE, false))
        .unwrap();
    let page_started = h.stage.position(|e| e.is_tween_start(&container)).unwrap();
    let page_done = h.stage.position(|e| e.is_tween_completion(&container)).unwrap();
    let reveal = h
        .stage
        .position(|e| e.is_tween_start(&ElementId::chapter_title(2)))
        .unwrap();
    let activated = h
        .stage
        .position(|e| e.is_class_change(&ElementId::chapter(2), class::ACTIVE, true))
        .unwrap();

    assert!(deactivated < page_started);
    assert!(page_done < activated);
    assert!(page_done < reveal);
}

#[tokio::test(start_paused = true)]
async fn incoming_text_is_posed_hidden_before_the_reveal() {
    let h = harness(6);
    let handle = h.navigator.request_go_to(1).expect("accepted");

    let title = ElementId::chapter_title(1);
    assert_eq!(h.stage.value(&title, PropertyKind::Opacity), Some(0.0));
    assert_eq!(h.stage.value(&title, PropertyKind::Y), Some(100.0));
    assert_eq!(
        h.stage.value(&ElementId::chapter_description(1), PropertyKind::Opacity),
        Some(0.0)
    );

    handle.settled().await;
    tokio::time::sleep(Duration::from_secs(3)).await;
    assert_eq!(h.stage.value(&title, PropertyKind::Opacity), Some(1.0));
    assert_eq!(
        h.stage.value(&ElementId::chapter_description(1), PropertyKind::Opacity),
        Some(0.8)
    );
}

#[tokio::test(start_paused = true)]
async fn progress_and_accent_follow_the_target() {
    let h = harness(6);
    let handle = h.navigator.request_go_to(3).expect("accepted");
    handle.settled().await;
    tokio::time::sleep(Duration::from_millis(10)).await;

    assert_eq!(
        h.stage.value(&ElementId::progress(), PropertyKind::WidthPercent),
        Some(60.0)
    );
    assert_eq!(
        h.stage.property(&ElementId::root(), PropertyKind::AccentColor),
        Some(maru_core::Property::AccentColor(ACCENTS[3].into()))
    );
}

#[tokio::test(start_paused = true)]
async fn progress_failure_does_not_block_accent_or_commit() {
    let h = harness(6);
    h.engine.reject(ElementId::progress());

    let handle = h.navigator.request_go_to(5).expect("accepted");
    assert_eq!(handle.settled().await, Some(5));
    tokio::time::sleep(Duration::from_millis(10)).await;

    assert!(
        h.stage
            .position(|e| matches!(e, StageEvent::TweenFailed { target } if *target == ElementId::progress()))
            .is_some()
    );
    assert_eq!(
        h.stage.property(&ElementId::root(), PropertyKind::AccentColor),
        Some(maru_core::Property::AccentColor(ACCENTS[5].into()))
    );
}

#[tokio::test(start_paused = true)]
async fn failed_page_translation_still_settles() {
    let h = harness(3);
    h.engine.reject(ElementId::container());

    let handle = h.navigator.request_go_to(1).expect("accepted");
    assert_eq!(handle.settled().await, Some(1));
    assert_eq!(h.navigator.state().phase(), NavigationPhase::Idle(1));
    assert!(h.navigator.request_go_to(2).is_some());
}

#[tokio::test(start_paused = true)]
async fn distortion_pulses_and_returns_to_zero() {
    let h = harness(6);
    let filter = ElementId::distortion();
    let handle = h.navigator.request_go_to(1).expect("accepted");

    tokio::time::sleep(Duration::from_millis(1001)).await;
    assert_eq!(h.stage.value(&filter, PropertyKind::DisplacementScale), Some(300.0));

    handle.settled().await;
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(h.stage.value(&filter, PropertyKind::DisplacementScale), Some(0.0));
}

#[tokio::test(start_paused = true)]
async fn ambient_sound_follows_the_settled_chapter() {
    let h = harness(6);
    h.navigator.enter().await;
    assert!(h.audio.playing().is_empty());

    assert!(h.navigator.sound().toggle(0).await);
    assert_eq!(h.audio.playing(), vec![SoundSource::new("audio/city-0.mp3")]);

    let handle = h.navigator.request_go_to(1).expect("accepted");
    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert_eq!(h.audio.playing(), vec![SoundSource::new("audio/city-0.mp3")]);

    handle.settled().await;
    assert_eq!(h.audio.playing(), vec![SoundSource::new("audio/city-1.mp3")]);
}

#[tokio::test(start_paused = true)]
async fn subscribers_see_both_phases() {
    let h = harness(4);
    let mut rx = h.navigator.subscribe();

    let handle = h.navigator.request_go_to(2).expect("accepted");
    rx.changed().await.unwrap();
    assert_eq!(
        rx.borrow_and_update().phase(),
        NavigationPhase::Transitioning { from: 0, to: 2 }
    );

    handle.settled().await;
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().phase(), NavigationPhase::Idle(2));
}

#[tokio::test(start_paused = true)]
async fn single_chapter_story_never_transitions() {
    let h = harness(1);
    h.navigator.enter().await;
    assert!(h.navigator.request_go_to(1).is_none());
    assert_eq!(
        h.stage.value(&ElementId::progress(), PropertyKind::WidthPercent),
        Some(0.0)
    );
    assert!(h.stage.has_class(&ElementId::chapter(0), class::ACTIVE));
}
