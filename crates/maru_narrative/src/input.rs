//! Input normalization.
//!
//! Turns wheel, keyboard and timeline events into navigation requests. The
//! router checks boundaries before dispatching, so the navigator only ever
//! sees in-range targets from here.

use crate::{InputConfig, Navigator, TransitionHandle};
use maru_core::{ElementId, InputEvent, Key};
use maru_interface::Presentation;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{debug, instrument};

/// Why an input event did not start a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum IgnoreReason {
    /// Wheel delta at or below the threshold
    BelowThreshold,
    /// Wheel step inside the cooldown window
    CoolingDown,
    /// A transition is already in flight
    Transitioning,
    /// Step would leave the chapter range
    AtBoundary,
    /// Timeline click resolved to the settled chapter
    SameChapter,
    /// Timeline has no measurable width
    NoTimeline,
    /// Event is not a navigation gesture
    NotNavigation,
}

/// Result of routing one event.
#[derive(Debug)]
pub enum RouteOutcome {
    /// A transition was started
    Dispatched(TransitionHandle),
    /// Nothing happened
    Ignored(IgnoreReason),
}

impl RouteOutcome {
    /// Whether a transition was started.
    pub fn is_dispatched(&self) -> bool {
        matches!(self, Self::Dispatched(_))
    }

    /// The reason the event was dropped, if it was.
    pub fn ignored(&self) -> Option<IgnoreReason> {
        match self {
            Self::Dispatched(_) => None,
            Self::Ignored(reason) => Some(*reason),
        }
    }

    /// Take the transition handle, if one was started.
    pub fn into_handle(self) -> Option<TransitionHandle> {
        match self {
            Self::Dispatched(handle) => Some(handle),
            Self::Ignored(_) => None,
        }
    }
}

/// Chapter index for a click at fraction `pct` of the timeline.
///
/// `pct` is clamped to `[0, 1]` and the result is `round(pct * (n - 1))`.
///
/// ```
/// use maru_narrative::timeline_index;
///
/// assert_eq!(timeline_index(0.5, 6), 3);
/// assert_eq!(timeline_index(1.7, 6), 5);
/// assert_eq!(timeline_index(0.9, 1), 0);
/// ```
pub fn timeline_index(pct: f64, chapter_count: usize) -> usize {
    if chapter_count < 2 || pct.is_nan() {
        return 0;
    }
    let last = (chapter_count - 1) as f64;
    (pct.clamp(0.0, 1.0) * last).round() as usize
}

/// Routes navigation gestures to the navigator.
///
/// Wheel input has its own cooldown on top of the navigator's in-flight
/// guard. Keyboard and timeline input are gated by the guard alone.
pub struct InputRouter {
    navigator: Navigator,
    stage: Arc<dyn Presentation>,
    config: InputConfig,
    last_wheel: Option<Instant>,
}

impl std::fmt::Debug for InputRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputRouter")
            .field("navigator", &self.navigator)
            .field("config", &self.config)
            .field("last_wheel", &self.last_wheel)
            .finish()
    }
}

impl InputRouter {
    /// Create a router with no cooldown running.
    pub fn new(navigator: Navigator, stage: Arc<dyn Presentation>, config: InputConfig) -> Self {
        Self {
            navigator,
            stage,
            config,
            last_wheel: None,
        }
    }

    /// When the last accepted wheel step fired.
    pub fn last_wheel(&self) -> Option<Instant> {
        self.last_wheel
    }

    /// Route one event.
    #[instrument(skip(self), level = "debug")]
    pub fn route(&mut self, event: &InputEvent) -> RouteOutcome {
        let outcome = match event {
            InputEvent::Wheel { delta_y } => self.wheel(*delta_y),
            InputEvent::Key(key) => self.key(*key),
            InputEvent::TimelineClick { client_x } => self.timeline_click(*client_x),
            _ => RouteOutcome::Ignored(IgnoreReason::NotNavigation),
        };
        if let Some(reason) = outcome.ignored() {
            debug!(%reason, "Input ignored");
        }
        outcome
    }

    fn wheel(&mut self, delta_y: f64) -> RouteOutcome {
        if delta_y.abs() <= self.config.wheel_threshold {
            return RouteOutcome::Ignored(IgnoreReason::BelowThreshold);
        }

        let now = Instant::now();
        let cooling = self
            .last_wheel
            .is_some_and(|last| now.duration_since(last) < self.config.wheel_cooldown());
        if cooling {
            return RouteOutcome::Ignored(IgnoreReason::CoolingDown);
        }

        let outcome = self.step(delta_y > 0.0);
        if outcome.is_dispatched() {
            self.last_wheel = Some(now);
        }
        outcome
    }

    fn key(&self, key: Key) -> RouteOutcome {
        match key {
            Key::ArrowRight => self.step(true),
            Key::ArrowLeft => self.step(false),
            Key::Enter | Key::Escape => RouteOutcome::Ignored(IgnoreReason::NotNavigation),
        }
    }

    fn step(&self, forward: bool) -> RouteOutcome {
        let state = self.navigator.state();
        if state.is_transitioning() {
            return RouteOutcome::Ignored(IgnoreReason::Transitioning);
        }

        let current = state.current_chapter();
        let target = if forward {
            if !state.has_next() {
                return RouteOutcome::Ignored(IgnoreReason::AtBoundary);
            }
            current + 1
        } else {
            if !state.has_previous() {
                return RouteOutcome::Ignored(IgnoreReason::AtBoundary);
            }
            current - 1
        };
        self.dispatch(target)
    }

    fn timeline_click(&self, client_x: f64) -> RouteOutcome {
        let Some(rect) = self
            .stage
            .measure(&ElementId::timeline())
            .filter(|rect| rect.width > 0.0)
        else {
            return RouteOutcome::Ignored(IgnoreReason::NoTimeline);
        };

        let state = self.navigator.state();
        if state.is_transitioning() {
            return RouteOutcome::Ignored(IgnoreReason::Transitioning);
        }

        let pct = (client_x - rect.left) / rect.width;
        let target = timeline_index(pct, state.chapter_count());
        if target == state.current_chapter() {
            return RouteOutcome::Ignored(IgnoreReason::SameChapter);
        }
        self.dispatch(target)
    }

    fn dispatch(&self, target: usize) -> RouteOutcome {
        match self.navigator.request_go_to(target) {
            Some(handle) => RouteOutcome::Dispatched(handle),
            None => RouteOutcome::Ignored(IgnoreReason::Transitioning),
        }
    }
}
