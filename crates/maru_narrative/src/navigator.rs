//! Chapter navigation state machine.
//!
//! The navigator owns the only mutable navigation state in the system and
//! publishes it through a `watch` channel. A transition request is checked
//! and applied inside a single synchronous `send_if_modified` call, before
//! any animation is scheduled, so at most one transition is ever in flight.
//!
//! Once a request is accepted four channels start independently:
//!
//! 1. The outgoing chapter loses its active flag and the incoming text is
//!    posed out of view
//! 2. The distortion filter pulses up to its peak and decays back to zero
//! 3. The progress bar and accent color move to the target chapter
//! 4. The chapter strip translates to the target page
//!
//! Only the page translation gates the commit. When it completes the state
//! settles on the target, the target is activated, its text is revealed and
//! the ambient sound follows.

use crate::{ChapterRegistry, NavigationState, SoundController, TransitionConfig};
use maru_core::{Ease, ElementId, Property, Stagger, Tween, class};
use maru_interface::{AnimationEngine, Completion, Presentation};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Pose the incoming title glyphs start from.
fn title_hidden_pose() -> Vec<Property> {
    vec![
        Property::Y(100.0),
        Property::Opacity(0.0),
        Property::RotateZ(10.0),
        Property::SkewX(20.0),
        Property::Blur(10.0),
    ]
}

fn title_shown_pose() -> Vec<Property> {
    vec![
        Property::Y(0.0),
        Property::Opacity(1.0),
        Property::RotateZ(0.0),
        Property::SkewX(0.0),
        Property::Blur(0.0),
    ]
}

/// Pose the incoming description words start from.
fn description_hidden_pose() -> Vec<Property> {
    vec![Property::Y(20.0), Property::Opacity(0.0)]
}

fn description_shown_pose() -> Vec<Property> {
    vec![Property::Y(0.0), Property::Opacity(0.8)]
}

/// An accepted transition.
///
/// Dropping the handle does not cancel anything; transitions always run to
/// completion.
#[derive(Debug)]
pub struct TransitionHandle {
    from: usize,
    to: usize,
    settled: JoinHandle<usize>,
}

impl TransitionHandle {
    /// Chapter being left.
    pub fn from(&self) -> usize {
        self.from
    }

    /// Chapter being entered.
    pub fn to(&self) -> usize {
        self.to
    }

    /// Wait until the transition commits.
    ///
    /// Returns the settled chapter, or `None` if the settle task was torn
    /// down with the runtime.
    pub async fn settled(self) -> Option<usize> {
        match self.settled.await {
            Ok(index) => Some(index),
            Err(e) => {
                warn!(error = %e, to = self.to, "Transition task did not finish");
                None
            }
        }
    }
}

struct NavigatorInner {
    registry: Arc<ChapterRegistry>,
    timings: TransitionConfig,
    engine: Arc<dyn AnimationEngine>,
    stage: Arc<dyn Presentation>,
    sound: SoundController,
    state: watch::Sender<NavigationState>,
}

/// Serializes chapter transitions and sequences their channels.
///
/// Cheap to clone; clones share the same state.
#[derive(Clone)]
pub struct Navigator {
    inner: Arc<NavigatorInner>,
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("state", &*self.inner.state.borrow())
            .field("chapters", &self.inner.registry.len())
            .finish()
    }
}

impl Navigator {
    /// Create a navigator settled on the first chapter.
    ///
    /// Nothing is drawn until [`Navigator::enter`] runs.
    pub fn new(
        registry: Arc<ChapterRegistry>,
        timings: TransitionConfig,
        engine: Arc<dyn AnimationEngine>,
        stage: Arc<dyn Presentation>,
        sound: SoundController,
    ) -> Self {
        let (state, _) = watch::channel(NavigationState::new(registry.len()));
        Self {
            inner: Arc::new(NavigatorInner {
                registry,
                timings,
                engine,
                stage,
                sound,
                state,
            }),
        }
    }

    /// Receive every state change from now on.
    pub fn subscribe(&self) -> watch::Receiver<NavigationState> {
        self.inner.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> NavigationState {
        self.inner.state.borrow().clone()
    }

    /// The chapters being navigated.
    pub fn registry(&self) -> &Arc<ChapterRegistry> {
        &self.inner.registry
    }

    /// The ambient sound controller the navigator drives.
    pub fn sound(&self) -> &SoundController {
        &self.inner.sound
    }

    /// Activate and reveal the first chapter.
    ///
    /// This is the opening entrance, not a transition: the state stays
    /// `Idle(0)` throughout.
    #[instrument(skip(self))]
    pub async fn enter(&self) {
        let inner = &self.inner;
        let current = inner.state.borrow().current_chapter();
        inner.stage.apply(
            &ElementId::root(),
            &Property::AccentColor(inner.registry.clamped(current).accent_color().clone()),
        );
        inner.engine.set(
            &ElementId::progress(),
            &[Property::WidthPercent(inner.registry.progress_percent(current))],
        );
        inner.pose_incoming(current);
        inner.stage.set_class(&ElementId::chapter(current), class::ACTIVE, true);
        inner.reveal_text(current);
        inner.sound.play_for(current).await;
        info!(chapter = current, "Entered story");
    }

    /// Start a transition to `target`.
    ///
    /// Out-of-range targets are clamped. Returns `None` without side effects
    /// when a transition is already in flight or `target` is the settled
    /// chapter.
    ///
    /// Must be called from within a Tokio runtime.
    #[instrument(skip(self))]
    pub fn request_go_to(&self, target: usize) -> Option<TransitionHandle> {
        let inner = &self.inner;
        let to = inner.registry.clamp(target);
        if to != target {
            warn!(requested = target, clamped = to, "Navigation target out of range");
        }

        let mut accepted = None;
        inner.state.send_if_modified(|state| {
            accepted = state.begin(to, Instant::now());
            accepted.is_some()
        });
        let Some(from) = accepted else {
            debug!(to, "Navigation request dropped");
            return None;
        };

        info!(from, to, "Chapter transition started");

        inner.deactivate_all();
        inner.pose_incoming(to);
        inner.pulse_distortion();
        inner.sweep_progress(to);
        inner.fade_accent(to);
        let settled = Arc::clone(inner).translate_page(to);

        Some(TransitionHandle { from, to, settled })
    }
}

impl NavigatorInner {
    fn deactivate_all(&self) {
        for chapter in self.registry.iter() {
            self.stage.set_class(&chapter.element(), class::ACTIVE, false);
        }
    }

    fn pose_incoming(&self, index: usize) {
        let chapter = self.registry.clamped(index);
        self.engine
            .set(&chapter.title_element(), &title_hidden_pose());
        self.engine
            .set(&chapter.description_element(), &description_hidden_pose());
    }

    fn pulse_distortion(&self) {
        let rise = self.engine.tween(
            Tween::new(
                ElementId::distortion(),
                vec![Property::DisplacementScale(self.timings.distortion_peak)],
                self.timings.distortion_rise(),
            )
            .with_ease(Ease::Power2InOut),
        );

        let engine = Arc::clone(&self.engine);
        let decay = self.timings.distortion_decay();
        tokio::spawn(async move {
            if let Err(e) = rise.await {
                warn!(error = %e, "Distortion rise did not complete");
            }
            let fall = engine.tween(
                Tween::new(
                    ElementId::distortion(),
                    vec![Property::DisplacementScale(0.0)],
                    decay,
                )
                .with_ease(Ease::Power2Out),
            );
            if let Err(e) = fall.await {
                warn!(error = %e, "Distortion decay did not complete");
            }
        });
    }

    fn sweep_progress(&self, to: usize) {
        let completion = self.engine.tween(
            Tween::new(
                ElementId::progress(),
                vec![Property::WidthPercent(self.registry.progress_percent(to))],
                self.timings.page(),
            )
            .with_ease(Ease::Power4InOut),
        );
        spawn_watch(completion, "progress");
    }

    fn fade_accent(&self, to: usize) {
        let accent = self.registry.clamped(to).accent_color().clone();
        let completion = self.engine.tween(
            Tween::new(
                ElementId::root(),
                vec![Property::AccentColor(accent)],
                self.timings.accent(),
            )
            .with_ease(Ease::Power2Out),
        );
        spawn_watch(completion, "accent");
    }

    fn translate_page(self: Arc<Self>, to: usize) -> JoinHandle<usize> {
        let offset = -(to as f64) * self.stage.viewport().width;
        let page = self.engine.tween(
            Tween::new(
                ElementId::container(),
                vec![Property::X(offset)],
                self.timings.page(),
            )
            .with_ease(Ease::Power4InOut),
        );

        tokio::spawn(async move {
            if let Err(e) = page.await {
                warn!(error = %e, to, "Page translation failed, settling anyway");
            }
            self.settle(to).await;
            to
        })
    }

    async fn settle(&self, to: usize) {
        self.state.send_modify(|state| state.commit(to));
        self.stage.set_class(&ElementId::chapter(to), class::ACTIVE, true);
        self.reveal_text(to);
        info!(chapter = to, "Chapter transition settled");
        self.sound.play_for(to).await;
    }

    fn reveal_text(&self, index: usize) {
        let chapter = self.registry.clamped(index);
        let t = &self.timings;

        let title = self.engine.tween(
            Tween::new(chapter.title_element(), title_shown_pose(), t.title_reveal())
                .with_ease(Ease::BackOut)
                .with_stagger(Stagger::new(t.title_stagger(), chapter.title_glyphs())),
        );
        spawn_watch(title, "title reveal");

        let description = self.engine.tween(
            Tween::new(
                chapter.description_element(),
                description_shown_pose(),
                t.description_reveal(),
            )
            .with_ease(Ease::Power2Out)
            .with_delay(t.description_delay())
            .with_stagger(Stagger::new(
                t.description_stagger(),
                chapter.description_words(),
            )),
        );
        spawn_watch(description, "description reveal");
    }
}

/// Log a channel failure without blocking anything on it.
fn spawn_watch(completion: Completion, channel: &'static str) {
    tokio::spawn(async move {
        let element = completion.target().clone();
        if let Err(e) = completion.await {
            warn!(channel, %element, error = %e, "Animation channel did not complete");
        }
    });
}
