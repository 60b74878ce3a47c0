//! The assembled experience: navigation, tour, popover and sound behind one
//! input entry point.

use maru_core::{ElementId, InputEvent, Key, Property};
use maru_error::MaruResult;
use maru_interface::{AmbientAudio, AnimationEngine, Presentation};
use maru_narrative::{
    ChapterRegistry, DetailView, InputRouter, MaruConfig, NavigationState, Navigator,
    RouteOutcome, SoundController, StoryContent,
};
use maru_tour::TourEngine;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// The three capabilities the experience runs against.
#[derive(Clone)]
pub struct Backends {
    /// Tween scheduler
    pub engine: Arc<dyn AnimationEngine>,
    /// Rendered page
    pub stage: Arc<dyn Presentation>,
    /// Ambient loops
    pub audio: Arc<dyn AmbientAudio>,
}

impl Backends {
    /// Bundle backends.
    pub fn new(
        engine: Arc<dyn AnimationEngine>,
        stage: Arc<dyn Presentation>,
        audio: Arc<dyn AmbientAudio>,
    ) -> Self {
        Self {
            engine,
            stage,
            audio,
        }
    }
}

/// Which part of the experience consumed an event.
#[derive(Debug)]
pub enum Handled {
    /// The guided tour
    Tour,
    /// The detail popover closed
    DetailClosed,
    /// A landmark popover opened
    DetailOpened,
    /// Sound was switched on or off
    Sound {
        /// New state
        enabled: bool,
    },
    /// Navigation input, with the router's verdict
    Route(RouteOutcome),
}

/// Everything wired together.
///
/// Events are offered in priority order: an active tour takes key presses
/// and its own dismissal, an open popover takes Escape and its dismissal,
/// then landmark activation, the sound toggle and finally navigation.
pub struct Experience {
    registry: Arc<ChapterRegistry>,
    navigator: Navigator,
    router: InputRouter,
    tour: TourEngine,
    detail: DetailView,
    engine: Arc<dyn AnimationEngine>,
    stage: Arc<dyn Presentation>,
}

impl std::fmt::Debug for Experience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Experience")
            .field("navigator", &self.navigator)
            .field("tour", &self.tour)
            .field("detail", &self.detail)
            .finish()
    }
}

impl Experience {
    /// Assemble the experience from content, configuration and backends.
    ///
    /// # Errors
    ///
    /// Returns an error if the tour script is empty.
    pub fn new(content: StoryContent, config: MaruConfig, backends: Backends) -> MaruResult<Self> {
        let (registry, tour_steps) = content.into_parts();
        let registry = Arc::new(registry);
        let Backends {
            engine,
            stage,
            audio,
        } = backends;

        let sound = SoundController::new(&registry, audio, Arc::clone(&stage));
        let navigator = Navigator::new(
            Arc::clone(&registry),
            config.transition,
            Arc::clone(&engine),
            Arc::clone(&stage),
            sound,
        );
        let router = InputRouter::new(navigator.clone(), Arc::clone(&stage), config.input);
        let tour = TourEngine::new(
            tour_steps,
            Arc::clone(&stage),
            navigator.subscribe(),
            config.tour,
        )?;
        let detail = DetailView::new(Arc::clone(&engine), Arc::clone(&stage), config.detail);

        info!(chapters = registry.len(), "Experience assembled");
        Ok(Self {
            registry,
            navigator,
            router,
            tour,
            detail,
            engine,
            stage,
        })
    }

    /// The chapters.
    pub fn registry(&self) -> &ChapterRegistry {
        &self.registry
    }

    /// The navigation state machine.
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// The guided tour.
    pub fn tour(&self) -> &TourEngine {
        &self.tour
    }

    /// The landmark popover.
    pub fn detail(&self) -> &DetailView {
        &self.detail
    }

    /// Snapshot of the navigation state.
    pub fn state(&self) -> NavigationState {
        self.navigator.state()
    }

    /// Reveal the first chapter.
    pub async fn enter(&self) {
        self.navigator.enter().await;
    }

    /// Offer one input event to the experience.
    #[instrument(skip(self), level = "debug")]
    pub async fn handle(&mut self, event: &InputEvent) -> Handled {
        if self.tour.is_active() {
            match event {
                InputEvent::Key(key) if self.tour.handle_key(*key) => return Handled::Tour,
                InputEvent::TourDismiss => {
                    self.tour.end();
                    return Handled::Tour;
                }
                _ => {}
            }
        }

        match event {
            InputEvent::Key(Key::Escape) | InputEvent::DetailDismiss
                if self.detail.is_open() =>
            {
                self.detail.close();
                Handled::DetailClosed
            }
            InputEvent::LandmarkActivate { chapter, landmark } => {
                match self.registry.landmark(*chapter, *landmark) {
                    Some(found) => {
                        self.detail.open(found);
                        Handled::DetailOpened
                    }
                    None => {
                        debug!(chapter, landmark, "No such landmark");
                        Handled::Route(self.router.route(event))
                    }
                }
            }
            InputEvent::SoundToggle => {
                let current = self.navigator.state().current_chapter();
                let enabled = self.navigator.sound().toggle(current).await;
                Handled::Sound { enabled }
            }
            _ => Handled::Route(self.router.route(event)),
        }
    }

    /// Show the guided tour from its first step.
    pub fn start_tour(&mut self) {
        self.tour.start();
    }

    /// Hide the guided tour.
    pub fn end_tour(&mut self) {
        self.tour.end();
    }

    /// Call after the presentation's viewport changed size.
    ///
    /// Keeps the settled page aligned to the new width and repositions the
    /// tour.
    pub fn resize(&self) {
        let state = self.navigator.state();
        if !state.is_transitioning() {
            let width = self.stage.viewport().width;
            self.engine.set(
                &ElementId::container(),
                &[Property::X(-(state.current_chapter() as f64) * width)],
            );
        }
        self.tour.on_viewport_change();
    }

    /// Call after anything on the page scrolled.
    pub fn scroll(&self) {
        self.tour.on_scroll();
    }
}
