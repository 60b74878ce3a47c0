//! Guided tour state machine.

use crate::card_position;
use maru_core::{ElementId, Key, Property, PropertyKind, Rect, TourStep, TourTarget, class};
use maru_error::{ContentError, ContentErrorKind};
use maru_interface::Presentation;
use maru_narrative::{NavigationState, TourConfig};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

/// Where the tour is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TourState {
    /// Overlay hidden, no geometry held
    #[default]
    Inactive,
    /// Showing the step at this index
    Active(usize),
}

impl TourState {
    /// Whether the overlay is showing.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    /// Current step, if active.
    pub fn step(&self) -> Option<usize> {
        match self {
            Self::Active(step) => Some(*step),
            Self::Inactive => None,
        }
    }
}

/// Overlay that walks the user through the experience one step at a time.
///
/// The engine reads navigation state to resolve chapter-relative targets but
/// never changes it.
pub struct TourEngine {
    steps: Vec<TourStep>,
    stage: Arc<dyn Presentation>,
    navigation: watch::Receiver<NavigationState>,
    config: TourConfig,
    state: TourState,
    pending_clear: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for TourEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TourEngine")
            .field("steps", &self.steps.len())
            .field("state", &self.state)
            .field("config", &self.config)
            .finish()
    }
}

impl TourEngine {
    /// Create an inactive tour.
    ///
    /// # Errors
    ///
    /// Returns `ContentErrorKind::EmptyTour` if `steps` is empty.
    pub fn new(
        steps: Vec<TourStep>,
        stage: Arc<dyn Presentation>,
        navigation: watch::Receiver<NavigationState>,
        config: TourConfig,
    ) -> Result<Self, ContentError> {
        if steps.is_empty() {
            return Err(ContentError::new(ContentErrorKind::EmptyTour));
        }
        Ok(Self {
            steps,
            stage,
            navigation,
            config,
            state: TourState::Inactive,
            pending_clear: None,
        })
    }

    /// The tour script.
    pub fn steps(&self) -> &[TourStep] {
        &self.steps
    }

    /// Current state.
    pub fn state(&self) -> TourState {
        self.state
    }

    /// Whether the overlay is showing.
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Current step, if active.
    pub fn current_step(&self) -> Option<usize> {
        self.state.step()
    }

    /// Show the overlay at the first step.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        if let Some(pending) = self.pending_clear.take() {
            pending.abort();
        }
        self.state = TourState::Active(0);
        self.set_layers(true);
        info!(steps = self.steps.len(), "Tour started");
        self.render(0);
    }

    /// Hide the overlay.
    ///
    /// Spotlight geometry is cleared once the exit transition has run, so a
    /// later start does not inherit it. Must be called from within a Tokio
    /// runtime.
    #[instrument(skip(self))]
    pub fn end(&mut self) {
        if !self.is_active() {
            return;
        }
        self.state = TourState::Inactive;
        self.set_layers(false);
        info!("Tour ended");

        let stage = Arc::clone(&self.stage);
        let delay = self.config.exit_delay();
        self.pending_clear = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let spotlight = ElementId::tour_spotlight();
            for kind in [
                PropertyKind::Top,
                PropertyKind::Left,
                PropertyKind::Width,
                PropertyKind::Height,
            ] {
                stage.clear(&spotlight, kind);
            }
            debug!("Spotlight geometry cleared");
        }));
    }

    /// Advance one step; past the last step the tour ends.
    pub fn next(&mut self) {
        let Some(step) = self.current_step() else { return };
        if step + 1 < self.steps.len() {
            self.state = TourState::Active(step + 1);
            self.render(step + 1);
        } else {
            self.end();
        }
    }

    /// Go back one step; no-op on the first step.
    pub fn prev(&mut self) {
        let Some(step) = self.current_step() else { return };
        if step > 0 {
            self.state = TourState::Active(step - 1);
            self.render(step - 1);
        }
    }

    /// React to a key press. Returns `true` when the tour consumed it.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if !self.is_active() {
            return false;
        }
        match key {
            Key::ArrowRight | Key::Enter => self.next(),
            Key::ArrowLeft => self.prev(),
            Key::Escape => self.end(),
        }
        true
    }

    /// Reposition after the viewport changed size.
    pub fn on_viewport_change(&self) {
        if let Some(step) = self.current_step() {
            self.update_position(step);
        }
    }

    /// Reposition after anything scrolled.
    pub fn on_scroll(&self) {
        if let Some(step) = self.current_step() {
            self.update_position(step);
        }
    }

    fn render(&self, index: usize) {
        self.update_content(index);
        self.update_position(index);
    }

    fn set_layers(&self, on: bool) {
        for id in [
            ElementId::tour_overlay(),
            ElementId::tour_spotlight(),
            ElementId::tour_card(),
        ] {
            self.stage.set_class(&id, class::ACTIVE, on);
        }
    }

    /// Fill the card with the step's text and update the controls.
    pub fn update_content(&self, index: usize) {
        let Some(step) = self.steps.get(index) else { return };
        let last = self.steps.len() - 1;

        self.stage.set_text(&ElementId::tour_title(), step.title());
        self.stage.set_text(&ElementId::tour_text(), step.text());
        self.stage
            .set_class(&ElementId::tour_prev(), class::HIDDEN, index == 0);
        self.stage.set_text(
            &ElementId::tour_next(),
            if index == last { "Finish" } else { "Next" },
        );
        for dot in 0..self.steps.len() {
            self.stage
                .set_class(&ElementId::tour_dot(dot), class::ACTIVE, dot == index);
        }
    }

    /// Place the spotlight and the card for a step.
    pub fn update_position(&self, index: usize) {
        let Some(step) = self.steps.get(index) else { return };
        let viewport = self.stage.viewport();
        let card = ElementId::tour_card();
        let card_size = self
            .stage
            .measure(&card)
            .map(|rect| rect.size())
            .unwrap_or_default();
        let spotlight = ElementId::tour_spotlight();

        let Some(target) = step.target().as_ref().and_then(|t| self.resolve(t)) else {
            debug!(step = index, "No target, centering card");
            self.stage.apply(&spotlight, &Property::Opacity(0.0));
            let at = viewport.center(card_size);
            self.stage.apply(&card, &Property::Top(at.top));
            self.stage.apply(&card, &Property::Left(at.left));
            return;
        };

        let lit = target.expand(self.config.spotlight_padding);
        self.stage.apply(&spotlight, &Property::Opacity(1.0));
        self.stage.apply(&spotlight, &Property::Top(lit.top));
        self.stage.apply(&spotlight, &Property::Left(lit.left));
        self.stage.apply(&spotlight, &Property::Width(lit.width));
        self.stage.apply(&spotlight, &Property::Height(lit.height));

        let at = card_position(target, card_size, viewport, *step.placement(), &self.config);
        debug!(step = index, placement = %step.placement(), left = at.left, top = at.top, "Card placed");
        self.stage.apply(&card, &Property::Top(at.top));
        self.stage.apply(&card, &Property::Left(at.left));
    }

    /// Live rectangle of a step target, if it can be found right now.
    pub fn resolve(&self, target: &TourTarget) -> Option<Rect> {
        let id = match target {
            TourTarget::Canvas => ElementId::canvas(),
            TourTarget::Timeline => ElementId::timeline(),
            TourTarget::SoundToggle => ElementId::sound_toggle(),
            TourTarget::Element(id) => id.clone(),
            TourTarget::ActiveChapterCard => {
                ElementId::chapter_card(self.navigation.borrow().active_chapter()?)
            }
            TourTarget::ActiveChapterLandmark => {
                ElementId::landmark(self.navigation.borrow().active_chapter()?, 0)
            }
        };
        self.stage.measure(&id)
    }
}
