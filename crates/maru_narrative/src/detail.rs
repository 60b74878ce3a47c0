//! Landmark detail popover.

use crate::DetailConfig;
use maru_core::{Ease, ElementId, Landmark, Property, PropertyKind, Tween, class};
use maru_interface::{AnimationEngine, Presentation};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Opens and closes the detail popover for a landmark.
#[derive(Clone)]
pub struct DetailView {
    engine: Arc<dyn AnimationEngine>,
    stage: Arc<dyn Presentation>,
    config: DetailConfig,
}

impl std::fmt::Debug for DetailView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailView")
            .field("open", &self.is_open())
            .field("config", &self.config)
            .finish()
    }
}

impl DetailView {
    /// Create a closed popover.
    pub fn new(
        engine: Arc<dyn AnimationEngine>,
        stage: Arc<dyn Presentation>,
        config: DetailConfig,
    ) -> Self {
        Self {
            engine,
            stage,
            config,
        }
    }

    /// Whether the popover is showing.
    pub fn is_open(&self) -> bool {
        self.stage.has_class(&ElementId::detail_view(), class::VISIBLE)
    }

    /// Fill the popover with the landmark and scale it in.
    pub fn open(&self, landmark: &Landmark) {
        debug!(title = %landmark.title(), "Opening landmark detail");
        self.stage.set_text(&ElementId::detail_icon(), landmark.icon());
        self.stage.set_text(&ElementId::detail_title(), landmark.title());
        self.stage
            .set_text(&ElementId::detail_description(), landmark.description());
        self.stage
            .set_class(&ElementId::detail_view(), class::VISIBLE, true);

        // Fire and forget: a half-finished scale-in is still readable.
        let _ = self.engine.tween(
            Tween::new(
                ElementId::detail_content(),
                vec![Property::Scale(1.0), Property::Opacity(1.0)],
                self.config.open(),
            )
            .with_from(vec![Property::Scale(0.5), Property::Opacity(0.0)])
            .with_ease(Ease::BackOut),
        );
    }

    /// Scale the popover out, then hide it and reset its styles.
    ///
    /// Returns `None` when the popover is not open. Must be called from
    /// within a Tokio runtime.
    pub fn close(&self) -> Option<JoinHandle<()>> {
        if !self.is_open() {
            return None;
        }

        let completion = self.engine.tween(
            Tween::new(
                ElementId::detail_content(),
                vec![Property::Scale(0.9), Property::Opacity(0.0)],
                self.config.close(),
            )
            .with_ease(Ease::Power3In),
        );

        let stage = Arc::clone(&self.stage);
        Some(tokio::spawn(async move {
            if let Err(e) = completion.await {
                warn!(error = %e, "Detail scale-out did not complete");
            }
            let content = ElementId::detail_content();
            stage.set_class(&ElementId::detail_view(), class::VISIBLE, false);
            stage.clear(&content, PropertyKind::Scale);
            stage.clear(&content, PropertyKind::Opacity);
            debug!("Landmark detail closed");
        }))
    }
}
