//! Timer-driven animation engine.

use crate::{InMemoryPresentation, StageEvent};
use maru_core::{ElementId, Property, Tween};
use maru_error::{AnimationError, AnimationErrorKind};
use maru_interface::{AnimationEngine, Completion, Presentation};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, trace};

/// Animation engine that jumps straight to end values after the tween's
/// total time.
///
/// `from` values are applied when the tween is scheduled; `to` values when
/// the timer fires. Intermediate frames are not rendered. Under a paused
/// Tokio clock the timers advance deterministically.
#[derive(Debug, Clone)]
pub struct TimedAnimationEngine {
    stage: InMemoryPresentation,
    rejected: Arc<Mutex<HashSet<ElementId>>>,
}

impl TimedAnimationEngine {
    /// Animate elements of `stage`.
    pub fn new(stage: InMemoryPresentation) -> Self {
        Self {
            stage,
            rejected: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Make every future tween on `target` fail instead of completing.
    pub fn reject(&self, target: ElementId) {
        self.rejected.lock().insert(target);
    }

    /// Let tweens on `target` complete again.
    pub fn accept(&self, target: &ElementId) {
        self.rejected.lock().remove(target);
    }

    fn finish(stage: &InMemoryPresentation, tween: &Tween, rejected: bool) -> Result<(), AnimationError> {
        if rejected {
            stage.record(StageEvent::TweenFailed {
                target: tween.target().clone(),
            });
            return Err(AnimationError::new(AnimationErrorKind::Rejected {
                target: tween.target().to_string(),
                reason: "rejected by engine".to_string(),
            }));
        }
        for property in tween.to() {
            stage.apply(tween.target(), property);
        }
        stage.record(StageEvent::TweenCompleted {
            target: tween.target().clone(),
        });
        Ok(())
    }
}

impl AnimationEngine for TimedAnimationEngine {
    fn set(&self, target: &ElementId, properties: &[Property]) {
        for property in properties {
            self.stage.apply(target, property);
        }
    }

    fn tween(&self, tween: Tween) -> Completion {
        for property in tween.from() {
            self.stage.apply(tween.target(), property);
        }
        self.stage.record(StageEvent::TweenStarted {
            target: tween.target().clone(),
            to: tween.to().clone(),
        });

        let (signal, completion) = Completion::channel(tween.target().clone());
        let stage = self.stage.clone();
        let rejected = Arc::clone(&self.rejected);

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(tween.total()).await;
                    let rejected = rejected.lock().contains(tween.target());
                    match Self::finish(&stage, &tween, rejected) {
                        Ok(()) => signal.complete(),
                        Err(e) => signal.fail(e),
                    }
                });
            }
            Err(_) => {
                debug!(element = %tween.target(), "No runtime, completing tween immediately");
                let rejected = rejected.lock().contains(tween.target());
                match Self::finish(&stage, &tween, rejected) {
                    Ok(()) => signal.complete(),
                    Err(e) => signal.fail(e),
                }
            }
        }

        trace!(element = %completion.target(), "Tween scheduled");
        completion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maru_core::PropertyKind;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn end_values_land_after_total_time() {
        let stage = InMemoryPresentation::default();
        let engine = TimedAnimationEngine::new(stage.clone());

        let completion = engine.tween(
            Tween::new(
                ElementId::progress(),
                vec![Property::WidthPercent(60.0)],
                Duration::from_millis(1800),
            )
            .with_from(vec![Property::WidthPercent(0.0)]),
        );
        assert_eq!(stage.value(&ElementId::progress(), PropertyKind::WidthPercent), Some(0.0));

        completion.await.unwrap();
        assert_eq!(stage.value(&ElementId::progress(), PropertyKind::WidthPercent), Some(60.0));
    }

    #[tokio::test(start_paused = true)]
    async fn rejected_targets_fail() {
        let stage = InMemoryPresentation::default();
        let engine = TimedAnimationEngine::new(stage.clone());
        engine.reject(ElementId::root());

        let completion = engine.tween(Tween::new(
            ElementId::root(),
            vec![Property::AccentColor("#fff".into())],
            Duration::from_millis(10),
        ));
        assert!(completion.await.is_err());
        assert!(stage.property(&ElementId::root(), PropertyKind::AccentColor).is_none());
    }
}
