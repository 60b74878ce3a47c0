//! Navigation state published by the navigator.

use tokio::time::Instant;

/// Where the navigator is in its two-state cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationPhase {
    /// Settled on a chapter
    Idle(usize),
    /// Page translation in flight
    Transitioning {
        /// Chapter being left
        from: usize,
        /// Chapter being entered
        to: usize,
    },
}

/// Snapshot of the navigator's state.
///
/// The current chapter only changes when a transition commits, so while a
/// transition is in flight `current_chapter` still reports the chapter being
/// left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    phase: NavigationPhase,
    chapter_count: usize,
    last_transition: Option<Instant>,
}

impl NavigationState {
    /// Initial state: settled on the first chapter.
    pub fn new(chapter_count: usize) -> Self {
        Self {
            phase: NavigationPhase::Idle(0),
            chapter_count,
            last_transition: None,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> NavigationPhase {
        self.phase
    }

    /// Number of chapters being navigated.
    pub fn chapter_count(&self) -> usize {
        self.chapter_count
    }

    /// When the most recent transition started.
    pub fn last_transition(&self) -> Option<Instant> {
        self.last_transition
    }

    /// The settled chapter.
    pub fn current_chapter(&self) -> usize {
        match self.phase {
            NavigationPhase::Idle(index) => index,
            NavigationPhase::Transitioning { from, .. } => from,
        }
    }

    /// Whether a transition is in flight.
    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, NavigationPhase::Transitioning { .. })
    }

    /// The chapter carrying the active flag; none while transitioning.
    pub fn active_chapter(&self) -> Option<usize> {
        match self.phase {
            NavigationPhase::Idle(index) => Some(index),
            NavigationPhase::Transitioning { .. } => None,
        }
    }

    /// Whether a step forward stays in range.
    pub fn has_next(&self) -> bool {
        self.current_chapter() + 1 < self.chapter_count
    }

    /// Whether a step backward stays in range.
    pub fn has_previous(&self) -> bool {
        self.current_chapter() > 0
    }

    /// Move to `Transitioning` if settled on a chapter other than `to`.
    ///
    /// Returns the chapter being left, or `None` when the request is dropped.
    pub(crate) fn begin(&mut self, to: usize, now: Instant) -> Option<usize> {
        match self.phase {
            NavigationPhase::Idle(current) if current != to => {
                self.phase = NavigationPhase::Transitioning { from: current, to };
                self.last_transition = Some(now);
                Some(current)
            }
            _ => None,
        }
    }

    /// Settle on `index`.
    pub(crate) fn commit(&mut self, index: usize) {
        self.phase = NavigationPhase::Idle(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_then_commit() {
        let mut state = NavigationState::new(6);
        assert_eq!(state.begin(2, Instant::now()), Some(0));
        assert!(state.is_transitioning());
        assert_eq!(state.current_chapter(), 0);
        assert_eq!(state.active_chapter(), None);

        state.commit(2);
        assert_eq!(state.phase(), NavigationPhase::Idle(2));
        assert_eq!(state.active_chapter(), Some(2));
    }

    #[test]
    fn begin_is_refused_mid_flight_and_for_same_chapter() {
        let mut state = NavigationState::new(6);
        assert_eq!(state.begin(0, Instant::now()), None);

        state.begin(1, Instant::now());
        assert_eq!(state.begin(3, Instant::now()), None);
        assert_eq!(
            state.phase(),
            NavigationPhase::Transitioning { from: 0, to: 1 }
        );
    }

    #[test]
    fn boundaries() {
        let mut state = NavigationState::new(2);
        assert!(state.has_next());
        assert!(!state.has_previous());
        state.commit(1);
        assert!(!state.has_next());
        assert!(state.has_previous());
    }
}
