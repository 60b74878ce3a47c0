//! Stage event log.

use maru_core::{ElementId, Property, PropertyKind};

/// One observable change on the stage, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum StageEvent {
    /// A style property was set
    Applied {
        /// Element
        id: ElementId,
        /// New value
        property: Property,
    },
    /// A style override was removed
    Cleared {
        /// Element
        id: ElementId,
        /// Property removed
        kind: PropertyKind,
    },
    /// A class was added or removed
    ClassChanged {
        /// Element
        id: ElementId,
        /// Class name
        class: String,
        /// Whether the class was added
        on: bool,
    },
    /// Text content was replaced
    TextSet {
        /// Element
        id: ElementId,
        /// New text
        text: String,
    },
    /// An attribute was set
    AttributeSet {
        /// Element
        id: ElementId,
        /// Attribute name
        name: String,
        /// New value
        value: String,
    },
    /// A tween was scheduled
    TweenStarted {
        /// Element animated
        target: ElementId,
        /// End values
        to: Vec<Property>,
    },
    /// A tween reached its end values
    TweenCompleted {
        /// Element animated
        target: ElementId,
    },
    /// A tween was rejected by the engine
    TweenFailed {
        /// Element animated
        target: ElementId,
    },
}

impl StageEvent {
    /// Whether this event starts a tween on `target`.
    pub fn is_tween_start(&self, target: &ElementId) -> bool {
        matches!(self, Self::TweenStarted { target: t, .. } if t == target)
    }

    /// Whether this event completes a tween on `target`.
    pub fn is_tween_completion(&self, target: &ElementId) -> bool {
        matches!(self, Self::TweenCompleted { target: t } if t == target)
    }

    /// Whether this event toggles `class` on `id`.
    pub fn is_class_change(&self, id: &ElementId, class: &str, on: bool) -> bool {
        matches!(
            self,
            Self::ClassChanged { id: i, class: c, on: o } if i == id && c == class && *o == on
        )
    }
}
