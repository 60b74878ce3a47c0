//! Presentation layer capability.

use maru_core::{ElementId, Property, PropertyKind, Rect, Viewport};

/// Synchronous view of the rendered page.
///
/// Lookups of unknown elements are not errors: `measure` returns `None` and
/// mutations are ignored. Implementations use interior mutability because the
/// navigator shares one presentation across its channel tasks.
pub trait Presentation: Send + Sync {
    /// Current viewport size.
    fn viewport(&self) -> Viewport;

    /// Bounding rectangle of an element, relative to the viewport.
    fn measure(&self, id: &ElementId) -> Option<Rect>;

    /// Set a style property.
    fn apply(&self, id: &ElementId, property: &Property);

    /// Remove a style override so the stylesheet value applies again.
    fn clear(&self, id: &ElementId, kind: PropertyKind);

    /// Add or remove a class.
    fn set_class(&self, id: &ElementId, class: &str, on: bool);

    /// Whether the element currently carries a class.
    fn has_class(&self, id: &ElementId, class: &str) -> bool;

    /// Replace the element's text content.
    fn set_text(&self, id: &ElementId, text: &str);

    /// Set an attribute such as `aria-pressed` or `title`.
    fn set_attribute(&self, id: &ElementId, name: &str, value: &str);
}
