//! In-memory presentation layer.
//!
//! Elements are created on first mutation. An element is measurable only
//! once it has been placed with a base rectangle; applied `Left`, `Top`,
//! `Width` and `Height` properties override that base, and elements inside
//! the chapter strip follow the strip's `X` translation.

use crate::StageEvent;
use maru_core::{ElementId, Property, PropertyKind, Rect, Viewport};
use maru_interface::Presentation;
use parking_lot::Mutex;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;
use tracing::trace;

/// Recorded state of one element.
#[derive(Debug, Clone, Default, PartialEq, derive_getters::Getters)]
pub struct ElementState {
    /// Base rectangle before overrides; `None` means not laid out
    base: Option<Rect>,
    /// Whether the element moves with the chapter strip
    in_strip: bool,
    /// Current style overrides
    properties: BTreeMap<PropertyKind, Property>,
    /// Current classes
    classes: BTreeSet<String>,
    /// Text content
    text: String,
    /// Attributes
    attributes: BTreeMap<String, String>,
}

impl ElementState {
    /// Numeric value of an applied property.
    pub fn value(&self, kind: PropertyKind) -> Option<f64> {
        self.properties.get(&kind).and_then(Property::as_f64)
    }
}

#[derive(Debug)]
struct StageInner {
    viewport: Viewport,
    elements: HashMap<ElementId, ElementState>,
    events: Vec<StageEvent>,
}

/// A headless stand-in for the rendered page.
///
/// Cheap to clone; clones share the same elements and event log.
#[derive(Debug, Clone)]
pub struct InMemoryPresentation {
    inner: Arc<Mutex<StageInner>>,
}

impl Default for InMemoryPresentation {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl InMemoryPresentation {
    /// Empty stage with the given viewport.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StageInner {
                viewport,
                elements: HashMap::new(),
                events: Vec::new(),
            })),
        }
    }

    /// Stage laid out like the Maru page.
    ///
    /// `landmarks[i]` is the number of landmarks in chapter `i`; its length
    /// is the chapter count. Tour dots are laid out for `tour_steps` steps.
    pub fn maru_layout(viewport: Viewport, landmarks: &[usize], tour_steps: usize) -> Self {
        let stage = Self::new(viewport);
        let (vw, vh) = (viewport.width, viewport.height);
        let chapters = landmarks.len();

        stage.place(ElementId::canvas(), Rect::new(0.0, 0.0, vw, vh));
        stage.place(
            ElementId::container(),
            Rect::new(0.0, 0.0, vw * chapters as f64, vh),
        );
        stage.place(ElementId::timeline(), Rect::new(vw * 0.1, vh - 60.0, vw * 0.8, 4.0));
        stage.place(ElementId::progress(), Rect::new(vw * 0.1, vh - 60.0, 0.0, 4.0));
        stage.place(ElementId::sound_toggle(), Rect::new(vw - 80.0, 30.0, 48.0, 48.0));
        stage.place(ElementId::tour_card(), Rect::new(0.0, 0.0, 340.0, 200.0));

        for (chapter, count) in landmarks.iter().enumerate() {
            let left = chapter as f64 * vw;
            stage.place_in_strip(ElementId::chapter(chapter), Rect::new(left, 0.0, vw, vh));
            stage.place_in_strip(
                ElementId::chapter_card(chapter),
                Rect::new(left + (vw - 640.0) / 2.0, vh * 0.3, 640.0, 320.0),
            );
            for landmark in 0..*count {
                stage.place_in_strip(
                    ElementId::landmark(chapter, landmark),
                    Rect::new(
                        left + vw * 0.15 + landmark as f64 * 140.0,
                        vh * 0.72,
                        64.0,
                        64.0,
                    ),
                );
            }
        }

        for id in [
            ElementId::distortion(),
            ElementId::root(),
            ElementId::detail_view(),
            ElementId::detail_content(),
            ElementId::tour_overlay(),
            ElementId::tour_spotlight(),
        ] {
            stage.touch(id);
        }
        for step in 0..tour_steps {
            stage.touch(ElementId::tour_dot(step));
        }

        stage.inner.lock().events.clear();
        stage
    }

    /// Give an element a base rectangle in viewport coordinates.
    pub fn place(&self, id: ElementId, rect: Rect) {
        let mut inner = self.inner.lock();
        let element = inner.elements.entry(id).or_default();
        element.base = Some(rect);
        element.in_strip = false;
    }

    /// Give an element a base rectangle relative to the untranslated strip.
    pub fn place_in_strip(&self, id: ElementId, rect: Rect) {
        let mut inner = self.inner.lock();
        let element = inner.elements.entry(id).or_default();
        element.base = Some(rect);
        element.in_strip = true;
    }

    /// Remove an element, as if it left the document.
    pub fn remove(&self, id: &ElementId) {
        self.inner.lock().elements.remove(id);
    }

    /// Change the viewport size.
    pub fn resize(&self, viewport: Viewport) {
        self.inner.lock().viewport = viewport;
    }

    /// Snapshot of one element.
    pub fn element(&self, id: &ElementId) -> Option<ElementState> {
        self.inner.lock().elements.get(id).cloned()
    }

    /// Numeric value of a property applied to an element.
    pub fn value(&self, id: &ElementId, kind: PropertyKind) -> Option<f64> {
        self.inner.lock().elements.get(id)?.value(kind)
    }

    /// A property applied to an element.
    pub fn property(&self, id: &ElementId, kind: PropertyKind) -> Option<Property> {
        self.inner
            .lock()
            .elements
            .get(id)?
            .properties
            .get(&kind)
            .cloned()
    }

    /// Text content of an element.
    pub fn text(&self, id: &ElementId) -> Option<String> {
        Some(self.inner.lock().elements.get(id)?.text.clone())
    }

    /// Attribute value of an element.
    pub fn attribute(&self, id: &ElementId, name: &str) -> Option<String> {
        self.inner
            .lock()
            .elements
            .get(id)?
            .attributes
            .get(name)
            .cloned()
    }

    /// Every element carrying `class`, sorted.
    pub fn with_class(&self, class: &str) -> Vec<ElementId> {
        let inner = self.inner.lock();
        let mut ids: Vec<_> = inner
            .elements
            .iter()
            .filter(|(_, e)| e.classes.contains(class))
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        ids
    }

    /// Ordered log of everything that happened on the stage.
    pub fn events(&self) -> Vec<StageEvent> {
        self.inner.lock().events.clone()
    }

    /// Position of the first logged event matching `predicate`.
    pub fn position(&self, predicate: impl Fn(&StageEvent) -> bool) -> Option<usize> {
        self.inner.lock().events.iter().position(predicate)
    }

    /// Forget the event log.
    pub fn clear_events(&self) {
        self.inner.lock().events.clear();
    }

    pub(crate) fn record(&self, event: StageEvent) {
        trace!(?event, "Stage event");
        self.inner.lock().events.push(event);
    }

    fn touch(&self, id: ElementId) {
        self.inner.lock().elements.entry(id).or_default();
    }
}

impl Presentation for InMemoryPresentation {
    fn viewport(&self) -> Viewport {
        self.inner.lock().viewport
    }

    fn measure(&self, id: &ElementId) -> Option<Rect> {
        let inner = self.inner.lock();
        let element = inner.elements.get(id)?;
        let base = element.base?;

        let shift = if element.in_strip {
            inner
                .elements
                .get(&ElementId::container())
                .and_then(|c| c.value(PropertyKind::X))
                .unwrap_or(0.0)
        } else {
            0.0
        };

        Some(Rect::new(
            element.value(PropertyKind::Left).unwrap_or(base.left) + shift,
            element.value(PropertyKind::Top).unwrap_or(base.top),
            element.value(PropertyKind::Width).unwrap_or(base.width),
            element.value(PropertyKind::Height).unwrap_or(base.height),
        ))
    }

    fn apply(&self, id: &ElementId, property: &Property) {
        let mut inner = self.inner.lock();
        inner
            .elements
            .entry(id.clone())
            .or_default()
            .properties
            .insert(property.kind(), property.clone());
        inner.events.push(StageEvent::Applied {
            id: id.clone(),
            property: property.clone(),
        });
    }

    fn clear(&self, id: &ElementId, kind: PropertyKind) {
        let mut inner = self.inner.lock();
        if let Some(element) = inner.elements.get_mut(id) {
            element.properties.remove(&kind);
            inner.events.push(StageEvent::Cleared {
                id: id.clone(),
                kind,
            });
        }
    }

    fn set_class(&self, id: &ElementId, class: &str, on: bool) {
        let mut inner = self.inner.lock();
        let classes = &mut inner.elements.entry(id.clone()).or_default().classes;
        let changed = if on {
            classes.insert(class.to_string())
        } else {
            classes.remove(class)
        };
        if changed {
            inner.events.push(StageEvent::ClassChanged {
                id: id.clone(),
                class: class.to_string(),
                on,
            });
        }
    }

    fn has_class(&self, id: &ElementId, class: &str) -> bool {
        self.inner
            .lock()
            .elements
            .get(id)
            .is_some_and(|e| e.classes.contains(class))
    }

    fn set_text(&self, id: &ElementId, text: &str) {
        let mut inner = self.inner.lock();
        inner.elements.entry(id.clone()).or_default().text = text.to_string();
        inner.events.push(StageEvent::TextSet {
            id: id.clone(),
            text: text.to_string(),
        });
    }

    fn set_attribute(&self, id: &ElementId, name: &str, value: &str) {
        let mut inner = self.inner.lock();
        inner
            .elements
            .entry(id.clone())
            .or_default()
            .attributes
            .insert(name.to_string(), value.to_string());
        inner.events.push(StageEvent::AttributeSet {
            id: id.clone(),
            name: name.to_string(),
            value: value.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_elements_follow_the_container() {
        let stage = InMemoryPresentation::maru_layout(Viewport::new(1000.0, 800.0), &[1, 0], 0);
        let card = stage.measure(&ElementId::chapter_card(1)).unwrap();
        assert_eq!(card.left, 1000.0 + 180.0);

        stage.apply(&ElementId::container(), &Property::X(-1000.0));
        let card = stage.measure(&ElementId::chapter_card(1)).unwrap();
        assert_eq!(card.left, 180.0);
    }

    #[test]
    fn applied_geometry_overrides_base() {
        let stage = InMemoryPresentation::default();
        stage.place(ElementId::tour_card(), Rect::new(0.0, 0.0, 300.0, 150.0));
        stage.apply(&ElementId::tour_card(), &Property::Left(40.0));

        let rect = stage.measure(&ElementId::tour_card()).unwrap();
        assert_eq!((rect.left, rect.width), (40.0, 300.0));

        stage.clear(&ElementId::tour_card(), PropertyKind::Left);
        assert_eq!(stage.measure(&ElementId::tour_card()).unwrap().left, 0.0);
    }

    #[test]
    fn unknown_elements_are_not_measurable() {
        let stage = InMemoryPresentation::default();
        assert!(stage.measure(&ElementId::new("nowhere")).is_none());
        stage.set_text(&ElementId::new("nowhere"), "hi");
        assert!(stage.measure(&ElementId::new("nowhere")).is_none());
    }

    #[test]
    fn redundant_class_changes_are_not_logged() {
        let stage = InMemoryPresentation::default();
        let id = ElementId::chapter(0);
        stage.set_class(&id, "active", true);
        stage.set_class(&id, "active", true);
        stage.set_class(&id, "active", false);
        assert_eq!(stage.events().len(), 2);
    }
}
