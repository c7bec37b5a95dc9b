//! # Reveal Engine
//!
//! Owns the [`IntersectionObserver`] and every bound reveal unit. Scroll and
//! resize handling funnel through [`RevealEngine::on_scroll`], which polls the
//! observer once and routes each change to the unit bound to that element.
//!
//! Unbinding removes the unit and its observation together; no event or
//! listener call can reach an element after it has been unbound.

use std::collections::HashMap;

use super::parallax::Parallax;
use super::reveal::{RevealConfig, RevealController, RevealEvent, RevealState, VisualState};
use super::stagger::{StaggerGroup, StaggerItem};
use super::text::TextReveal;
use super::viewport::{IntersectionObserver, ObserveOptions, ObserverId, Rect, RootMargin, Viewport};
use super::{ElementId, Revealable};

/// Callback invoked on every logical transition
pub type TransitionListener = Box<dyn FnMut(ElementId, RevealState)>;

struct Binding {
    observer: ObserverId,
    unit: Box<dyn Revealable>,
}

/// Manager of bound reveal units
pub struct RevealEngine {
    observer: IntersectionObserver,
    bindings: HashMap<ElementId, Binding>,
    next_element: u64,
    margin: RootMargin,
    text_margin: RootMargin,
    listener: Option<TransitionListener>,
}

impl RevealEngine {
    /// Create an engine
    ///
    /// # Arguments
    ///
    /// * `margin` - Viewport inset for reveals, stagger groups and parallax
    /// * `text_margin` - Viewport inset for word-by-word text reveals
    pub fn new(margin: RootMargin, text_margin: RootMargin) -> Self {
        Self {
            observer: IntersectionObserver::new(),
            bindings: HashMap::new(),
            next_element: 0,
            margin,
            text_margin,
            listener: None,
        }
    }

    /// Register a callback for logical state transitions
    pub fn set_listener<F>(&mut self, listener: F)
    where
        F: FnMut(ElementId, RevealState) + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    /// Bind a single element reveal
    pub fn bind(&mut self, rect: Rect, config: RevealConfig) -> ElementId {
        self.bind_unit(rect, self.margin, Box::new(RevealController::new(config)))
    }

    /// Bind a stagger container and its children
    pub fn bind_stagger(
        &mut self,
        rect: Rect,
        items: &[StaggerItem],
        stagger_delay: f32,
        once: bool,
    ) -> ElementId {
        let group = StaggerGroup::bind(items, stagger_delay, once);
        self.bind_unit(rect, self.margin, Box::new(group))
    }

    /// Bind a word-by-word text reveal
    pub fn bind_text(&mut self, rect: Rect, text: &str, delay: f32) -> ElementId {
        self.bind_unit(rect, self.text_margin, Box::new(TextReveal::new(text, delay)))
    }

    /// Bind a parallax wrapper
    pub fn bind_parallax(&mut self, rect: Rect, speed: f32) -> ElementId {
        self.bind_unit(rect, RootMargin::default(), Box::new(Parallax::new(speed)))
    }

    /// Bind any [`Revealable`] observed through `margin`
    ///
    /// The observation stops after the first reveal exactly when the unit
    /// reports [`Revealable::once`].
    pub fn bind_unit(
        &mut self,
        rect: Rect,
        margin: RootMargin,
        unit: Box<dyn Revealable>,
    ) -> ElementId {
        let element = ElementId(self.next_element);
        self.next_element += 1;
        let once = unit.once();

        let observer = self.observer.observe(element, rect, ObserveOptions { margin, once });
        log::debug!("bound {} unit {:?} at y={}", unit.kind(), element, rect.y);
        self.bindings.insert(element, Binding { observer, unit });
        element
    }

    /// Tear down an element: stop observing it and drop its unit
    pub fn unbind(&mut self, element: ElementId) -> bool {
        match self.bindings.remove(&element) {
            Some(binding) => {
                self.observer.unobserve(binding.observer);
                log::debug!("unbound {} unit {:?}", binding.unit.kind(), element);
                true
            }
            None => false,
        }
    }

    /// Unbind every element
    pub fn clear(&mut self) {
        let elements: Vec<ElementId> = self.bindings.keys().copied().collect();
        for element in elements {
            self.unbind(element);
        }
    }

    /// Update the page rectangle of an element after layout
    pub fn update_rect(&mut self, element: ElementId, rect: Rect) -> bool {
        self.bindings
            .get(&element)
            .map_or(false, |binding| self.observer.update_rect(binding.observer, rect))
    }

    /// Route viewport changes to the bound units
    ///
    /// Returns the number of logical transitions that happened.
    pub fn on_scroll(&mut self, viewport: &Viewport, now: f64) -> usize {
        let mut transitions = 0;
        for entry in self.observer.poll(viewport) {
            let Some(binding) = self.bindings.get_mut(&entry.element) else {
                continue;
            };
            let event = RevealEvent::from_intersecting(entry.is_intersecting);
            if let Some(state) = binding.unit.handle(event, now) {
                transitions += 1;
                log::debug!("{:?} -> {:?} at {:.3}s", entry.element, state, now);
                if let Some(listener) = self.listener.as_mut() {
                    listener(entry.element, state);
                }
            }
        }
        transitions
    }

    /// Visual states of an element's parts at `now`
    pub fn sample(&self, element: ElementId, now: f64) -> Option<Vec<VisualState>> {
        self.bindings.get(&element).map(|binding| binding.unit.sample(now))
    }

    /// Logical state of an element
    pub fn state(&self, element: ElementId) -> Option<RevealState> {
        self.bindings.get(&element).map(|binding| binding.unit.state())
    }

    pub fn is_bound(&self, element: ElementId) -> bool {
        self.bindings.contains_key(&element)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Number of live observations
    pub fn observed(&self) -> usize {
        self.observer.len()
    }
}
