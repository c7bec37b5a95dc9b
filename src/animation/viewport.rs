//! # Viewport Intersection
//!
//! Geometry-based stand-in for the browser's intersection observer. Elements
//! are registered with their page rectangle; each [`IntersectionObserver::poll`]
//! compares them against the current viewport and reports only the elements
//! whose intersection status changed since the previous poll.

use std::collections::BTreeMap;

use super::ElementId;

/// Axis-aligned rectangle in page coordinates (px, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Visible window onto the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Vertical scroll offset of the page
    pub scroll_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(scroll_y: f32, width: f32, height: f32) -> Self {
        Self { scroll_y, width, height }
    }

    /// Viewport in page coordinates shrunk by `margin` on every side
    pub fn inset(&self, margin: RootMargin) -> Rect {
        let m = margin.0;
        Rect::new(
            m,
            self.scroll_y + m,
            self.width - 2.0 * m,
            self.height - 2.0 * m,
        )
    }
}

/// Inset applied to the viewport before testing, in px
///
/// An inset of 100 corresponds to a root margin of `-100px`: the trigger
/// fires once the element is 100px inside the visible area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RootMargin(pub f32);

impl RootMargin {
    pub fn inset(px: f32) -> Self {
        Self(px)
    }
}

/// Whether `rect` touches the viewport shrunk by `margin`
///
/// Edge contact counts as intersecting. A margin larger than half the
/// viewport leaves an empty area that nothing intersects.
pub fn intersects(rect: &Rect, viewport: &Viewport, margin: RootMargin) -> bool {
    let area = viewport.inset(margin);
    if area.width < 0.0 || area.height < 0.0 {
        return false;
    }
    rect.y <= area.bottom()
        && rect.bottom() >= area.y
        && rect.x <= area.right()
        && rect.right() >= area.x
}

/// Handle of one observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

/// Options of an observation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserveOptions {
    pub margin: RootMargin,
    /// Stop reporting after the first intersection
    pub once: bool,
}

/// One change reported by [`IntersectionObserver::poll`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub id: ObserverId,
    pub element: ElementId,
    pub is_intersecting: bool,
}

#[derive(Debug, Clone)]
struct Observation {
    element: ElementId,
    rect: Rect,
    options: ObserveOptions,
    intersecting: bool,
    finished: bool,
}

/// Registry of observed elements
#[derive(Debug, Default)]
pub struct IntersectionObserver {
    observations: BTreeMap<ObserverId, Observation>,
    next_id: u64,
}

impl IntersectionObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start observing an element. It is assumed off-screen until the next poll.
    pub fn observe(&mut self, element: ElementId, rect: Rect, options: ObserveOptions) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observations.insert(
            id,
            Observation {
                element,
                rect,
                options,
                intersecting: false,
                finished: false,
            },
        );
        id
    }

    /// Stop observing. Returns `false` for unknown or already removed handles.
    pub fn unobserve(&mut self, id: ObserverId) -> bool {
        self.observations.remove(&id).is_some()
    }

    /// Move an observed element, e.g. after a layout change
    pub fn update_rect(&mut self, id: ObserverId, rect: Rect) -> bool {
        match self.observations.get_mut(&id) {
            Some(observation) => {
                observation.rect = rect;
                true
            }
            None => false,
        }
    }

    pub fn is_observing(&self, id: ObserverId) -> bool {
        self.observations.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Compare every live observation against `viewport`
    ///
    /// Several scroll steps between two polls collapse into a single entry
    /// per element carrying the latest status.
    pub fn poll(&mut self, viewport: &Viewport) -> Vec<IntersectionEntry> {
        let mut entries = Vec::new();
        for (id, observation) in self.observations.iter_mut() {
            if observation.finished {
                continue;
            }
            let now = intersects(&observation.rect, viewport, observation.options.margin);
            if now == observation.intersecting {
                continue;
            }
            observation.intersecting = now;
            if now && observation.options.once {
                observation.finished = true;
            }
            entries.push(IntersectionEntry {
                id: *id,
                element: observation.element,
                is_intersecting: now,
            });
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: (f32, f32) = (1280.0, 720.0);

    fn viewport(scroll_y: f32) -> Viewport {
        Viewport::new(scroll_y, SCREEN.0, SCREEN.1)
    }

    fn options(once: bool) -> ObserveOptions {
        ObserveOptions {
            margin: RootMargin::inset(100.0),
            once,
        }
    }

    #[test]
    fn test_margin_delays_trigger() {
        let rect = Rect::new(0.0, 700.0, 400.0, 50.0);
        assert!(intersects(&rect, &viewport(0.0), RootMargin::default()));
        assert!(!intersects(&rect, &viewport(0.0), RootMargin::inset(100.0)));
        assert!(intersects(&rect, &viewport(80.0), RootMargin::inset(100.0)));
    }

    #[test]
    fn test_oversized_margin_never_intersects() {
        let rect = Rect::new(0.0, 0.0, 1280.0, 10_000.0);
        assert!(!intersects(&rect, &viewport(0.0), RootMargin::inset(400.0)));
    }

    #[test]
    fn test_poll_reports_changes_only() {
        let mut observer = IntersectionObserver::new();
        let id = observer.observe(ElementId(1), Rect::new(0.0, 1000.0, 100.0, 100.0), options(false));

        assert!(observer.poll(&viewport(0.0)).is_empty());

        let entries = observer.poll(&viewport(600.0));
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_intersecting);
        assert_eq!(entries[0].id, id);

        assert!(observer.poll(&viewport(650.0)).is_empty());

        let entries = observer.poll(&viewport(0.0));
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].is_intersecting);
    }

    #[test]
    fn test_once_stops_after_first_intersection() {
        let mut observer = IntersectionObserver::new();
        observer.observe(ElementId(1), Rect::new(0.0, 1000.0, 100.0, 100.0), options(true));
        assert_eq!(observer.poll(&viewport(600.0)).len(), 1);
        assert!(observer.poll(&viewport(0.0)).is_empty());
        assert!(observer.poll(&viewport(600.0)).is_empty());
    }

    #[test]
    fn test_unobserve_silences_element() {
        let mut observer = IntersectionObserver::new();
        let id = observer.observe(ElementId(7), Rect::new(0.0, 1000.0, 100.0, 100.0), options(false));
        assert!(observer.unobserve(id));
        assert!(!observer.unobserve(id));
        assert!(observer.poll(&viewport(600.0)).is_empty());
        assert!(observer.is_empty());
    }

    #[test]
    fn test_update_rect_moves_element() {
        let mut observer = IntersectionObserver::new();
        let id = observer.observe(ElementId(2), Rect::new(0.0, 5000.0, 100.0, 100.0), options(false));
        assert!(observer.poll(&viewport(0.0)).is_empty());
        assert!(observer.update_rect(id, Rect::new(0.0, 300.0, 100.0, 100.0)));
        assert_eq!(observer.poll(&viewport(0.0)).len(), 1);
    }
}
