//! # Reveal Animation Module
//!
//! Visibility-triggered transitions for page content. Each bound element moves
//! between a "hidden" visual state (offset, faded, optionally scaled, rotated
//! and blurred) and its natural "visible" state when it enters the viewport.
//!
//! ## Key Components
//!
//! - [`RevealController`] - Single element reveal with a [`RevealConfig`]
//! - [`StaggerGroup`] - Children sharing one trigger, offset by index
//! - [`TextReveal`] - Word-by-word cascade
//! - [`Parallax`] - In-view tracking without displacement
//! - [`IntersectionObserver`] - Viewport intersection detection
//! - [`RevealEngine`] - Owns the observer and every bound unit
//!
//! ## Usage
//!
//! ```rust
//! use folio::animation::{RevealConfig, RevealEngine, Rect, Viewport, RootMargin};
//!
//! let mut engine = RevealEngine::new(RootMargin::inset(100.0), RootMargin::inset(50.0));
//! let heading = engine.bind(Rect::new(0.0, 1200.0, 800.0, 80.0), RevealConfig::default());
//!
//! engine.on_scroll(&Viewport::new(0.0, 1280.0, 720.0), 0.0);
//! assert!(!engine.state(heading).unwrap().is_visible());
//!
//! engine.on_scroll(&Viewport::new(900.0, 1280.0, 720.0), 1.0);
//! assert!(engine.state(heading).unwrap().is_visible());
//! ```
//!
//! All timing is expressed as `f64` seconds on the caller's clock. Nothing in
//! this module reads a clock itself.

pub mod easing;
pub mod engine;
pub mod parallax;
pub mod reveal;
pub mod stagger;
pub mod text;
pub mod viewport;

pub use easing::{CubicBezier, EASE_OUT};
pub use engine::RevealEngine;
pub use parallax::Parallax;
pub use reveal::{Direction, RevealConfig, RevealController, RevealEvent, RevealState, VisualState};
pub use stagger::{StaggerGroup, StaggerItem};
pub use text::TextReveal;
pub use viewport::{IntersectionEntry, IntersectionObserver, ObserveOptions, ObserverId, Rect, RootMargin, Viewport};

/// Identifier of a bound page element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Common interface of everything the [`RevealEngine`] can drive
///
/// A unit receives intersection events for its element and reports the
/// visual state of each of its parts at a given time.
pub trait Revealable {
    /// Feed an intersection change at time `now`.
    ///
    /// Returns the new state when the event caused a transition.
    fn handle(&mut self, event: RevealEvent, now: f64) -> Option<RevealState>;

    /// Visual state of every animated part at time `now`
    fn sample(&self, now: f64) -> Vec<VisualState>;

    /// Current logical state
    fn state(&self) -> RevealState;

    /// Whether `Visible` is terminal for this unit
    fn once(&self) -> bool;

    /// Short label for logs
    fn kind(&self) -> &'static str;
}
