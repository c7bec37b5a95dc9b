//! # Parallax Wrapper
//!
//! Tracks whether its element is in view (repeatedly, never terminal) and
//! hints the renderer that the transform will change. The wrapper itself
//! applies no displacement: hidden and visible are both the identity.

use super::reveal::{RevealEvent, RevealState, VisualState};
use super::Revealable;

#[derive(Debug, Clone, PartialEq)]
pub struct Parallax {
    speed: f32,
    state: RevealState,
}

impl Default for Parallax {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl Parallax {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            state: RevealState::Hidden,
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn in_view(&self) -> bool {
        self.state.is_visible()
    }

    /// CSS `will-change` hint
    pub fn will_change(&self) -> &'static str {
        "transform"
    }
}

impl Revealable for Parallax {
    fn handle(&mut self, event: RevealEvent, _now: f64) -> Option<RevealState> {
        let next = self.state.next(event, false);
        if next == self.state {
            return None;
        }
        self.state = next;
        Some(next)
    }

    fn sample(&self, _now: f64) -> Vec<VisualState> {
        vec![VisualState::VISIBLE]
    }

    fn state(&self) -> RevealState {
        self.state
    }

    fn once(&self) -> bool {
        false
    }

    fn kind(&self) -> &'static str {
        "parallax"
    }
}
