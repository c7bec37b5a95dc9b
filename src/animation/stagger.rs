//! # Staggered Reveals
//!
//! A container whose children share the container's intersection trigger.
//! On reveal, child `i` starts `i × stagger_delay` seconds after the trigger,
//! on top of its own delay.

use super::reveal::{Direction, RevealConfig, RevealController, RevealEvent, RevealState, VisualState};
use super::Revealable;

/// Travel distance of a stagger child, in px
pub const ITEM_DISTANCE: f32 = 30.0;
/// Transition length of a stagger child, in seconds
pub const ITEM_DURATION: f32 = 0.6;

/// Child of a [`StaggerGroup`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaggerItem {
    pub direction: Direction,
    /// Delay of the child itself, added before the stagger offset
    pub delay: f32,
}

impl Default for StaggerItem {
    fn default() -> Self {
        Self {
            direction: Direction::Up,
            delay: 0.0,
        }
    }
}

impl StaggerItem {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Reveal parameters of this child inside a group
    pub fn config(&self, once: bool) -> RevealConfig {
        RevealConfig::default()
            .with_direction(self.direction)
            .with_distance(ITEM_DISTANCE)
            .with_duration(ITEM_DURATION)
            .with_delay(self.delay)
            .with_once(once)
    }
}

/// Ordered children driven by one trigger
#[derive(Debug, Clone)]
pub struct StaggerGroup {
    children: Vec<RevealController>,
    stagger_delay: f32,
    once: bool,
    state: RevealState,
}

impl StaggerGroup {
    /// Wrap `items` into a group
    pub fn bind(items: &[StaggerItem], stagger_delay: f32, once: bool) -> Self {
        Self {
            children: items
                .iter()
                .map(|item| RevealController::new(item.config(once)))
                .collect(),
            stagger_delay,
            once,
            state: RevealState::Hidden,
        }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn stagger_delay(&self) -> f32 {
        self.stagger_delay
    }

    /// Offset of each child's start relative to the group trigger, in seconds
    pub fn start_delays(&self) -> Vec<f32> {
        (0..self.children.len())
            .map(|i| i as f32 * self.stagger_delay)
            .collect()
    }

    pub fn children(&self) -> &[RevealController] {
        &self.children
    }
}

impl Revealable for StaggerGroup {
    /// Hiding is not staggered: every child leaves with its own timing.
    fn handle(&mut self, event: RevealEvent, now: f64) -> Option<RevealState> {
        let next = self.state.next(event, self.once);
        if next == self.state {
            return None;
        }
        let offsets = self.start_delays();
        for (child, offset) in self.children.iter_mut().zip(offsets) {
            let extra = match next {
                RevealState::Visible => offset as f64,
                RevealState::Hidden => 0.0,
            };
            child.handle_with_delay(event, now, extra);
        }
        self.state = next;
        Some(next)
    }

    fn sample(&self, now: f64) -> Vec<VisualState> {
        self.children.iter().map(|child| child.current(now)).collect()
    }

    fn state(&self) -> RevealState {
        self.state
    }

    fn once(&self) -> bool {
        self.once
    }

    fn kind(&self) -> &'static str {
        "stagger"
    }
}
