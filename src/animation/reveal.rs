//! # Reveal Controller
//!
//! Per-element hidden/visible animation. The logical state machine
//! ([`RevealState::next`]) is kept apart from the visual interpolation
//! ([`RevealController::current`]) so either can be tested on its own.

use super::easing::EASE_OUT;
use super::Revealable;

/// Blur radius of the hidden state when blur is enabled, in px
pub const HIDDEN_BLUR_PX: f32 = 10.0;

/// Side the element slides in from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Starts below its resting place and moves up
    #[default]
    Up,
    /// Starts above and moves down
    Down,
    /// Starts to the right and moves left
    Left,
    /// Starts to the left and moves right
    Right,
    /// No positional offset
    None,
}

impl Direction {
    /// Hidden-state offset `(x, y)` for a travel distance
    pub fn offset(self, distance: f32) -> (f32, f32) {
        match self {
            Direction::Up => (0.0, distance),
            Direction::Down => (0.0, -distance),
            Direction::Left => (distance, 0.0),
            Direction::Right => (-distance, 0.0),
            Direction::None => (0.0, 0.0),
        }
    }
}

/// Reveal parameters of a single element
///
/// Values are not validated. A negative duration or delay is handed to the
/// interpolation as is and simply produces a degenerate animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    pub direction: Direction,
    /// Travel distance in px along the axis of `direction`
    pub distance: f32,
    /// Transition length in seconds
    pub duration: f32,
    /// Wait before the transition starts, in seconds
    pub delay: f32,
    /// Scale of the hidden state
    pub scale: f32,
    /// Rotation of the hidden state in degrees
    pub rotate: f32,
    pub blur: bool,
    /// Stay visible after the first reveal
    pub once: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Up,
            distance: 60.0,
            duration: 0.8,
            delay: 0.0,
            scale: 1.0,
            rotate: 0.0,
            blur: false,
            once: true,
        }
    }
}

impl RevealConfig {
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_distance(mut self, distance: f32) -> Self {
        self.distance = distance;
        self
    }

    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotate(mut self, degrees: f32) -> Self {
        self.rotate = degrees;
        self
    }

    pub fn with_blur(mut self, blur: bool) -> Self {
        self.blur = blur;
        self
    }

    pub fn with_once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }

    /// Visual state before the element has been revealed
    pub fn hidden_state(&self) -> VisualState {
        let (x, y) = self.direction.offset(self.distance);
        VisualState {
            opacity: 0.0,
            x,
            y,
            scale: self.scale,
            rotate: self.rotate,
            blur_px: if self.blur { HIDDEN_BLUR_PX } else { 0.0 },
        }
    }

    /// Visual state for a logical state
    pub fn visual_for(&self, state: RevealState) -> VisualState {
        match state {
            RevealState::Hidden => self.hidden_state(),
            RevealState::Visible => VisualState::VISIBLE,
        }
    }
}

/// Renderable properties of an element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    /// Horizontal offset in px
    pub x: f32,
    /// Vertical offset in px, positive is down
    pub y: f32,
    pub scale: f32,
    /// Rotation in degrees
    pub rotate: f32,
    pub blur_px: f32,
}

impl VisualState {
    /// Natural resting state: opaque, untransformed, sharp
    pub const VISIBLE: VisualState = VisualState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
        blur_px: 0.0,
    };

    /// Component-wise interpolation
    pub fn lerp(&self, to: &VisualState, t: f32) -> VisualState {
        VisualState {
            opacity: lerp(self.opacity, to.opacity, t),
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
            scale: lerp(self.scale, to.scale, t),
            rotate: lerp(self.rotate, to.rotate, t),
            blur_px: lerp(self.blur_px, to.blur_px, t),
        }
    }

    /// CSS `filter` value
    pub fn filter(&self) -> String {
        format!("blur({}px)", self.blur_px)
    }
}

/// Logical reveal state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

/// Intersection change of the bound element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEvent {
    Enter,
    Leave,
}

impl RevealEvent {
    pub fn from_intersecting(is_intersecting: bool) -> Self {
        if is_intersecting {
            RevealEvent::Enter
        } else {
            RevealEvent::Leave
        }
    }
}

impl RevealState {
    /// Transition function
    ///
    /// `Visible` only reverts to `Hidden` when the element is not `once`.
    pub fn next(self, event: RevealEvent, once: bool) -> RevealState {
        match (self, event) {
            (RevealState::Hidden, RevealEvent::Enter) => RevealState::Visible,
            (RevealState::Visible, RevealEvent::Leave) if !once => RevealState::Hidden,
            (state, _) => state,
        }
    }

    pub fn is_visible(self) -> bool {
        self == RevealState::Visible
    }
}

/// In-flight interpolation between two visual states
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: VisualState,
    pub to: VisualState,
    /// Clock time the triggering event arrived
    pub start: f64,
    pub delay: f64,
    pub duration: f64,
}

impl Transition {
    pub fn sample(&self, now: f64) -> VisualState {
        let elapsed = now - self.start - self.delay;
        if elapsed < 0.0 {
            return self.from;
        }
        let progress = elapsed / self.duration;
        if self.duration <= 0.0 || !progress.is_finite() || progress >= 1.0 {
            return self.to;
        }
        let eased = EASE_OUT.solve(progress as f32);
        self.from.lerp(&self.to, eased)
    }

    pub fn is_finished(&self, now: f64) -> bool {
        now - self.start - self.delay >= self.duration.max(0.0)
    }
}

/// Reveal animation of one bound element
#[derive(Debug, Clone)]
pub struct RevealController {
    config: RevealConfig,
    state: RevealState,
    transition: Option<Transition>,
}

impl RevealController {
    /// Create a controller in the `Hidden` state
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            state: RevealState::Hidden,
            transition: None,
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Apply an event, adding `extra_delay` seconds on top of the configured delay
    ///
    /// A new transition always starts from whatever is on screen at `now`, so
    /// rapid enter/leave sequences settle on the state of the latest event.
    pub fn handle_with_delay(
        &mut self,
        event: RevealEvent,
        now: f64,
        extra_delay: f64,
    ) -> Option<RevealState> {
        let next = self.state.next(event, self.config.once);
        if next == self.state {
            return None;
        }
        let from = self.current(now);
        self.transition = Some(Transition {
            from,
            to: self.config.visual_for(next),
            start: now,
            delay: self.config.delay as f64 + extra_delay,
            duration: self.config.duration as f64,
        });
        self.state = next;
        Some(next)
    }

    /// Visual state at `now`
    pub fn current(&self, now: f64) -> VisualState {
        match &self.transition {
            Some(transition) => transition.sample(now),
            None => self.config.hidden_state(),
        }
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Whether the element has reached the visual state of its logical state
    pub fn is_settled(&self, now: f64) -> bool {
        self.transition.map_or(true, |t| t.is_finished(now))
    }
}

impl Revealable for RevealController {
    fn handle(&mut self, event: RevealEvent, now: f64) -> Option<RevealState> {
        self.handle_with_delay(event, now, 0.0)
    }

    fn sample(&self, now: f64) -> Vec<VisualState> {
        vec![self.current(now)]
    }

    fn state(&self) -> RevealState {
        self.state
    }

    fn once(&self) -> bool {
        self.config.once
    }

    fn kind(&self) -> &'static str {
        "reveal"
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
