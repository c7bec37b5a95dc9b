//! # Word-by-Word Text Reveal
//!
//! Splits a string into whitespace-delimited words and reveals each word as
//! its own unit, cascading by a fixed 50ms per word.

use super::reveal::{RevealConfig, RevealController, RevealEvent, RevealState, VisualState};
use super::Revealable;

/// Delay between consecutive words, in seconds
pub const WORD_STAGGER: f32 = 0.05;
/// Rise distance of each word, in px
pub const WORD_DISTANCE: f32 = 20.0;
/// Transition length of each word, in seconds
pub const WORD_DURATION: f32 = 0.5;

/// A revealed word
#[derive(Debug, Clone)]
pub struct TextUnit {
    pub word: String,
    pub controller: RevealController,
}

impl TextUnit {
    pub fn delay(&self) -> f32 {
        self.controller.config().delay
    }
}

/// Word cascade over a piece of text. Reveals once.
#[derive(Debug, Clone)]
pub struct TextReveal {
    units: Vec<TextUnit>,
    state: RevealState,
}

impl TextReveal {
    pub fn new(text: &str, delay: f32) -> Self {
        let units = text
            .split_whitespace()
            .enumerate()
            .map(|(index, word)| TextUnit {
                word: word.to_string(),
                controller: RevealController::new(
                    RevealConfig::default()
                        .with_distance(WORD_DISTANCE)
                        .with_duration(WORD_DURATION)
                        .with_delay(delay + index as f32 * WORD_STAGGER)
                        .with_once(true),
                ),
            })
            .collect();
        Self {
            units,
            state: RevealState::Hidden,
        }
    }

    pub fn units(&self) -> &[TextUnit] {
        &self.units
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(|unit| unit.word.as_str())
    }
}

impl Revealable for TextReveal {
    fn handle(&mut self, event: RevealEvent, now: f64) -> Option<RevealState> {
        let next = self.state.next(event, true);
        if next == self.state {
            return None;
        }
        for unit in &mut self.units {
            unit.controller.handle_with_delay(event, now, 0.0);
        }
        self.state = next;
        Some(next)
    }

    fn sample(&self, now: f64) -> Vec<VisualState> {
        self.units.iter().map(|unit| unit.controller.current(now)).collect()
    }

    fn state(&self) -> RevealState {
        self.state
    }

    fn once(&self) -> bool {
        true
    }

    fn kind(&self) -> &'static str {
        "text"
    }
}
