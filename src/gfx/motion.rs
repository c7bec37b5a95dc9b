//! # Float Motion
//!
//! Continuous bobbing and rotation of floating objects. Everything here is a
//! pure function of elapsed wall-clock time, so the result does not depend
//! on frame rate or on how often it is evaluated.

use cgmath::{Euler, Rad};

/// Spin rate about the vertical axis per unit of `speed × rotation_intensity`, in rad/s
pub const SPIN_RATE: f32 = 0.25;

/// Peak bob height per unit of float intensity
pub const BOB_AMPLITUDE: f32 = 0.1;

/// Parameters of an object's floating motion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionProfile {
    /// Time scale of the oscillation
    pub speed: f32,
    /// Scale of the rotational wobble and spin
    pub rotation_intensity: f32,
    /// Scale of the vertical bob
    pub float_intensity: f32,
    /// Time offset so objects do not move in lockstep, in seconds
    pub phase: f32,
}

impl MotionProfile {
    pub fn new(speed: f32, rotation_intensity: f32, float_intensity: f32) -> Self {
        Self {
            speed,
            rotation_intensity,
            float_intensity,
            phase: 0.0,
        }
    }

    pub fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    /// Motion at `elapsed` seconds
    pub fn sample(&self, elapsed: f32) -> Motion {
        let t = elapsed + self.phase;
        let (sin, cos) = ((t / 4.0) * self.speed).sin_cos();
        let ri = self.rotation_intensity;

        Motion {
            offset_y: sin * BOB_AMPLITUDE * self.float_intensity,
            wobble: Euler::new(Rad(cos / 8.0 * ri), Rad(sin / 8.0 * ri), Rad(sin / 20.0 * ri)),
            spin: Rad(t * self.speed * ri * SPIN_RATE),
        }
    }
}

/// Sampled motion of one object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// Vertical displacement from the resting position
    pub offset_y: f32,
    /// Oscillating tilt
    pub wobble: Euler<Rad<f32>>,
    /// Accumulated constant-rate rotation about the vertical axis
    pub spin: Rad<f32>,
}
