//! # Configuration
//!
//! Tunables for the page: intersection margins, stagger timing, scene
//! generation and the contact form reset delay. Defaults reproduce the
//! production page; a few knobs can be overridden from the environment.

use crate::error::ConfigError;

/// Environment variable holding a fixed scene seed
pub const ENV_SEED: &str = "FOLIO_SEED";
/// Environment variable holding the particle count
pub const ENV_PARTICLES: &str = "FOLIO_PARTICLES";
/// Environment variable holding the stagger delay in seconds
pub const ENV_STAGGER: &str = "FOLIO_STAGGER";

/// Settings for procedural scene generation
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSettings {
    /// Fixed seed for reproducible placement. `None` draws from the OS.
    pub seed: Option<u64>,
    /// Number of points in the particle field
    pub particle_count: usize,
    /// Global rotation rate of the object group about Y, in rad/s
    pub group_rotation_rate: f32,
    /// Upper bound for the device pixel ratio of the render target
    pub max_pixel_ratio: f64,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            seed: None,
            particle_count: 400,
            group_rotation_rate: 0.05,
            max_pixel_ratio: 2.0,
        }
    }
}

impl SceneSettings {
    /// Builder pattern: Fix the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder pattern: Set the particle count
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }
}

/// Page-wide configuration
#[derive(Debug, Clone, PartialEq)]
pub struct FolioConfig {
    /// Inset applied to the viewport before testing reveal targets, in px
    pub reveal_margin_px: f32,
    /// Inset used by word-by-word text reveals, in px
    pub text_margin_px: f32,
    /// Per-child delay of stagger groups, in seconds
    pub stagger_delay: f32,
    /// How long the contact form keeps its "submitted" flag, in seconds
    pub submitted_reset_secs: f64,
    /// Scroll offset past which the navigation bar is considered scrolled
    pub scrolled_threshold_px: f32,
    pub scene: SceneSettings,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            reveal_margin_px: 100.0,
            text_margin_px: 50.0,
            stagger_delay: 0.1,
            submitted_reset_secs: 5.0,
            scrolled_threshold_px: 50.0,
            scene: SceneSettings::default(),
        }
    }
}

impl FolioConfig {
    /// Defaults overlaid with `FOLIO_SEED`, `FOLIO_PARTICLES` and `FOLIO_STAGGER`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().overlay(|var| std::env::var(var).ok())
    }

    /// Overlay overrides from an arbitrary lookup
    pub fn overlay<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_SEED) {
            let seed = raw
                .trim()
                .parse::<u64>()
                .map_err(|source| ConfigError::Integer { var: ENV_SEED, source })?;
            self.scene.seed = Some(seed);
        }
        if let Some(raw) = lookup(ENV_PARTICLES) {
            self.scene.particle_count = raw
                .trim()
                .parse::<usize>()
                .map_err(|source| ConfigError::Integer { var: ENV_PARTICLES, source })?;
        }
        if let Some(raw) = lookup(ENV_STAGGER) {
            self.stagger_delay = raw
                .trim()
                .parse::<f32>()
                .map_err(|source| ConfigError::Float { var: ENV_STAGGER, source })?;
        }
        Ok(self)
    }

    /// Builder pattern: Replace the scene settings
    pub fn with_scene(mut self, scene: SceneSettings) -> Self {
        self.scene = scene;
        self
    }

    /// Builder pattern: Set the stagger delay
    pub fn with_stagger_delay(mut self, delay: f32) -> Self {
        self.stagger_delay = delay;
        self
    }
}
