//! # Folio Prelude
//!
//! Commonly used types in one import.
//!
//! ```rust
//! use folio::prelude::*;
//!
//! let config = FolioConfig::default()
//!     .with_scene(SceneSettings::default().with_seed(3).with_particle_count(16));
//! let mut page = Page::new(config, 1280.0, 720.0);
//! let card = page.engine_mut().bind(
//!     Rect::new(0.0, 200.0, 400.0, 300.0),
//!     RevealConfig::default().with_direction(Direction::Left),
//! );
//! page.scroll(0.0, 0.0);
//! assert!(page.engine().state(card).is_some_and(|s| s.is_visible()));
//! ```

// Page composition
pub use crate::page::{NavAction, NavState, Page, Section};
pub use crate::config::{FolioConfig, SceneSettings};
pub use crate::error::{ColorError, ConfigError, ContactError, FolioError, SubmitError};

// Reveal animations
pub use crate::animation::{
    Direction, ElementId, Parallax, Rect, RevealConfig, RevealEngine, RevealEvent, RevealState,
    Revealable, RootMargin, StaggerGroup, StaggerItem, TextReveal, Viewport, VisualState,
};

// Backdrop scene
pub use crate::gfx::{
    build_scene, Color, FrameScheduler, FrameState, Lighting, Material, MotionProfile,
    SceneGraph, SceneMount, SceneObject, Shape,
};

// Contact form
pub use crate::contact::{ContactForm, ContactRecord, Field, FormSubmitter, Notification};
