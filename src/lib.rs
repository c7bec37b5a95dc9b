// src/lib.rs
//! Folio
//!
//! Scroll-triggered reveal animations and a procedurally composed 3D backdrop
//! for a portfolio page, plus the contact form that talks to a remote backend.

pub mod animation;
pub mod config;
pub mod contact;
pub mod error;
pub mod gfx;
pub mod page;
pub mod prelude;

pub use config::FolioConfig;
pub use error::FolioError;
pub use page::Page;

/// Initialise the `env_logger` backend, honoring `RUST_LOG` (default `info`)
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Creates a page with the default configuration at the given viewport size
pub fn default(width: f32, height: f32) -> Page {
    Page::new(FolioConfig::default(), width, height)
}
