//! # Page Composition
//!
//! Wires the pieces of the portfolio page together: navigation state, the
//! reveal engine, the mounted backdrop scene and the contact form. The host
//! forwards scroll, resize and frame events to a [`Page`]; everything else is
//! driven from there.

use crate::animation::{ElementId, RevealEngine, RootMargin, Viewport};
use crate::config::FolioConfig;
use crate::contact::ContactForm;
use crate::gfx::camera::RenderTarget;
use crate::gfx::frame::{FrameScheduler, SceneMount};
use crate::gfx::scene::{build_scene, FrameState};

/// Anchored page section, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Skills,
    Projects,
    Experience,
    Certifications,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Certifications,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Certifications => "Certifications",
            Section::Contact => "Contact",
        }
    }

    /// Fragment the navigation links to
    pub fn anchor(self) -> &'static str {
        match self {
            Section::About => "#about",
            Section::Skills => "#skills",
            Section::Projects => "#projects",
            Section::Experience => "#experience",
            Section::Certifications => "#certifications",
            Section::Contact => "#contact",
        }
    }
}

/// Input to the navigation reducer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavAction {
    Scrolled(f32),
    ToggleMenu,
    Navigate(Section),
}

/// Navigation bar state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavState {
    pub is_scrolled: bool,
    pub menu_open: bool,
    pub active_section: Option<Section>,
    threshold: f32,
}

impl NavState {
    pub fn new(scrolled_threshold_px: f32) -> Self {
        Self {
            threshold: scrolled_threshold_px,
            ..Self::default()
        }
    }

    /// Next state after `action`
    pub fn apply(self, action: NavAction) -> NavState {
        match action {
            NavAction::Scrolled(y) => NavState {
                is_scrolled: y > self.threshold,
                ..self
            },
            NavAction::ToggleMenu => NavState {
                menu_open: !self.menu_open,
                ..self
            },
            NavAction::Navigate(section) => NavState {
                menu_open: false,
                active_section: Some(section),
                ..self
            },
        }
    }
}

/// Selected tab of a tabbed section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabState {
    active: usize,
    len: usize,
}

impl TabState {
    pub fn new(len: usize) -> Self {
        Self { active: 0, len }
    }

    /// Select tab `index`; out-of-range indices leave the selection unchanged
    pub fn select(self, index: usize) -> TabState {
        if index < self.len {
            TabState { active: index, ..self }
        } else {
            self
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Number of skill categories
pub const SKILL_CATEGORIES: usize = 4;

/// The composed page
pub struct Page {
    config: FolioConfig,
    engine: RevealEngine,
    scheduler: FrameScheduler,
    scene: SceneMount,
    nav: NavState,
    skills: TabState,
    form: ContactForm,
    viewport: Viewport,
    device_pixel_ratio: f64,
}

impl Page {
    /// Build the backdrop, mount it and set up an empty reveal engine
    pub fn new(config: FolioConfig, width: f32, height: f32) -> Self {
        let mut scheduler = FrameScheduler::new();
        let scene = SceneMount::mount(build_scene(&config.scene), &mut scheduler);
        let engine = RevealEngine::new(
            RootMargin::inset(config.reveal_margin_px),
            RootMargin::inset(config.text_margin_px),
        );

        let mut page = Self {
            nav: NavState::new(config.scrolled_threshold_px),
            skills: TabState::new(SKILL_CATEGORIES),
            form: ContactForm::new(config.submitted_reset_secs),
            viewport: Viewport::new(0.0, width, height),
            device_pixel_ratio: 1.0,
            engine,
            scheduler,
            scene,
            config,
        };
        page.fit_camera();
        page
    }

    fn fit_camera(&mut self) {
        let target = self.render_target(self.device_pixel_ratio);
        self.scene.resize(&target);
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    pub fn engine(&self) -> &RevealEngine {
        &self.engine
    }

    /// Access for binding and unbinding page elements
    pub fn engine_mut(&mut self) -> &mut RevealEngine {
        &mut self.engine
    }

    pub fn nav(&self) -> NavState {
        self.nav
    }

    pub fn skills(&self) -> TabState {
        self.skills
    }

    pub fn select_skill_category(&mut self, index: usize) {
        self.skills = self.skills.select(index);
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn scene(&self) -> &SceneMount {
        &self.scene
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Canvas for the backdrop at the current viewport size
    pub fn render_target(&self, device_pixel_ratio: f64) -> RenderTarget {
        RenderTarget::new(
            f64::from(self.viewport.width),
            f64::from(self.viewport.height),
            device_pixel_ratio,
        )
        .with_max_pixel_ratio(self.config.scene.max_pixel_ratio)
    }

    /// Record the display's pixel ratio and refit the camera
    pub fn set_device_pixel_ratio(&mut self, ratio: f64) {
        self.device_pixel_ratio = ratio;
        self.fit_camera();
    }

    pub fn dispatch(&mut self, action: NavAction) {
        self.nav = self.nav.apply(action);
    }

    /// Handle a scroll event. Returns the number of reveal transitions.
    pub fn scroll(&mut self, scroll_y: f32, now: f64) -> usize {
        self.viewport.scroll_y = scroll_y;
        self.dispatch(NavAction::Scrolled(scroll_y));
        self.engine.on_scroll(&self.viewport, now)
    }

    /// Handle a viewport resize. Returns the number of reveal transitions.
    pub fn resize(&mut self, width: f32, height: f32, now: f64) -> usize {
        self.viewport.width = width;
        self.viewport.height = height;
        self.fit_camera();
        self.engine.on_scroll(&self.viewport, now)
    }

    /// Advance one rendered frame at `now` seconds on the page clock
    ///
    /// The scene samples its motion in `f32`; the form's auto-reset keeps
    /// the full `f64` clock that [`ContactForm::submit`] was given.
    pub fn frame(&mut self, now: f64) -> Option<FrameState> {
        self.scheduler.tick(now as f32);
        self.form.tick(now);
        self.scene.latest()
    }

    /// Unbind every element and stop scene updates
    pub fn teardown(&mut self) {
        self.engine.clear();
        self.scene.unmount(&mut self.scheduler);
        log::info!("page torn down after {} frames", self.scheduler.frames());
    }

    pub fn is_bound(&self, element: ElementId) -> bool {
        self.engine.is_bound(element)
    }
}
