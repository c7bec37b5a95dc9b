//! # Headless Preview
//!
//! Composes the page without a window, scrolls through it, renders a few
//! frames and submits the contact form against an in-memory backend.
//!
//! ```text
//! RUST_LOG=debug FOLIO_SEED=7 cargo run --example headless_preview
//! ```

use std::cell::RefCell;

use folio::prelude::*;
use futures::future::LocalBoxFuture;

/// Stores messages instead of sending them
#[derive(Default)]
struct Outbox {
    sent: RefCell<Vec<ContactRecord>>,
}

impl FormSubmitter for Outbox {
    fn submit(&self, record: ContactRecord) -> LocalBoxFuture<'_, Result<(), SubmitError>> {
        Box::pin(async move {
            self.sent.borrow_mut().push(record);
            Ok(())
        })
    }
}

fn main() -> anyhow::Result<()> {
    folio::init_logging();

    let config = FolioConfig::from_env()?;
    let stagger_delay = config.stagger_delay;
    let mut page = Page::new(config, 1280.0, 720.0);
    let target = page.render_target(2.5).physical_size();
    log::info!("backdrop canvas {}x{}", target.width, target.height);

    // Lay out one element per section, 900px apart
    let mut bound = Vec::new();
    for (i, section) in Section::ALL.iter().enumerate() {
        let top = 800.0 + i as f32 * 900.0;
        let engine = page.engine_mut();
        let heading = engine.bind_text(Rect::new(0.0, top, 800.0, 60.0), section.label(), 0.0);
        let cards = engine.bind_stagger(
            Rect::new(0.0, top + 100.0, 1200.0, 400.0),
            &[StaggerItem::new(Direction::Up); 3],
            stagger_delay,
            true,
        );
        bound.push((*section, heading, cards));
    }

    let mut now = 0.0f64;
    for step in 0..=12 {
        let y = step as f32 * 450.0;
        let transitions = page.scroll(y, now);
        let frame = page.frame(now);
        log::info!(
            "scroll {y:>6.0}px: {transitions} transitions, nav scrolled={}, frame transforms={}",
            page.nav().is_scrolled,
            frame.map_or(0, |f| f.transforms.len())
        );
        now += 0.25;
    }

    for (section, heading, cards) in &bound {
        let words = page.engine().sample(*heading, now).map_or(0, |v| v.len());
        let visible = page.engine().state(*cards).is_some_and(|s| s.is_visible());
        log::info!("{:<15} words={words} cards visible={visible}", section.label());
    }

    page.dispatch(NavAction::Navigate(Section::Contact));
    let outbox = Outbox::default();
    let form = page.form_mut();
    form.set(Field::Name, "Visitor");
    form.set(Field::Email, "visitor@example.com");
    form.set(Field::Message, "Loved the backdrop.");
    pollster::block_on(form.submit(&outbox, now))?;
    for note in form.take_notifications() {
        log::info!("{}: {}", note.title, note.description);
    }
    log::info!("outbox holds {} message(s)", outbox.sent.borrow().len());

    page.teardown();
    Ok(())
}
