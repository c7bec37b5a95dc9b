use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio::prelude::*;
use futures::future::LocalBoxFuture;

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn seeded_page(seed: u64) -> Page {
    let config = FolioConfig::default()
        .with_scene(SceneSettings::default().with_seed(seed).with_particle_count(64));
    Page::new(config, 1280.0, 720.0)
}

/// Rectangle far below the first screen
fn below_fold() -> Rect {
    Rect::new(0.0, 2000.0, 800.0, 200.0)
}

#[test]
fn test_up_offset_interpolates_to_zero() {
    for distance in [0.0, 15.0, 60.0, 240.0] {
        let config = RevealConfig::default().with_distance(distance);
        assert!(approx_eq(config.hidden_state().y, distance));

        let mut page = seeded_page(1);
        let element = page.engine_mut().bind(below_fold(), config);
        page.scroll(1600.0, 0.0);
        let end = page.engine().sample(element, 10.0).unwrap();
        assert_eq!(end, vec![VisualState::VISIBLE]);
    }
}

#[test]
fn test_none_direction_has_no_offset() {
    for distance in [1.0, 60.0, 500.0] {
        let hidden = RevealConfig::default()
            .with_direction(Direction::None)
            .with_distance(distance)
            .hidden_state();
        assert_eq!((hidden.x, hidden.y), (0.0, 0.0));
    }
}

#[test]
fn test_once_is_terminal_and_replay_otherwise() {
    let mut page = seeded_page(2);
    let sticky = page.engine_mut().bind(below_fold(), RevealConfig::default());
    let replay = page
        .engine_mut()
        .bind(below_fold(), RevealConfig::default().with_once(false));

    page.scroll(1600.0, 0.0);
    let first_pass = page.engine().sample(replay, 0.4).unwrap();

    page.scroll(0.0, 5.0);
    assert!(page.engine().state(sticky).unwrap().is_visible());
    assert!(!page.engine().state(replay).unwrap().is_visible());

    // Let the hide settle, then re-enter and compare at the same relative time
    page.scroll(1600.0, 10.0);
    let second_pass = page.engine().sample(replay, 10.4).unwrap();
    assert_eq!(first_pass.len(), second_pass.len());
    assert!(approx_eq(first_pass[0].opacity, second_pass[0].opacity));
    assert!(approx_eq(first_pass[0].y, second_pass[0].y));
}

#[test]
fn test_fast_in_out_converges_to_latest_signal() {
    let mut page = seeded_page(3);
    let element = page
        .engine_mut()
        .bind(below_fold(), RevealConfig::default().with_once(false));

    for step in 0..6 {
        let t = step as f64 * 0.05;
        let y = if step % 2 == 0 { 1600.0 } else { 0.0 };
        page.scroll(y, t);
    }
    // Last signal was "out of view"
    let settled = page.engine().sample(element, 5.0).unwrap();
    assert_eq!(settled, vec![RevealConfig::default().hidden_state()]);
}

#[test]
fn test_stagger_start_delays() {
    let group = StaggerGroup::bind(&[StaggerItem::new(Direction::Up); 3], 0.1, true);
    let delays = group.start_delays();
    assert_eq!(delays.len(), 3);
    for (got, want) in delays.iter().zip([0.0, 0.1, 0.2]) {
        assert!(approx_eq(*got, want));
    }
}

#[test]
fn test_text_reveal_two_words() {
    let text = TextReveal::new("Hi there", 0.3);
    let delays: Vec<f32> = text.units().iter().map(|u| u.delay()).collect();
    assert_eq!(delays.len(), 2);
    assert!(approx_eq(delays[0], 0.3));
    assert!(approx_eq(delays[1], 0.35));
}

#[test]
fn test_scene_counts_on_every_build() {
    for seed in [None, Some(0), Some(99)] {
        let mut settings = SceneSettings::default().with_particle_count(128);
        settings.seed = seed;
        let scene = build_scene(&settings);
        let counts = scene.counts();
        assert_eq!((counts.signature, counts.accent, counts.cubes), (3, 8, 5));
        assert_eq!(counts.particles, 128);
    }
}

#[test]
fn test_frame_pure_in_elapsed_time() {
    let mut page = seeded_page(4);
    let a = page.frame(7.25);
    page.frame(1.0);
    page.frame(30.0);
    let b = page.frame(7.25);
    assert_eq!(a, b);
}

#[test]
fn test_teardown_stops_callbacks() {
    let mut page = seeded_page(5);
    let calls = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&calls);
    page.engine_mut()
        .set_listener(move |_, _| counter.set(counter.get() + 1));
    page.engine_mut()
        .bind(below_fold(), RevealConfig::default().with_once(false));

    page.scroll(1600.0, 0.0);
    page.scroll(0.0, 1.0);
    assert_eq!(calls.get(), 2);
    page.frame(0.5);
    let updates = page.scene().updates();

    page.teardown();
    page.scroll(1600.0, 2.0);
    page.scroll(0.0, 3.0);
    page.frame(1.0);
    page.frame(1.5);
    assert_eq!(calls.get(), 2);
    assert_eq!(page.scene().updates(), updates);
}

struct Recorder {
    outcome: Result<(), SubmitError>,
    seen: RefCell<Vec<ContactRecord>>,
}

impl FormSubmitter for Recorder {
    fn submit(&self, record: ContactRecord) -> LocalBoxFuture<'_, Result<(), SubmitError>> {
        self.seen.borrow_mut().push(record);
        let outcome = self.outcome.clone();
        Box::pin(async move { outcome })
    }
}

#[test]
fn test_contact_submit_through_page() {
    let mut page = seeded_page(6);
    let backend = Recorder {
        outcome: Ok(()),
        seen: RefCell::new(Vec::new()),
    };

    let form = page.form_mut();
    form.set(Field::Name, "Grace");
    form.set(Field::Email, "grace@example.com");
    form.set(Field::Subject, "Collaboration");
    form.set(Field::Message, "Let's talk.");
    pollster::block_on(form.submit(&backend, 1.0)).unwrap();

    assert!(page.form().is_submitted());
    page.frame(5.0);
    assert!(page.form().is_submitted());
    page.frame(6.0);
    assert!(!page.form().is_submitted());

    let seen = backend.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].subject.as_deref(), Some("Collaboration"));
}

#[test]
fn test_contact_rejection_is_reported() {
    let mut page = seeded_page(7);
    let backend = Recorder {
        outcome: Err(SubmitError::Rejected("quota".into())),
        seen: RefCell::new(Vec::new()),
    };
    let form = page.form_mut();
    form.set(Field::Name, "Grace");
    form.set(Field::Email, "grace@example.com");
    form.set(Field::Message, "Hello");

    let err = pollster::block_on(form.submit(&backend, 0.0)).unwrap_err();
    assert!(matches!(err, ContactError::Submit(SubmitError::Rejected(_))));
    assert_eq!(form.message, "Hello");
    let notes = form.take_notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Error");
}
