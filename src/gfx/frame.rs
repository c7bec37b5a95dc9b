//! # Frame Scheduling
//!
//! Per-frame callbacks driven by an external render loop. The loop calls
//! [`FrameScheduler::tick`] once per rendered frame with the elapsed time;
//! every live subscriber runs once. Unsubscribing takes effect immediately
//! and handles are never reused, so a torn-down subscriber cannot fire again.
//! A subscriber registered with [`FrameScheduler::subscribe_while`] is also
//! dropped on the first tick where it reports it is no longer needed.

use std::cell::{Ref, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use super::camera::RenderTarget;
use super::scene::{FrameState, SceneGraph};

/// Handle of a per-frame subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(u64);

/// Returns `false` once the subscriber should be removed
type FrameCallback = Box<dyn FnMut(f32) -> bool>;

/// Registry of per-frame callbacks
#[derive(Default)]
pub struct FrameScheduler {
    subscribers: BTreeMap<FrameHandle, FrameCallback>,
    next_handle: u64,
    frames: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback receiving elapsed seconds
    pub fn subscribe<F>(&mut self, mut callback: F) -> FrameHandle
    where
        F: FnMut(f32) + 'static,
    {
        self.subscribe_while(move |elapsed| {
            callback(elapsed);
            true
        })
    }

    /// Register a callback that stays subscribed while it returns `true`
    pub fn subscribe_while<F>(&mut self, callback: F) -> FrameHandle
    where
        F: FnMut(f32) -> bool + 'static,
    {
        let handle = FrameHandle(self.next_handle);
        self.next_handle += 1;
        self.subscribers.insert(handle, Box::new(callback));
        handle
    }

    /// Remove a callback. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, handle: FrameHandle) -> bool {
        self.subscribers.remove(&handle).is_some()
    }

    /// Run every subscriber for one frame
    pub fn tick(&mut self, elapsed: f32) {
        self.frames += 1;
        self.subscribers.retain(|_, callback| callback(elapsed));
    }

    pub fn is_subscribed(&self, handle: FrameHandle) -> bool {
        self.subscribers.contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Frames ticked so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// A scene attached to a [`FrameScheduler`]
///
/// While mounted, each tick stores the scene's [`FrameState`] for the
/// renderer to pick up. After [`SceneMount::unmount`] the latest state is
/// frozen and no further updates happen. The scheduler only holds a weak
/// reference to the scene, so dropping a mount detaches it on the next tick.
pub struct SceneMount {
    scene: Rc<RefCell<SceneGraph>>,
    latest: Rc<RefCell<Option<FrameState>>>,
    updates: Rc<RefCell<u64>>,
    handle: Option<FrameHandle>,
}

impl SceneMount {
    pub fn mount(scene: SceneGraph, scheduler: &mut FrameScheduler) -> Self {
        let objects = scene.objects.len();
        let scene = Rc::new(RefCell::new(scene));
        let latest = Rc::new(RefCell::new(None));
        let updates = Rc::new(RefCell::new(0u64));

        let handle = {
            let scene: Weak<RefCell<SceneGraph>> = Rc::downgrade(&scene);
            let latest = Rc::clone(&latest);
            let updates = Rc::clone(&updates);
            scheduler.subscribe_while(move |elapsed| match scene.upgrade() {
                Some(scene) => {
                    *latest.borrow_mut() = Some(scene.borrow().frame(elapsed));
                    *updates.borrow_mut() += 1;
                    true
                }
                None => false,
            })
        };
        log::info!("mounted scene with {objects} objects");

        Self {
            scene,
            latest,
            updates,
            handle: Some(handle),
        }
    }

    /// Detach from the scheduler. Safe to call more than once.
    pub fn unmount(&mut self, scheduler: &mut FrameScheduler) {
        if let Some(handle) = self.handle.take() {
            scheduler.unsubscribe(handle);
            log::info!("unmounted scene after {} frame updates", self.updates());
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.handle.is_some()
    }

    pub fn scene(&self) -> Ref<'_, SceneGraph> {
        self.scene.borrow()
    }

    /// Match the camera aspect to a new canvas size
    pub fn resize(&mut self, target: &RenderTarget) {
        self.scene.borrow_mut().camera.resize(target);
    }

    /// State written by the most recent tick
    pub fn latest(&self) -> Option<FrameState> {
        self.latest.borrow().clone()
    }

    /// Number of frame updates received
    pub fn updates(&self) -> u64 {
        *self.updates.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneSettings;
    use crate::gfx::scene::build_scene;
    use std::cell::Cell;

    #[test]
    fn test_unsubscribe_stops_callback() {
        let mut scheduler = FrameScheduler::new();
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let handle = scheduler.subscribe(move |_| counter.set(counter.get() + 1));

        scheduler.tick(0.0);
        scheduler.tick(0.016);
        assert_eq!(count.get(), 2);

        assert!(scheduler.unsubscribe(handle));
        scheduler.tick(0.032);
        scheduler.tick(0.048);
        assert_eq!(count.get(), 2);
        assert!(!scheduler.unsubscribe(handle));
        assert_eq!(scheduler.frames(), 4);
    }

    #[test]
    fn test_handles_not_reused() {
        let mut scheduler = FrameScheduler::new();
        let a = scheduler.subscribe(|_| {});
        scheduler.unsubscribe(a);
        let b = scheduler.subscribe(|_| {});
        assert_ne!(a, b);
        assert!(!scheduler.is_subscribed(a));
    }

    #[test]
    fn test_scene_mount_lifecycle() {
        let mut scheduler = FrameScheduler::new();
        let scene = build_scene(&SceneSettings::default().with_seed(5).with_particle_count(10));
        let expected = scene.frame(1.0);
        let mut mount = SceneMount::mount(scene, &mut scheduler);
        assert!(mount.latest().is_none());

        scheduler.tick(1.0);
        assert_eq!(mount.latest(), Some(expected.clone()));
        assert_eq!(mount.updates(), 1);

        mount.unmount(&mut scheduler);
        mount.unmount(&mut scheduler);
        assert!(!mount.is_mounted());
        assert!(scheduler.is_empty());

        scheduler.tick(2.0);
        scheduler.tick(3.0);
        assert_eq!(mount.updates(), 1);
        assert_eq!(mount.latest(), Some(expected));
    }

    #[test]
    fn test_dropped_mount_is_pruned() {
        let mut scheduler = FrameScheduler::new();
        let scene = build_scene(&SceneSettings::default().with_seed(6).with_particle_count(4));
        {
            let _mount = SceneMount::mount(scene, &mut scheduler);
            assert_eq!(scheduler.len(), 1);
        }
        scheduler.tick(1.0);
        assert!(scheduler.is_empty());
        scheduler.tick(2.0);
        assert_eq!(scheduler.frames(), 2);
    }

    #[test]
    fn test_subscribe_while_removes_finished() {
        let mut scheduler = FrameScheduler::new();
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let handle = scheduler.subscribe_while(move |_| {
            counter.set(counter.get() + 1);
            counter.get() < 2
        });

        for frame in 0..4 {
            scheduler.tick(frame as f32);
        }
        assert_eq!(count.get(), 2);
        assert!(!scheduler.is_subscribed(handle));
    }

    #[test]
    fn test_resize_updates_camera_aspect() {
        let mut scheduler = FrameScheduler::new();
        let scene = build_scene(&SceneSettings::default().with_seed(8).with_particle_count(4));
        let mut mount = SceneMount::mount(scene, &mut scheduler);
        mount.resize(&RenderTarget::new(400.0, 800.0, 1.0));
        assert_eq!(mount.scene().camera.aspect, 0.5);
    }
}
