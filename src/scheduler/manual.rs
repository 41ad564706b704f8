//! Deterministic, caller-driven scheduler.

use super::{CallbackId, TickCallback, TickFlow, TickPhase, TickScheduler};
use tracing::trace;

/// Runs ticks only when asked to.
///
/// Each [`step`](Self::step) calls every physics callback in registration
/// order, then every frame callback in registration order. Callbacks that
/// return [`TickFlow::Detach`] are dropped immediately.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use tickstate::scheduler::{ManualScheduler, TickFlow, TickScheduler};
///
/// let order = Rc::new(Cell::new(0u32));
/// let mut scheduler = ManualScheduler::new();
///
/// let seen = Rc::clone(&order);
/// scheduler.register_frame_tick(Box::new(move || {
///     assert_eq!(seen.get(), 1);
///     TickFlow::Continue
/// }));
/// let seen = Rc::clone(&order);
/// scheduler.register_physics_tick(Box::new(move || {
///     seen.set(1);
///     TickFlow::Continue
/// }));
///
/// scheduler.step();
/// assert_eq!(scheduler.tick(), 1);
/// ```
#[derive(Default)]
pub struct ManualScheduler {
    physics: Vec<(CallbackId, TickCallback)>,
    frame: Vec<(CallbackId, TickCallback)>,
    next_id: u64,
    tick: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one full tick: physics phase, then frame phase.
    pub fn step(&mut self) {
        self.tick += 1;
        trace!(tick = self.tick, "tick start");
        Self::run_phase(&mut self.physics, TickPhase::Physics, self.tick);
        Self::run_phase(&mut self.frame, TickPhase::Frame, self.tick);
    }

    /// Run `ticks` full ticks.
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.step();
        }
    }

    /// Number of completed ticks.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Number of live callbacks in `phase`.
    pub fn callback_count(&self, phase: TickPhase) -> usize {
        match phase {
            TickPhase::Physics => self.physics.len(),
            TickPhase::Frame => self.frame.len(),
        }
    }

    fn run_phase(callbacks: &mut Vec<(CallbackId, TickCallback)>, phase: TickPhase, tick: u64) {
        callbacks.retain_mut(|(id, callback)| match callback() {
            TickFlow::Continue => true,
            TickFlow::Detach => {
                trace!(?phase, callback = id.0, tick, "callback detached");
                false
            }
        });
    }

    fn next_id(&mut self) -> CallbackId {
        let id = CallbackId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl TickScheduler for ManualScheduler {
    fn register_physics_tick(&mut self, callback: TickCallback) -> CallbackId {
        let id = self.next_id();
        self.physics.push((id, callback));
        id
    }

    fn register_frame_tick(&mut self, callback: TickCallback) -> CallbackId {
        let id = self.next_id();
        self.frame.push((id, callback));
        id
    }

    fn unregister(&mut self, id: CallbackId) -> bool {
        let before = self.physics.len() + self.frame.len();
        self.physics.retain(|(cb, _)| *cb != id);
        self.frame.retain(|(cb, _)| *cb != id);
        self.physics.len() + self.frame.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder(log: &Rc<RefCell<Vec<&'static str>>>, tag: &'static str) -> TickCallback {
        let log = Rc::clone(log);
        Box::new(move || {
            log.borrow_mut().push(tag);
            TickFlow::Continue
        })
    }

    #[test]
    fn physics_runs_before_frame() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scheduler = ManualScheduler::new();
        scheduler.register_frame_tick(recorder(&log, "frame"));
        scheduler.register_physics_tick(recorder(&log, "physics"));

        scheduler.run(2);

        assert_eq!(*log.borrow(), vec!["physics", "frame", "physics", "frame"]);
        assert_eq!(scheduler.tick(), 2);
    }

    #[test]
    fn callbacks_run_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scheduler = ManualScheduler::new();
        scheduler.register_physics_tick(recorder(&log, "a"));
        scheduler.register_physics_tick(recorder(&log, "b"));

        scheduler.step();

        assert_eq!(*log.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn detach_removes_callback() {
        let calls = Rc::new(RefCell::new(0));
        let mut scheduler = ManualScheduler::new();
        let counter = Rc::clone(&calls);
        scheduler.register_physics_tick(Box::new(move || {
            *counter.borrow_mut() += 1;
            TickFlow::Detach
        }));

        scheduler.run(3);

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(scheduler.callback_count(TickPhase::Physics), 0);
    }

    #[test]
    fn unregister_removes_only_that_callback() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scheduler = ManualScheduler::new();
        let keep = scheduler.register_frame_tick(recorder(&log, "keep"));
        let drop = scheduler.register_frame_tick(recorder(&log, "drop"));

        assert!(scheduler.unregister(drop));
        assert!(!scheduler.unregister(drop));
        scheduler.step();

        assert_eq!(*log.borrow(), vec!["keep"]);
        assert_ne!(keep, drop);
    }
}
