//! Tick scheduling seam.
//!
//! The core never owns an update loop. Whatever drives the simulation
//! implements [`TickScheduler`]; entities hand it one physics-phase and one
//! frame-phase callback. [`ManualScheduler`] is a deterministic driver for
//! tests and headless runs.

mod manual;

pub use manual::ManualScheduler;

/// Sub-step of a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickPhase {
    /// Fixed-rate step; commit barriers run here
    Physics,
    /// Variable-rate step; reads committed state only
    Frame,
}

/// What a callback wants after it ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFlow {
    /// Keep calling me
    Continue,
    /// Remove me from the scheduler
    Detach,
}

/// Token returned when registering a callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CallbackId(pub(crate) u64);

pub type TickCallback = Box<dyn FnMut() -> TickFlow>;

/// Something that calls registered callbacks once per physics step and once
/// per frame. Within a tick the physics phase runs before the frame phase.
pub trait TickScheduler {
    fn register_physics_tick(&mut self, callback: TickCallback) -> CallbackId;

    fn register_frame_tick(&mut self, callback: TickCallback) -> CallbackId;

    /// Remove a callback from whichever phase holds it.
    fn unregister(&mut self, id: CallbackId) -> bool;
}
