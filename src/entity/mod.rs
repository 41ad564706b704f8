//! The player entity: a [`StateCell`](crate::core::StateCell) wired to a
//! pose target, per-state hooks and a destruction notice.

mod controller;
mod hooks;
mod pose;
mod state;

pub use controller::EntityController;
pub use hooks::{NoHooks, PlayerHooks};
pub use pose::{Pose, PoseTarget, Transform, Vec3};
pub use state::PlayerState;
