//! Tickstate: state machines committed at the tick boundary
//!
//! Gameplay events may ask for a state change at any moment, but behavior
//! that runs during a tick must see one consistent state. Tickstate splits a
//! transition in two: a request that only records intent, and a commit
//! barrier that the owner runs once per tick before any per-tick behavior.
//!
//! # Core Concepts
//!
//! - **State**: Type-safe state representation via the `State` trait
//! - **StateCell**: Current + pending state with a `commit` barrier
//! - **LifecycleNotifier**: Single-fire destruction notice
//! - **TickScheduler**: The seam through which a game loop drives entities
//! - **EntityController**: A player entity built from the pieces above
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use tickstate::entity::{EntityController, PlayerState, Transform, Vec3};
//! use tickstate::scheduler::ManualScheduler;
//!
//! let transform = Transform::new(Vec3::new(0.0, 0.0, 0.0), Vec3::ZERO);
//! let player = Rc::new(RefCell::new(
//!     EntityController::builder(transform).build().unwrap(),
//! ));
//!
//! let mut scheduler = ManualScheduler::new();
//! EntityController::attach(&player, &mut scheduler);
//!
//! player.borrow_mut().request_start().unwrap();
//! scheduler.step();
//! assert_eq!(player.borrow().current_state().unwrap(), PlayerState::Active);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod entity;
pub mod lifecycle;
pub mod scheduler;

// Re-export commonly used types
pub use builder::{BuildError, ControllerBuilder};
pub use config::ControllerConfig;
pub use crate::core::{State, StateCell, StateHistory, StateTransition};
pub use entity::{EntityController, PlayerState};
pub use lifecycle::{EntityId, LifecycleError, LifecycleNotifier};
pub use scheduler::{ManualScheduler, TickScheduler};
