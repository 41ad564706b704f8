//! Core two-phase state types.
//!
//! This module contains the part of the crate that knows nothing about
//! entities or schedulers:
//! - State definitions via the `State` trait
//! - `StateCell`, the request/commit holder
//! - Bounded commit history

mod cell;
mod history;
mod state;

pub use cell::StateCell;
pub use history::{StateHistory, StateTransition};
pub use state::State;
