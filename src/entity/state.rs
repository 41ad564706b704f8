//! Player states.

use crate::state_enum;

state_enum! {
    /// Lifecycle of a player entity within one round.
    ///
    /// `Uninitialized` is the placeholder a controller is built in; no request
    /// can lead back to it.
    pub enum PlayerState {
        Uninitialized,
        Active,
        Failed,
        Succeeded,
        Resetting,
    }
    sentinel: Uninitialized
}
