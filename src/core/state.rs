//! Core State trait for tick-committed states.
//!
//! All state values held by a [`StateCell`](super::StateCell) implement this
//! trait. Its methods are pure: they describe a state value and never act on
//! anything.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for states held by a [`StateCell`](super::StateCell).
///
/// # Required Traits
///
/// - `Clone`: states are copied into the commit history
/// - `PartialEq`: commits compare pending against current
/// - `Debug`: states show up in log records and test failures
/// - `Serialize` + `Deserialize`: states can be dumped for diagnostics
///
/// # Example
///
/// ```rust
/// use tickstate::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Unknown,
///     Open,
///     Closed,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Unknown => "Unknown",
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
///
///     fn is_sentinel(&self) -> bool {
///         matches!(self, Self::Unknown)
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is the "uninitialized" placeholder a cell starts in.
    ///
    /// A sentinel is never a meaningful state to enter: the first real
    /// request committed away from it always produces an entry effect.
    ///
    /// Default implementation returns `false`.
    fn is_sentinel(&self) -> bool {
        false
    }
}
