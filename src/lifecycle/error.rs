//! Lifecycle error types.

use super::EntityId;
use thiserror::Error;

/// Errors raised when an entity's lifecycle contract is broken.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LifecycleError {
    /// The entity was torn down; the handle is no longer valid
    #[error("Entity {id} has been destroyed")]
    Destroyed { id: EntityId },

    /// The notifier already fired and accepts no more observers
    #[error("Destruction notice already fired")]
    AlreadyFired,
}
