//! Build errors for entity controllers.

use thiserror::Error;

/// Errors that can occur when building an entity controller.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Pose source unavailable at capture time. Check the target's pivot is attached")]
    PoseUnavailable,

    #[error("Invalid controller configuration: {0}")]
    InvalidConfig(String),
}
