//! Builder API for entity controllers and the `state_enum!` macro.

pub mod controller;
pub mod error;
pub mod macros;

pub use controller::ControllerBuilder;
pub use error::BuildError;
