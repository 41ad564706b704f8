//! Builder for constructing entity controllers.

use crate::builder::error::BuildError;
use crate::config::ControllerConfig;
use crate::entity::{EntityController, NoHooks, PlayerHooks, PoseTarget};
use crate::lifecycle::EntityId;

/// Builder for [`EntityController`] with a fluent API.
///
/// `build` validates the configuration and captures the target's pose; a
/// target that cannot produce a pose fails with
/// [`BuildError::PoseUnavailable`].
pub struct ControllerBuilder<T: PoseTarget, H: PlayerHooks<T> = NoHooks> {
    target: T,
    hooks: H,
    config: ControllerConfig,
    id: Option<EntityId>,
}

impl<T: PoseTarget> ControllerBuilder<T, NoHooks> {
    /// Create a builder for `target` with no hooks and default config.
    pub fn new(target: T) -> Self {
        Self {
            target,
            hooks: NoHooks,
            config: ControllerConfig::default(),
            id: None,
        }
    }
}

impl<T: PoseTarget, H: PlayerHooks<T>> ControllerBuilder<T, H> {
    /// Replace the per-state hooks.
    pub fn hooks<H2: PlayerHooks<T>>(self, hooks: H2) -> ControllerBuilder<T, H2> {
        ControllerBuilder {
            target: self.target,
            hooks,
            config: self.config,
            id: self.id,
        }
    }

    pub fn config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a fixed id instead of a random one.
    pub fn id(mut self, id: EntityId) -> Self {
        self.id = Some(id);
        self
    }

    /// Build the controller.
    /// Returns an error if the config is invalid or no pose can be captured.
    pub fn build(self) -> Result<EntityController<T, H>, BuildError> {
        self.config.validate()?;
        let pose = self
            .target
            .capture_pose()
            .ok_or(BuildError::PoseUnavailable)?;
        let id = self.id.unwrap_or_default();

        Ok(EntityController::from_parts(
            id,
            pose,
            self.target,
            self.hooks,
            &self.config,
        ))
    }
}
