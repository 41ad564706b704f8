//! Extension points for per-state player behavior.

use super::state::PlayerState;

/// Domain behavior plugged into an [`EntityController`](super::EntityController).
///
/// Every method defaults to doing nothing. Entry hooks run once, on the
/// physics tick that commits the state. `physics` and `frame` run every tick
/// with the committed state.
///
/// `on_reset` runs after the captured pose has already been restored.
pub trait PlayerHooks<T> {
    fn on_start(&mut self, _target: &mut T) {}

    fn on_fail(&mut self, _target: &mut T) {}

    fn on_succeed(&mut self, _target: &mut T) {}

    fn on_reset(&mut self, _target: &mut T) {}

    fn physics(&mut self, _state: PlayerState, _target: &mut T) {}

    fn frame(&mut self, _state: PlayerState, _target: &mut T) {}
}

/// Hooks that do nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHooks;

impl<T> PlayerHooks<T> for NoHooks {}
