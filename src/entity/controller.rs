//! Player entity driven by a tick scheduler.

use super::hooks::{NoHooks, PlayerHooks};
use super::pose::{Pose, PoseTarget};
use super::state::PlayerState;
use crate::builder::ControllerBuilder;
use crate::config::ControllerConfig;
use crate::core::{State, StateCell, StateHistory};
use crate::lifecycle::{EntityId, LifecycleError, LifecycleNotifier, SubscriptionId};
use crate::scheduler::{CallbackId, TickFlow, TickScheduler};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, trace, warn};

/// One simulated player.
///
/// Gameplay code calls the `request_*` methods at any time; nothing changes
/// until the next [`on_physics_tick`](Self::on_physics_tick), which commits
/// the latest request, runs its entry effect, then runs physics behavior.
/// [`on_frame_tick`](Self::on_frame_tick) only ever sees committed state.
///
/// After [`destroy`](Self::destroy) every other operation returns
/// [`LifecycleError::Destroyed`].
///
/// # Example
///
/// ```rust
/// use tickstate::entity::{EntityController, PlayerState, Transform, Vec3};
///
/// let transform = Transform::new(Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO);
/// let mut player = EntityController::builder(transform).build().unwrap();
///
/// player.request_start().unwrap();
/// assert_eq!(player.current_state().unwrap(), PlayerState::Uninitialized);
///
/// player.on_physics_tick().unwrap();
/// assert_eq!(player.current_state().unwrap(), PlayerState::Active);
/// ```
pub struct EntityController<T: PoseTarget, H: PlayerHooks<T> = NoHooks> {
    id: EntityId,
    cell: StateCell<PlayerState>,
    captured_pose: Pose,
    target: T,
    hooks: H,
    on_destroyed: LifecycleNotifier<EntityController<T, H>>,
    destroyed: bool,
    tick: u64,
    trace_ticks: bool,
}

impl<T: PoseTarget> EntityController<T, NoHooks> {
    /// Start building a controller for `target`.
    pub fn builder(target: T) -> ControllerBuilder<T, NoHooks> {
        ControllerBuilder::new(target)
    }
}

impl<T: PoseTarget, H: PlayerHooks<T>> EntityController<T, H> {
    pub(crate) fn from_parts(
        id: EntityId,
        captured_pose: Pose,
        target: T,
        hooks: H,
        config: &ControllerConfig,
    ) -> Self {
        let history = match config.history_limit {
            Some(limit) => StateHistory::bounded(limit),
            None => StateHistory::new(),
        };
        debug!(entity = %id, ?captured_pose, "pose captured");
        Self {
            id,
            cell: StateCell::with_history(PlayerState::Uninitialized, history),
            captured_pose,
            target,
            hooks,
            on_destroyed: LifecycleNotifier::new(),
            destroyed: false,
            tick: 0,
            trace_ticks: config.trace_ticks,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Pose snapshot taken at construction.
    pub fn captured_pose(&self) -> Result<&Pose, LifecycleError> {
        self.ensure_alive()?;
        Ok(&self.captured_pose)
    }

    pub fn request_reset(&mut self) -> Result<(), LifecycleError> {
        self.request(PlayerState::Resetting)
    }

    pub fn request_start(&mut self) -> Result<(), LifecycleError> {
        self.request(PlayerState::Active)
    }

    pub fn request_fail(&mut self) -> Result<(), LifecycleError> {
        self.request(PlayerState::Failed)
    }

    pub fn request_succeed(&mut self) -> Result<(), LifecycleError> {
        self.request(PlayerState::Succeeded)
    }

    fn request(&mut self, state: PlayerState) -> Result<(), LifecycleError> {
        self.ensure_alive()?;
        trace!(entity = %self.id, requested = state.name(), "transition requested");
        self.cell.set_next(state);
        Ok(())
    }

    /// Physics phase: commit barrier, entry effect, then physics behavior.
    pub fn on_physics_tick(&mut self) -> Result<(), LifecycleError> {
        self.ensure_alive()?;
        self.tick += 1;
        if self.trace_ticks {
            trace!(entity = %self.id, tick = self.tick, "physics tick");
        }

        let Self {
            id,
            cell,
            captured_pose,
            target,
            hooks,
            tick,
            ..
        } = self;
        cell.commit_with_at(*tick, |entered| {
            enter(*id, *tick, captured_pose, target, hooks, *entered)
        });

        let state = *self.cell.current_state();
        self.hooks.physics(state, &mut self.target);
        Ok(())
    }

    /// Frame phase: behavior keyed on the committed state only.
    pub fn on_frame_tick(&mut self) -> Result<(), LifecycleError> {
        self.ensure_alive()?;
        if self.trace_ticks {
            trace!(entity = %self.id, tick = self.tick, "frame tick");
        }
        let state = *self.cell.current_state();
        self.hooks.frame(state, &mut self.target);
        Ok(())
    }

    pub fn current_state(&self) -> Result<PlayerState, LifecycleError> {
        self.ensure_alive()?;
        Ok(*self.cell.current_state())
    }

    pub fn pending_state(&self) -> Result<Option<PlayerState>, LifecycleError> {
        self.ensure_alive()?;
        Ok(self.cell.pending_state().copied())
    }

    /// Number of physics ticks this entity has run.
    pub fn tick(&self) -> Result<u64, LifecycleError> {
        self.ensure_alive()?;
        Ok(self.tick)
    }

    pub fn history(&self) -> Result<&StateHistory<PlayerState>, LifecycleError> {
        self.ensure_alive()?;
        Ok(self.cell.history())
    }

    pub fn target(&self) -> Result<&T, LifecycleError> {
        self.ensure_alive()?;
        Ok(&self.target)
    }

    pub fn target_mut(&mut self) -> Result<&mut T, LifecycleError> {
        self.ensure_alive()?;
        Ok(&mut self.target)
    }

    pub fn hooks(&self) -> Result<&H, LifecycleError> {
        self.ensure_alive()?;
        Ok(&self.hooks)
    }

    /// Subscribe to the destruction notice.
    ///
    /// The observer receives this controller, already marked destroyed; only
    /// [`id`](Self::id) and [`is_destroyed`](Self::is_destroyed) are usable
    /// from inside it.
    pub fn on_destroyed<F>(&mut self, observer: F) -> Result<SubscriptionId, LifecycleError>
    where
        F: FnMut(&EntityController<T, H>) + 'static,
    {
        self.ensure_alive()?;
        self.on_destroyed.subscribe(observer)
    }

    /// Remove a destruction observer before teardown.
    pub fn unsubscribe_destroyed(&mut self, id: SubscriptionId) -> Result<bool, LifecycleError> {
        self.ensure_alive()?;
        Ok(self.on_destroyed.unsubscribe(id))
    }

    /// Tear the entity down and notify observers.
    ///
    /// Any pending request is discarded uncommitted. Returns `false` if the
    /// entity was already destroyed, in which case nothing is notified.
    pub fn destroy(&mut self) -> bool {
        if self.destroyed {
            warn!(entity = %self.id, "destroy called on an already destroyed entity");
            return false;
        }
        self.destroyed = true;

        let discarded = self.cell.discard_pending();
        debug!(
            entity = %self.id,
            state = self.cell.current_state().name(),
            discarded = ?discarded,
            "entity destroyed"
        );

        let mut notifier = std::mem::take(&mut self.on_destroyed);
        notifier.fire(self);
        self.on_destroyed = notifier;
        true
    }

    fn ensure_alive(&self) -> Result<(), LifecycleError> {
        if self.destroyed {
            warn!(entity = %self.id, "operation on destroyed entity");
            return Err(LifecycleError::Destroyed { id: self.id });
        }
        Ok(())
    }
}

impl<T, H> EntityController<T, H>
where
    T: PoseTarget + 'static,
    H: PlayerHooks<T> + 'static,
{
    /// Register this entity's physics and frame callbacks with `scheduler`.
    ///
    /// The callbacks hold a weak handle and detach themselves once the entity
    /// is destroyed or dropped.
    pub fn attach<S>(this: &Rc<RefCell<Self>>, scheduler: &mut S) -> (CallbackId, CallbackId)
    where
        S: TickScheduler + ?Sized,
    {
        let physics = Self::callback(Rc::downgrade(this), Self::on_physics_tick);
        let frame = Self::callback(Rc::downgrade(this), Self::on_frame_tick);
        (
            scheduler.register_physics_tick(physics),
            scheduler.register_frame_tick(frame),
        )
    }

    fn callback(
        entity: Weak<RefCell<Self>>,
        phase: fn(&mut Self) -> Result<(), LifecycleError>,
    ) -> Box<dyn FnMut() -> TickFlow> {
        Box::new(move || {
            let Some(entity) = entity.upgrade() else {
                return TickFlow::Detach;
            };
            let mut entity = entity.borrow_mut();
            if entity.is_destroyed() {
                return TickFlow::Detach;
            }
            match phase(&mut *entity) {
                Ok(()) => TickFlow::Continue,
                Err(_) => TickFlow::Detach,
            }
        })
    }
}

/// Entry effect for a newly committed state.
fn enter<T: PoseTarget, H: PlayerHooks<T>>(
    id: EntityId,
    tick: u64,
    captured_pose: &Pose,
    target: &mut T,
    hooks: &mut H,
    state: PlayerState,
) {
    match state {
        PlayerState::Active => {
            debug!(entity = %id, tick, "entered Active: control and movement begin");
            hooks.on_start(target);
        }
        PlayerState::Failed => {
            debug!(entity = %id, tick, "entered Failed: miss presentation");
            hooks.on_fail(target);
        }
        PlayerState::Succeeded => {
            debug!(entity = %id, tick, "entered Succeeded: clear presentation");
            hooks.on_succeed(target);
        }
        PlayerState::Resetting => {
            debug!(
                entity = %id,
                tick,
                pose = ?captured_pose,
                "entered Resetting: restoring captured pose"
            );
            target.restore_pose(captured_pose);
            hooks.on_reset(target);
        }
        PlayerState::Uninitialized => {}
    }
}

impl<T: PoseTarget, H: PlayerHooks<T>> Drop for EntityController<T, H> {
    fn drop(&mut self) {
        if !self.destroyed {
            self.destroy();
        }
    }
}
