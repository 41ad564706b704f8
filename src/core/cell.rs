//! Two-phase state holder: request now, commit at the tick barrier.

use super::history::{StateHistory, StateTransition};
use super::state::State;
use chrono::Utc;
use tracing::debug;

/// Holds a committed state and at most one pending request.
///
/// `set_next` only records intent. The committed state changes exclusively
/// inside [`commit`](Self::commit), which the owner calls once per tick. Any
/// number of requests between two commits collapse to the last one.
///
/// # Example
///
/// ```rust
/// use tickstate::core::StateCell;
/// use tickstate::state_enum;
///
/// state_enum! {
///     enum Light {
///         Unset,
///         Red,
///         Green,
///     }
///     sentinel: Unset
/// }
///
/// let mut cell = StateCell::new(Light::Unset);
/// cell.set_next(Light::Red);
/// cell.set_next(Light::Green);
/// assert_eq!(cell.current_state(), &Light::Unset);
///
/// assert!(cell.commit());
/// assert_eq!(cell.current_state(), &Light::Green);
/// assert!(!cell.commit());
/// ```
#[derive(Clone, Debug)]
pub struct StateCell<S: State> {
    current: S,
    pending: Option<S>,
    history: StateHistory<S>,
    commit_count: u64,
    last_barrier: u64,
}

impl<S: State> StateCell<S> {
    /// Create a cell whose committed state is `initial`, with unbounded history.
    pub fn new(initial: S) -> Self {
        Self::with_history(initial, StateHistory::new())
    }

    /// Create a cell recording commits into `history`.
    pub fn with_history(initial: S, history: StateHistory<S>) -> Self {
        Self {
            current: initial,
            pending: None,
            history,
            commit_count: 0,
            last_barrier: 0,
        }
    }

    /// Request a transition to `next`. Overwrites any earlier request.
    pub fn set_next(&mut self, next: S) {
        self.pending = Some(next);
    }

    /// Run the commit barrier, numbering it one past the previous barrier.
    ///
    /// Returns `true` only when the commit took effect; the caller uses that
    /// to decide whether to dispatch an entry effect.
    pub fn commit(&mut self) -> bool {
        let tick = self.last_barrier + 1;
        self.commit_at(tick)
    }

    /// Run the commit barrier for the given tick.
    ///
    /// A pending request equal to the current state is dropped without
    /// effect, so re-requesting the current state never re-fires its entry
    /// effect. The one exception is the first commit out of a sentinel: any
    /// pending request, even the sentinel itself, is committed.
    pub fn commit_at(&mut self, tick: u64) -> bool {
        self.last_barrier = tick;

        let Some(next) = self.pending.take() else {
            return false;
        };
        let leaving_sentinel = self.commit_count == 0 && self.current.is_sentinel();
        if next == self.current && !leaving_sentinel {
            return false;
        }

        debug!(
            from = self.current.name(),
            to = next.name(),
            tick,
            "state committed"
        );
        let from = std::mem::replace(&mut self.current, next);
        self.history.record(StateTransition {
            from,
            to: self.current.clone(),
            tick,
            timestamp: Utc::now(),
        });
        self.commit_count += 1;
        true
    }

    /// Commit and, if the state changed, run `on_enter` with the newly
    /// committed state exactly once.
    pub fn commit_with<F>(&mut self, on_enter: F) -> bool
    where
        F: FnOnce(&S),
    {
        let tick = self.last_barrier + 1;
        self.commit_with_at(tick, on_enter)
    }

    /// [`commit_with`](Self::commit_with) for the given tick.
    pub fn commit_with_at<F>(&mut self, tick: u64, on_enter: F) -> bool
    where
        F: FnOnce(&S),
    {
        let changed = self.commit_at(tick);
        if changed {
            on_enter(&self.current);
        }
        changed
    }

    /// The committed state.
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// The request that the next commit will consider, if any.
    pub fn pending_state(&self) -> Option<&S> {
        self.pending.as_ref()
    }

    /// Whether a request is waiting for the next commit.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop any pending request without committing it.
    pub(crate) fn discard_pending(&mut self) -> Option<S> {
        self.pending.take()
    }

    /// Number of commits that took effect.
    pub fn commit_count(&self) -> u64 {
        self.commit_count
    }

    /// Tick number of the most recent barrier, changed or not.
    pub fn last_barrier(&self) -> u64 {
        self.last_barrier
    }

    /// Transitions committed so far, oldest first.
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }
}
