//! Commit history tracking.
//!
//! Every transition a [`StateCell`](super::StateCell) commits is recorded here
//! together with the tick it happened on. The history is diagnostic only and
//! can be bounded so long-running simulations do not grow it without limit.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single committed transition.
///
/// # Example
///
/// ```rust
/// use tickstate::core::{State, StateTransition};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Lamp {
///     Off,
///     On,
/// }
///
/// impl State for Lamp {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::On => "On",
///         }
///     }
/// }
///
/// let transition = StateTransition {
///     from: Lamp::Off,
///     to: Lamp::On,
///     tick: 3,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.tick, 3);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state that was current before the commit
    pub from: S,
    /// The state that became current
    pub to: S,
    /// Tick on which the commit barrier ran
    pub tick: u64,
    /// Wall-clock time of the commit
    pub timestamp: DateTime<Utc>,
}

/// Ordered, optionally bounded history of committed transitions.
///
/// When a limit is set, recording past it evicts the oldest entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    limit: Option<usize>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new, unbounded, empty history.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: None,
        }
    }

    /// Create an empty history that keeps at most `limit` transitions.
    ///
    /// A limit of zero keeps nothing.
    pub fn bounded(limit: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(limit),
            limit: Some(limit),
        }
    }

    /// Maximum number of retained transitions, if bounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Record a committed transition, evicting the oldest one if the
    /// history is full.
    pub fn record(&mut self, transition: StateTransition<S>) {
        if let Some(limit) = self.limit {
            if limit == 0 {
                return;
            }
            while self.transitions.len() >= limit {
                self.transitions.pop_front();
            }
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed by the retained transitions.
    ///
    /// Returns the `from` state of the oldest retained transition followed
    /// by every `to` state in order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tickstate::core::{State, StateHistory, StateTransition};
    /// use serde::{Deserialize, Serialize};
    /// use chrono::Utc;
    ///
    /// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    /// enum Phase { One, Two, Three }
    ///
    /// impl State for Phase {
    ///     fn name(&self) -> &str {
    ///         match self {
    ///             Self::One => "One",
    ///             Self::Two => "Two",
    ///             Self::Three => "Three",
    ///         }
    ///     }
    /// }
    ///
    /// let mut history = StateHistory::new();
    /// history.record(StateTransition {
    ///     from: Phase::One,
    ///     to: Phase::Two,
    ///     tick: 1,
    ///     timestamp: Utc::now(),
    /// });
    /// history.record(StateTransition {
    ///     from: Phase::Two,
    ///     to: Phase::Three,
    ///     tick: 4,
    ///     timestamp: Utc::now(),
    /// });
    ///
    /// let path = history.get_path();
    /// assert_eq!(path, vec![&Phase::One, &Phase::Two, &Phase::Three]);
    /// ```
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    /// Wall-clock duration between the oldest and newest retained commit.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.transitions.front()?;
        let last = self.transitions.back()?;
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Iterate over retained transitions, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition<S>> {
        self.transitions.iter()
    }

    /// Most recently committed transition.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    /// Number of retained transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether no transitions are retained.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
