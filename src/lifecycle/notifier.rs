//! Single-fire observer list.

use super::error::LifecycleError;
use std::fmt;

/// Token returned by [`LifecycleNotifier::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer<T> = Box<dyn FnMut(&T)>;

/// Broadcasts one destruction notice to every subscriber, once.
///
/// After [`fire`](Self::fire) has run, observers are dropped, further fires
/// are ignored and new subscriptions are refused.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use tickstate::lifecycle::LifecycleNotifier;
///
/// let seen = Rc::new(Cell::new(0));
/// let mut notifier = LifecycleNotifier::<&str>::new();
/// let counter = Rc::clone(&seen);
/// notifier.subscribe(move |_| counter.set(counter.get() + 1)).unwrap();
///
/// assert!(notifier.fire(&"player"));
/// assert!(!notifier.fire(&"player"));
/// assert_eq!(seen.get(), 1);
/// ```
pub struct LifecycleNotifier<T> {
    observers: Vec<(SubscriptionId, Observer<T>)>,
    next_id: u64,
    fired: bool,
}

impl<T> LifecycleNotifier<T> {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            next_id: 0,
            fired: false,
        }
    }

    /// Register an observer. Fails once the notice has fired.
    pub fn subscribe<F>(&mut self, observer: F) -> Result<SubscriptionId, LifecycleError>
    where
        F: FnMut(&T) + 'static,
    {
        if self.fired {
            return Err(LifecycleError::AlreadyFired);
        }
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        Ok(id)
    }

    /// Remove an observer before the notice fires.
    ///
    /// Returns `false` if the id is unknown or the notice already fired.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        if self.fired {
            return false;
        }
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Deliver the notice to every observer in subscription order.
    ///
    /// Returns `true` on the first call and `false` on every later one.
    pub fn fire(&mut self, subject: &T) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        for (_, mut observer) in std::mem::take(&mut self.observers) {
            observer(subject);
        }
        true
    }

    pub fn is_fired(&self) -> bool {
        self.fired
    }

    /// Number of observers still waiting for the notice.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<T> Default for LifecycleNotifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for LifecycleNotifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleNotifier")
            .field("observers", &self.observers.len())
            .field("fired", &self.fired)
            .finish()
    }
}
