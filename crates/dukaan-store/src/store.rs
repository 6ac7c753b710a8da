//! Generic reducer-driven state container.
//!
//! A [`Store`] owns one piece of state and changes it only through actions
//! handed to its [`Reducer`]. Observers are notified after every dispatch with
//! the new state and a monotonically increasing version.

use std::fmt;
use std::sync::Arc;

/// An action that can be dispatched to a store.
pub trait StoreAction {
    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Pure state transition.
pub trait Reducer {
    type State;
    type Action: StoreAction;

    fn reduce(state: &mut Self::State, action: Self::Action);
}

/// Observer for state changes.
pub trait StoreObserver<S>: Send + Sync {
    /// Called after each dispatch.
    fn on_change(&self, state: &S, version: u64);
}

impl<S, F> StoreObserver<S> for F
where
    F: Fn(&S, u64) + Send + Sync,
{
    fn on_change(&self, state: &S, version: u64) {
        self(state, version)
    }
}

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A state container driven by a reducer.
pub struct Store<R: Reducer> {
    state: R::State,
    version: u64,
    observers: Vec<(SubscriptionId, Arc<dyn StoreObserver<R::State>>)>,
    next_subscription: u64,
    label: &'static str,
}

impl<R: Reducer> Store<R> {
    pub fn new(label: &'static str, state: R::State) -> Self {
        Self {
            state,
            version: 0,
            observers: Vec::new(),
            next_subscription: 0,
            label,
        }
    }

    /// Current state.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Number of dispatches applied so far.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Apply an action and notify observers.
    pub fn dispatch(&mut self, action: R::Action) {
        tracing::debug!(store = self.label, action = action.name(), "dispatch");
        R::reduce(&mut self.state, action);
        self.version += 1;
        for (_, observer) in &self.observers {
            observer.on_change(&self.state, self.version);
        }
    }

    /// Register an observer.
    pub fn subscribe(&mut self, observer: impl StoreObserver<R::State> + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Arc::new(observer)));
        id
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Take the state out, dropping observers.
    pub fn into_state(self) -> R::State {
        self.state
    }
}

impl<R> Default for Store<R>
where
    R: Reducer,
    R::State: Default,
{
    fn default() -> Self {
        Self::new("store", R::State::default())
    }
}

impl<R> fmt::Debug for Store<R>
where
    R: Reducer,
    R::State: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("label", &self.label)
            .field("version", &self.version)
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
