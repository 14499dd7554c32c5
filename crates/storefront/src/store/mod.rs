//! Domain state store.
//!
//! The store owns the single [`StoreState`] of a session. Views read snapshots
//! through [`Store::state`] and request changes with [`Store::dispatch`]; the
//! new state is computed by the pure [`transition`] function and then handed
//! to every subscribed [`StateObserver`]. Side effects such as persistence live
//! in observers, never in the transition.
//!
//! # Example
//!
//! ```rust
//! use hanami_core::ProductId;
//! use hanami_storefront::store::{Store, StoreAction};
//!
//! let mut store = Store::new();
//! store.dispatch(StoreAction::ToggleWishlist(ProductId::new(2)));
//! assert!(store.state().is_in_wishlist(ProductId::new(2)));
//! ```

mod action;
mod reducer;
mod state;

pub use action::StoreAction;
pub use reducer::transition;
pub use state::StoreState;

use tracing::trace;

/// Reacts to state changes after a dispatch.
///
/// Observers run synchronously, in subscription order, after the new state is
/// installed. They cannot alter the state or fail the dispatch.
pub trait StateObserver: Send + Sync {
    fn state_changed(&mut self, previous: &StoreState, current: &StoreState);
}

impl<F> StateObserver for F
where
    F: FnMut(&StoreState, &StoreState) + Send + Sync,
{
    fn state_changed(&mut self, previous: &StoreState, current: &StoreState) {
        self(previous, current);
    }
}

/// Stateful wrapper around [`transition`].
///
/// Dispatch takes `&mut self`, so actions are applied strictly one at a time
/// in the order they are dispatched.
#[derive(Default)]
pub struct Store {
    state: StoreState,
    observers: Vec<Box<dyn StateObserver>>,
}

impl Store {
    /// Create a store with empty defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer for subsequent dispatches.
    pub fn subscribe(&mut self, observer: impl StateObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// The current snapshot.
    #[must_use]
    pub const fn state(&self) -> &StoreState {
        &self.state
    }

    /// Apply `action` and notify observers. Returns the new snapshot.
    pub fn dispatch(&mut self, action: StoreAction) -> &StoreState {
        trace!(action = action.name(), "dispatch");
        let next = transition(&self.state, &action);
        let previous = std::mem::replace(&mut self.state, next);
        for observer in &mut self.observers {
            observer.state_changed(&previous, &self.state);
        }
        &self.state
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
