//! Cart and wishlist persistence.
//!
//! Saving is a [`StateObserver`]: after every dispatch, [`PersistenceObserver`]
//! compares the previous and current snapshots and writes the cart and/or the
//! wishlist when they changed. Writes are fire-and-forget; a failed write is
//! logged and the session carries on.
//!
//! Loading happens once, before the observer is subscribed, via [`rehydrate`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, instrument, warn};

use hanami_core::{CartItem, ProductId};

use crate::storage::{CART_KEY, KeyValueStorage, StorageError, WISHLIST_KEY};
use crate::store::{StateObserver, Store, StoreAction, StoreState};

/// How persisted collections are fed back into a fresh store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RehydrationStrategy {
    /// One `LOAD_CART` and one `LOAD_WISHLIST` dispatch.
    #[default]
    Load,
    /// Re-issue the user actions: `ADD_TO_CART` per line followed by
    /// `UPDATE_QUANTITY` when the quantity is above one, and `TOGGLE_WISHLIST`
    /// per id.
    ///
    /// `UPDATE_QUANTITY` targets every size of a product, so a cart holding one
    /// product in several sizes with different quantities is not restored
    /// exactly.
    Replay,
}

impl RehydrationStrategy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Replay => "replay",
        }
    }
}

impl fmt::Display for RehydrationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`RehydrationStrategy`].
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown rehydration strategy {0:?} (expected \"load\" or \"replay\")")]
pub struct UnknownStrategy(String);

impl FromStr for RehydrationStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "load" => Ok(Self::Load),
            "replay" => Ok(Self::Replay),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}

/// What [`rehydrate`] restored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rehydrated {
    /// Cart lines after rehydration.
    pub cart_lines: usize,
    /// Wishlist entries after rehydration.
    pub wishlist_items: usize,
    /// Collections that were present but unreadable and therefore skipped.
    pub discarded: usize,
}

/// Restore the persisted cart and wishlist into `store`.
///
/// A missing key leaves the collection empty. A value that cannot be read or
/// parsed is logged at `warn` and skipped; startup always continues. A value
/// that was read but does not parse is also removed from storage, so later
/// sessions start clean even if the collection never changes.
#[instrument(skip(store, storage))]
pub fn rehydrate<S>(store: &mut Store, storage: &S, strategy: RehydrationStrategy) -> Rehydrated
where
    S: KeyValueStorage + ?Sized,
{
    let mut discarded = 0;

    match read::<Vec<CartItem>, _>(storage, CART_KEY) {
        Ok(Some(items)) => match strategy {
            RehydrationStrategy::Load => {
                store.dispatch(StoreAction::LoadCart(items));
            }
            RehydrationStrategy::Replay => replay_cart(store, items),
        },
        Ok(None) => {}
        Err(e) => {
            discard(storage, CART_KEY, &e);
            discarded += 1;
        }
    }

    match read::<Vec<ProductId>, _>(storage, WISHLIST_KEY) {
        Ok(Some(ids)) => match strategy {
            RehydrationStrategy::Load => {
                store.dispatch(StoreAction::LoadWishlist(ids));
            }
            RehydrationStrategy::Replay => {
                for id in ids {
                    store.dispatch(StoreAction::ToggleWishlist(id));
                }
            }
        },
        Ok(None) => {}
        Err(e) => {
            discard(storage, WISHLIST_KEY, &e);
            discarded += 1;
        }
    }

    let restored = Rehydrated {
        cart_lines: store.state().cart.len(),
        wishlist_items: store.state().wishlist.len(),
        discarded,
    };
    info!(
        cart_lines = restored.cart_lines,
        wishlist_items = restored.wishlist_items,
        "rehydrated store"
    );
    restored
}

fn discard<S>(storage: &S, key: &str, error: &StorageError)
where
    S: KeyValueStorage + ?Sized,
{
    warn!(key, error = %error, "discarding persisted value");
    if matches!(error, StorageError::Serialization { .. })
        && let Err(e) = storage.remove(key)
    {
        warn!(key, error = %e, "failed to remove malformed value");
    }
}

fn replay_cart(store: &mut Store, items: Vec<CartItem>) {
    for item in items {
        let product_id = item.product_id();
        let quantity = item.quantity;
        store.dispatch(StoreAction::AddToCart {
            product: item.product,
            size: item.size,
        });
        if quantity > 1 {
            store.dispatch(StoreAction::UpdateQuantity {
                product_id,
                quantity: i64::from(quantity),
            });
        }
    }
}

fn read<T, S>(storage: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: KeyValueStorage + ?Sized,
{
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StorageError::Serialization {
            key: key.to_string(),
            source,
        })
}

/// Observer that writes the cart and wishlist whenever they change.
#[derive(Debug, Clone)]
pub struct PersistenceObserver<S> {
    storage: S,
}

impl<S: KeyValueStorage> PersistenceObserver<S> {
    #[must_use]
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let result = serde_json::to_string(value)
            .map_err(|source| StorageError::Serialization {
                key: key.to_string(),
                source,
            })
            .and_then(|json| self.storage.set(key, &json));
        if let Err(e) = result {
            warn!(key, error = %e, "failed to persist");
        }
    }
}

impl<S: KeyValueStorage> StateObserver for PersistenceObserver<S> {
    fn state_changed(&mut self, previous: &StoreState, current: &StoreState) {
        if previous.cart != current.cart {
            self.write(CART_KEY, &current.cart);
        }
        if previous.wishlist != current.wishlist {
            self.write(WISHLIST_KEY, &current.wishlist);
        }
    }
}
