//! Hanami Storefront library.
//!
//! Product catalog, search, and the cart/wishlist state machine behind the
//! Hanami storefront, packaged as a library so any front end (the `hanami`
//! CLI, tests) can drive it.
//!
//! # Architecture
//!
//! - [`store`] - pure `transition(state, action)` plus the dispatching [`store::Store`]
//! - [`persistence`] - observer that saves cart/wishlist, and startup rehydration
//! - [`storage`] - durable key-value backends
//! - [`catalog`] - catalog sources (mock fixture, `moka` cache)
//! - [`state`] - [`state::AppState`], the explicitly owned session
//! - [`search`], [`checkout`], [`routes`], [`notice`] - what the views need

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod notice;
pub mod persistence;
pub mod routes;
pub mod search;
pub mod state;
pub mod storage;
pub mod store;

pub use error::{AppError, Result};
pub use state::AppState;
