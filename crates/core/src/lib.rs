//! Hanami Core - Shared domain types.
//!
//! This crate provides the types shared by every Hanami component:
//! - `storefront` - Catalog, cart/wishlist state machine, persistence
//! - `cli` - Command-line front end that renders state and dispatches actions
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no storage,
//! no async runtime. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, decimal prices, products and cart lines

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
