//! Core types for Hanami.
//!
//! This module provides type-safe wrappers for the storefront's domain concepts.

pub mod cart;
pub mod id;
pub mod price;
pub mod product;

pub use cart::CartItem;
pub use id::*;
pub use price::Price;
pub use product::{Product, ProductError};
