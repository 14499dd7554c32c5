//! Navigation paths.

use std::fmt;

use hanami_core::ProductId;

/// A page of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Listing and search results (`/`).
    Home,
    /// Product detail (`/product/{id}`).
    Product(ProductId),
    /// Cart (`/cart`).
    Cart,
    /// Any unknown path.
    NotFound,
}

impl Route {
    /// Resolve a path. Trailing slashes and query strings are ignored.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Home,
            ["cart"] => Self::Cart,
            ["product", id] => id
                .parse::<ProductId>()
                .ok()
                .filter(ProductId::is_positive)
                .map_or(Self::NotFound, Self::Product),
            _ => Self::NotFound,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("/"),
            Self::Product(id) => write!(f, "/product/{id}"),
            Self::Cart => f.write_str("/cart"),
            Self::NotFound => f.write_str("/404"),
        }
    }
}
