//! Product search and the home page listing.

use hanami_core::Product;

use crate::store::StoreState;

/// Shown when an active search matches nothing.
pub const NO_RESULTS_MESSAGE: &str =
    "Sorry! No product found for your search. Please search for some other great products.";

/// Products whose name contains `query`, ignoring case, in catalog order.
///
/// An empty query matches every product.
#[must_use]
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|product| product.name.to_lowercase().contains(&needle))
        .collect()
}

/// Products carrying a sale discount.
#[must_use]
pub fn sale_products<'a, I>(products: I) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .filter(|product| product.is_on_sale())
        .collect()
}

/// What the home page shows for a given state.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeView<'a> {
    /// The active search query (empty when not searching).
    pub query: &'a str,
    /// Products matching the query.
    pub results: Vec<&'a Product>,
    /// The sale section; empty while a search is active.
    pub on_sale: Vec<&'a Product>,
    pub loading: bool,
}

impl<'a> HomeView<'a> {
    #[must_use]
    pub fn from_state(state: &'a StoreState) -> Self {
        let query = state.search_query.as_str();
        let results = filter_products(&state.products, query);
        let on_sale = if query.is_empty() {
            sale_products(results.iter().copied())
        } else {
            Vec::new()
        };
        Self {
            query,
            results,
            on_sale,
            loading: state.loading,
        }
    }

    #[must_use]
    pub const fn is_searching(&self) -> bool {
        !self.query.is_empty()
    }

    /// Section heading for the main listing.
    #[must_use]
    pub const fn heading(&self) -> &'static str {
        if self.is_searching() {
            "Search Results"
        } else {
            "All Products"
        }
    }

    /// The "nothing found" message, when a search came back empty.
    #[must_use]
    pub fn empty_message(&self) -> Option<&'static str> {
        (self.is_searching() && self.results.is_empty()).then_some(NO_RESULTS_MESSAGE)
    }
}
