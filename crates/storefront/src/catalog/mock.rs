//! In-memory catalog fixture.

use std::time::Duration;

use tracing::{debug, instrument};

use hanami_core::{Price, Product, ProductId};

use super::{CatalogError, CatalogSource};

/// Catalog serving the fixed Hanami collection after a simulated delay.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    products: Vec<Product>,
    list_latency: Duration,
    item_latency: Duration,
}

impl MockCatalog {
    /// Delay before a full listing is returned.
    pub const DEFAULT_LIST_LATENCY: Duration = Duration::from_millis(1000);
    /// Delay before a single-product lookup is returned.
    pub const DEFAULT_ITEM_LATENCY: Duration = Duration::from_millis(500);

    /// The fixture catalog with default latencies.
    #[must_use]
    pub fn new() -> Self {
        Self::with_products(fixture_products())
    }

    /// A catalog over arbitrary products with default latencies.
    #[must_use]
    pub const fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            list_latency: Self::DEFAULT_LIST_LATENCY,
            item_latency: Self::DEFAULT_ITEM_LATENCY,
        }
    }

    /// Override the simulated delays (use `Duration::ZERO` in tests).
    #[must_use]
    pub fn with_latency(mut self, list: Duration, item: Duration) -> Self {
        self.list_latency = list;
        self.item_latency = item;
        self
    }

    async fn delay(latency: Duration) {
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSource for MockCatalog {
    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<Product>, CatalogError> {
        Self::delay(self.list_latency).await;
        debug!(count = self.products.len(), "listing catalog");
        Ok(self.products.clone())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        Self::delay(self.item_latency).await;
        Ok(self.products.iter().find(|p| p.id == id).cloned())
    }
}

fn sizes(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

/// The Hanami spring collection.
#[must_use]
pub fn fixture_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Sakura Blossom Dress".to_string(),
            price: Price::from_cents(8999),
            original_price: Some(Price::from_cents(11999)),
            image: "https://images.unsplash.com/photo-1649972904349-6e44c42644a7?w=500&h=600&fit=crop".to_string(),
            category: "Dresses".to_string(),
            rating: 4.8,
            is_new: true,
            in_stock: true,
            description: "A beautiful flowing dress inspired by cherry blossoms. Perfect for spring occasions with its delicate floral pattern and comfortable fit.".to_string(),
            sizes: sizes(&["XS", "S", "M", "L", "XL"]),
            discount: Some(25),
        },
        Product {
            id: ProductId::new(2),
            name: "Zen Garden Kimono".to_string(),
            price: Price::from_cents(15600),
            original_price: None,
            image: "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?w=500&h=600&fit=crop".to_string(),
            category: "Outerwear".to_string(),
            rating: 4.9,
            is_new: false,
            in_stock: true,
            description: "Traditional-inspired kimono with modern touches. Made from premium silk with intricate embroidery.".to_string(),
            sizes: sizes(&["S", "M", "L", "XL"]),
            discount: None,
        },
        Product {
            id: ProductId::new(3),
            name: "Minimalist White Tee".to_string(),
            price: Price::from_cents(4500),
            original_price: None,
            image: "https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5?w=500&h=600&fit=crop".to_string(),
            category: "Tops".to_string(),
            rating: 4.5,
            is_new: false,
            in_stock: false,
            description: "Essential white t-shirt made from organic cotton. A wardrobe staple that pairs with everything.".to_string(),
            sizes: sizes(&["XS", "S", "M", "L", "XL", "XXL"]),
            discount: None,
        },
        Product {
            id: ProductId::new(4),
            name: "Sunset Orange Cardigan".to_string(),
            price: Price::from_cents(7899),
            original_price: Some(Price::from_cents(9899)),
            image: "https://images.unsplash.com/photo-1465146344425-f00d5f5c8f07?w=500&h=600&fit=crop".to_string(),
            category: "Outerwear".to_string(),
            rating: 4.7,
            is_new: true,
            in_stock: true,
            description: "Cozy cardigan in a beautiful sunset orange shade. Perfect for layering during cooler days.".to_string(),
            sizes: sizes(&["S", "M", "L", "XL"]),
            discount: Some(20),
        },
        Product {
            id: ProductId::new(5),
            name: "Floral Pattern Blouse".to_string(),
            price: Price::from_cents(6750),
            original_price: None,
            image: "https://images.unsplash.com/photo-1582562124811-c09040d0a901?w=500&h=600&fit=crop".to_string(),
            category: "Tops".to_string(),
            rating: 4.6,
            is_new: false,
            in_stock: true,
            description: "Elegant blouse featuring delicate floral patterns. Made from breathable fabric for all-day comfort.".to_string(),
            sizes: sizes(&["XS", "S", "M", "L"]),
            discount: None,
        },
        Product {
            id: ProductId::new(6),
            name: "Evening Elegance Dress".to_string(),
            price: Price::from_cents(13499),
            original_price: Some(Price::from_cents(17999)),
            image: "https://images.unsplash.com/photo-1649972904349-6e44c42644a7?w=500&h=600&fit=crop".to_string(),
            category: "Dresses".to_string(),
            rating: 4.9,
            is_new: false,
            in_stock: true,
            description: "Sophisticated evening dress perfect for special occasions. Features a flattering silhouette and premium fabric.".to_string(),
            sizes: sizes(&["XS", "S", "M", "L", "XL"]),
            discount: Some(25),
        },
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn instant() -> MockCatalog {
        MockCatalog::new().with_latency(Duration::ZERO, Duration::ZERO)
    }

    #[test]
    fn test_fixture_is_valid() {
        let products = fixture_products();
        assert_eq!(products.len(), 6);
        for product in &products {
            product.validate().unwrap();
        }
        let ids: HashSet<_> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[tokio::test]
    async fn test_list_all_returns_catalog_order() {
        let products = instant().list_all().await.unwrap();
        let ids: Vec<i32> = products.iter().map(|p| p.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let catalog = instant();
        let kimono = catalog.get_by_id(ProductId::new(2)).await.unwrap().unwrap();
        assert_eq!(kimono.name, "Zen Garden Kimono");
        assert!(catalog.get_by_id(ProductId::new(42)).await.unwrap().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_listing_waits_for_simulated_latency() {
        let catalog = MockCatalog::new();
        let started = tokio::time::Instant::now();
        catalog.list_all().await.unwrap();
        assert!(started.elapsed() >= MockCatalog::DEFAULT_LIST_LATENCY);
    }
}
