//! Flattened product view and in-memory filters over it.
//!
//! Every filter returns a new `ProductCatalog`; the source is never mutated.

use crate::types::Product;

/// Minimum rating for a product to count as highly rated.
pub const HIGH_RATING_THRESHOLD: f64 = 4.0;

/// A product with its rating flattened into top-level fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductView {
    pub id: Option<u32>,
    pub title: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub rating_rate: Option<f64>,
    pub rating_count: Option<u32>,
}

impl ProductView {
    /// In stock when at least one rating has been recorded.
    pub fn is_in_stock(&self) -> bool {
        self.rating_count.is_some_and(|count| count > 0)
    }

    pub fn is_highly_rated(&self) -> bool {
        self.rating_rate.is_some_and(|rate| rate >= HIGH_RATING_THRESHOLD)
    }
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            description: product.description.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
            rating_rate: product.rating.and_then(|rating| rating.rate),
            rating_count: product.rating.and_then(|rating| rating.count),
        }
    }
}

/// A collection of product views with its size and, once filtered by
/// category, the category it was narrowed to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCatalog {
    products: Vec<ProductView>,
    category: Option<String>,
}

impl ProductCatalog {
    pub fn from_products(products: &[Product]) -> Self {
        Self {
            products: products.iter().map(ProductView::from).collect(),
            category: None,
        }
    }

    pub fn products(&self) -> &[ProductView] {
        &self.products
    }

    pub fn total_count(&self) -> usize {
        self.products.len()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Products whose category equals `category`, ignoring case.
    pub fn filter_by_category(&self, category: &str) -> Self {
        let wanted = category.to_lowercase();
        Self {
            products: self.select(|product| {
                product
                    .category
                    .as_deref()
                    .is_some_and(|c| c.to_lowercase() == wanted)
            }),
            category: Some(category.to_string()),
        }
    }

    /// Products priced at `min_price` or above. Products without a price
    /// are dropped.
    pub fn filter_by_min_price(&self, min_price: f64) -> Self {
        Self {
            products: self.select(|product| product.price.is_some_and(|price| price >= min_price)),
            category: None,
        }
    }

    pub fn highly_rated(&self) -> Self {
        Self {
            products: self.select(ProductView::is_highly_rated),
            category: None,
        }
    }

    fn select(&self, keep: impl Fn(&ProductView) -> bool) -> Vec<ProductView> {
        self.products.iter().filter(|p| keep(p)).cloned().collect()
    }
}
