//! Product catalog: immutable reference data for everything placeable on the
//! canvas.
//!
//! The catalog is supplied once at startup and never mutated. Each record
//! carries the product's unscaled rendered footprint and unit price; the
//! placement store resolves instances against it and the quote aggregator
//! prices them from it.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::{Deserialize, Serialize};

/// Built-in product data shipped with the crate.
const CATALOG_JSON: &str = include_str!("../assets/catalog.json");

/// Product category shown as a dock filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Smart displays.
    Display,
    /// Speakers.
    Audio,
    /// Cameras and doorbells.
    Security,
    /// Thermostats.
    Climate,
}

/// Unscaled rendered size of a product on the canvas, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub width: f64,
    pub height: f64,
}

/// A catalog product. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    /// Unique product key, e.g. `"nest-hub-max"`.
    pub id: String,
    /// English display name.
    pub name: String,
    /// Display name in the site's locale.
    pub localized_name: String,
    /// Reference to the product icon asset.
    pub image: String,
    /// Unscaled rendered size on the canvas.
    pub footprint: Footprint,
    /// Whole-currency unit price.
    pub price: u64,
    pub category: Category,
}

/// Read-only, insertion-ordered product collection.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<CatalogProduct>,
}

impl Catalog {
    /// Load the built-in product set shipped with the crate.
    ///
    /// # Panics
    ///
    /// Panics if the embedded data set is malformed, which is a packaging
    /// defect rather than a runtime condition.
    #[must_use]
    pub fn builtin() -> Self {
        let products = serde_json::from_str(CATALOG_JSON).expect("embedded catalog is well-formed");
        Self { products }
    }

    /// Build a catalog from an externally supplied product list.
    #[must_use]
    pub fn from_products(products: Vec<CatalogProduct>) -> Self {
        Self { products }
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CatalogProduct> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[CatalogProduct] {
        &self.products
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` if the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
