use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::types::errors::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    SoldOut,
    ComingSoon,
}

/// One entry of the static product catalog. Read-only after load; the rest
/// of the crate only holds references into the `Catalog`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    /// Decimal price string as displayed, e.g. "10000.00".
    pub price: String,
    pub image_url: String,
    pub stock: StockStatus,
    /// Default description shown until a locale-specific one is generated.
    pub description: String,
    /// Free-form item type tag, e.g. "shoe". Drives relevance ranking.
    pub item_type: String,
}

/// Ordered product collection. Catalog order is meaningful: the relevance
/// ranker breaks ties by preserving it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<ProductRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate product ids.
    pub fn new(products: Vec<ProductRecord>) -> CatalogResult<Self> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }
        Ok(Self { products })
    }

    pub fn get(&self, id: &str) -> Option<&ProductRecord> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Category taxonomy: category name -> set of item types it contains.
/// Derived once at startup from static configuration.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    categories: HashMap<String, HashSet<String>>,
}

impl CategoryIndex {
    pub fn new(categories: HashMap<String, HashSet<String>>) -> Self {
        Self { categories }
    }

    /// Names of every category containing the given item type.
    pub fn categories_of(&self, item_type: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .categories
            .iter()
            .filter(|(_, items)| items.contains(item_type))
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Whether two item types appear together in at least one category.
    pub fn shares_category(&self, a: &str, b: &str) -> bool {
        self.categories
            .values()
            .any(|items| items.contains(a) && items.contains(b))
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
