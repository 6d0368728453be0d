use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::catalog::store::{Catalog, CategoryIndex, ProductRecord};
use crate::types::errors::CatalogResult;

/// On-disk shape of the catalog configuration file: the product list plus
/// the category taxonomy, both static.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub products: Vec<ProductRecord>,
    #[serde(default)]
    pub categories: HashMap<String, HashSet<String>>,
}

/// Load the catalog and category index from a JSON configuration file.
///
/// Unlike soft-fallback config (schemas, themes), a missing or corrupt
/// catalog is a hard error: the page cannot render without products.
pub fn load_catalog(path: &Path) -> CatalogResult<(Catalog, CategoryIndex)> {
    log::info!("Loading catalog from: {}", path.display());

    let contents = std::fs::read_to_string(path).inspect_err(|e| {
        log::warn!("Catalog file unreadable at {}: {e}", path.display());
    })?;

    let config: CatalogConfig = serde_json::from_str(&contents).inspect_err(|e| {
        log::warn!("Catalog file corrupt at {}: {e}", path.display());
    })?;

    let catalog = Catalog::new(config.products)?;
    if catalog.is_empty() {
        log::warn!("Catalog loaded with zero products");
    } else {
        log::info!("Catalog loaded: {} products", catalog.len());
    }

    Ok((catalog, CategoryIndex::new(config.categories)))
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
