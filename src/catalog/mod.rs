mod loader;
mod store;

pub use loader::{load_catalog, CatalogConfig};
pub use store::{Catalog, CategoryIndex, ProductRecord, StockStatus};
