//! Relevance ranking for the "related products" panel.
//!
//! Pure: same inputs always produce the same sequence, no I/O. The ordering
//! is recomputed on every render and never cached.

use crate::catalog::{Catalog, CategoryIndex, ProductRecord};

/// Relevance tier of a candidate relative to the viewed product.
/// Lower ranks first; ties keep catalog order (stable sort).
fn relevance_tier(candidate: &ProductRecord, current: &ProductRecord, index: &CategoryIndex) -> u8 {
    if candidate.item_type == current.item_type {
        0
    } else if index.shares_category(&candidate.item_type, &current.item_type) {
        1
    } else {
        2
    }
}

/// Order the catalog for the related-items panel, excluding the currently
/// viewed product: exact item-type matches first, then items sharing at
/// least one category with it, then everything else in catalog order.
pub fn rank_related<'a>(
    catalog: &'a Catalog,
    current: &ProductRecord,
    index: &CategoryIndex,
) -> Vec<&'a ProductRecord> {
    let mut related: Vec<&ProductRecord> = catalog
        .products()
        .iter()
        .filter(|p| p.id != current.id)
        .collect();

    // sort_by_key is stable, so equal tiers preserve catalog order
    related.sort_by_key(|p| relevance_tier(p, current, index));
    related
}
