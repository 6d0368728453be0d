//! Tag data model and the generation service wire format.
//!
//! The service returns per-tag metrics as *partial* objects; any missing or
//! non-numeric field falls back to an optimistic default, and every merged
//! value is clamped to `[0, 1]`.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::services::classifier::clamp_score;
use crate::types::locale::Locale;

/// Optimistic fallback metrics applied when the service omits a field.
pub const DEFAULT_SEO_SCORE: f64 = 0.8;
pub const DEFAULT_BUY_RATE: f64 = 0.7;
pub const DEFAULT_CLICK_RATE: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TagMetric {
    pub seo_score: f64,
    pub buy_rate: f64,
    pub click_rate: f64,
}

impl Default for TagMetric {
    fn default() -> Self {
        Self {
            seo_score: DEFAULT_SEO_SCORE,
            buy_rate: DEFAULT_BUY_RATE,
            click_rate: DEFAULT_CLICK_RATE,
        }
    }
}

/// Tag label -> metrics. Labels are unique by construction; order is
/// insignificant, BTreeMap just keeps iteration deterministic.
pub type TagGroup = BTreeMap<String, TagMetric>;

/// The four fixed tag groups. Groups the service leaves out are stored
/// empty, not absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TagGroupSet {
    pub category: TagGroup,
    pub attribute: TagGroup,
    pub style: TagGroup,
    pub usage: TagGroup,
}

// ── Wire format ──

/// POST body sent to the generation endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub image_url: String,
    pub location: Locale,
    pub item: String,
}

/// Per-tag metrics as they arrive: any subset of the three fields, with
/// non-numeric values tolerated and treated as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialMetric {
    #[serde(default, deserialize_with = "lenient_score")]
    pub seo_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub buy_rate: Option<f64>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub click_rate: Option<f64>,
}

/// Accept any JSON value for a score; only numbers survive. Keeps one bad
/// field from poisoning the whole response.
fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()))
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTagGroupSet {
    #[serde(default)]
    pub category_tags: Option<BTreeMap<String, PartialMetric>>,
    #[serde(default)]
    pub attribute_tags: Option<BTreeMap<String, PartialMetric>>,
    #[serde(default)]
    pub style_tags: Option<BTreeMap<String, PartialMetric>>,
    #[serde(default)]
    pub usage_tags: Option<BTreeMap<String, PartialMetric>>,
}

/// Success response body: one or more product keys mapping to tag group
/// sets, plus a localized description.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub tags: BTreeMap<String, RawTagGroupSet>,
    #[serde(default)]
    pub description: Option<String>,
}

impl GenerateResponse {
    /// Tag group set of the first product key. The upstream contract gives
    /// no key ordering, so "first" is the lexicographically smallest key.
    pub fn into_first_group_set(self) -> Option<RawTagGroupSet> {
        self.tags.into_values().next()
    }
}

// ── Merge rules ──

/// Response field wins if present and numeric, else the default; the result
/// is always clamped to `[0, 1]`.
fn merge_field(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() => clamp_score(v),
        _ => default,
    }
}

pub fn merge_metric(partial: &PartialMetric) -> TagMetric {
    TagMetric {
        seo_score: merge_field(partial.seo_score, DEFAULT_SEO_SCORE),
        buy_rate: merge_field(partial.buy_rate, DEFAULT_BUY_RATE),
        click_rate: merge_field(partial.click_rate, DEFAULT_CLICK_RATE),
    }
}

fn merge_group(raw: Option<BTreeMap<String, PartialMetric>>) -> TagGroup {
    raw.unwrap_or_default()
        .into_iter()
        .map(|(label, partial)| (label, merge_metric(&partial)))
        .collect()
}

/// Normalize a raw response group set into the stored form: defaults merged
/// into every metric, absent groups materialized as empty.
pub fn merge_group_set(raw: RawTagGroupSet) -> TagGroupSet {
    TagGroupSet {
        category: merge_group(raw.category_tags),
        attribute: merge_group(raw.attribute_tags),
        style: merge_group(raw.style_tags),
        usage: merge_group(raw.usage_tags),
    }
}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
