use crate::services::tags::model::{
    merge_group_set, merge_metric, GenerateRequest, GenerateResponse, PartialMetric, TagMetric,
};
use crate::types::locale::Locale;

#[test]
fn test_empty_metric_object_gets_full_defaults() {
    let merged = merge_metric(&PartialMetric::default());
    assert_eq!(
        merged,
        TagMetric {
            seo_score: 0.8,
            buy_rate: 0.7,
            click_rate: 0.6,
        }
    );
}

#[test]
fn test_partial_metric_overrides_only_supplied_fields() {
    let partial = PartialMetric {
        seo_score: Some(0.95),
        buy_rate: None,
        click_rate: None,
    };
    let merged = merge_metric(&partial);
    assert_eq!(merged.seo_score, 0.95);
    assert_eq!(merged.buy_rate, 0.7);
    assert_eq!(merged.click_rate, 0.6);
}

#[test]
fn test_out_of_range_metric_is_clamped() {
    let partial = PartialMetric {
        seo_score: Some(1.4),
        buy_rate: Some(-0.2),
        click_rate: Some(0.5),
    };
    let merged = merge_metric(&partial);
    assert_eq!(merged.seo_score, 1.0);
    assert_eq!(merged.buy_rate, 0.0);
    assert_eq!(merged.click_rate, 0.5);
}

#[test]
fn test_non_numeric_score_falls_back_to_default() {
    // A string where a number belongs must not poison the response
    let raw = r#"{ "seo_score": "very high", "buy_rate": 0.9 }"#;
    let partial: PartialMetric = serde_json::from_str(raw).unwrap();
    let merged = merge_metric(&partial);
    assert_eq!(merged.seo_score, 0.8);
    assert_eq!(merged.buy_rate, 0.9);
    assert_eq!(merged.click_rate, 0.6);
}

#[test]
fn test_absent_groups_become_empty_not_absent() {
    let raw = r#"{
        "tags": {
            "shirt_1": {
                "category_tags": { "red": {} }
            }
        },
        "description": "A bold red shirt."
    }"#;
    let response: GenerateResponse = serde_json::from_str(raw).unwrap();
    let set = merge_group_set(response.into_first_group_set().unwrap());

    assert_eq!(set.category.len(), 1);
    assert_eq!(set.category["red"], TagMetric::default());
    assert!(set.attribute.is_empty());
    assert!(set.style.is_empty());
    assert!(set.usage.is_empty());
}

#[test]
fn test_first_product_key_is_lexicographically_smallest() {
    // Upstream key order is not guaranteed; we must pick deterministically
    let raw = r#"{
        "tags": {
            "zeta": { "category_tags": { "late": {} } },
            "alpha": { "category_tags": { "early": {} } }
        },
        "description": "d"
    }"#;
    let response: GenerateResponse = serde_json::from_str(raw).unwrap();
    let set = merge_group_set(response.into_first_group_set().unwrap());
    assert!(set.category.contains_key("early"));
    assert!(!set.category.contains_key("late"));
}

#[test]
fn test_response_without_tags_parses_as_empty() {
    let response: GenerateResponse = serde_json::from_str(r#"{ "description": "d" }"#).unwrap();
    assert!(response.tags.is_empty());
    assert!(response.into_first_group_set().is_none());
}

#[test]
fn test_generate_request_wire_shape() {
    let request = GenerateRequest {
        image_url: "https://cdn.example.com/shirt_1.jpeg".to_string(),
        location: Locale::Jp,
        item: "shirt".to_string(),
    };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["image_url"], "https://cdn.example.com/shirt_1.jpeg");
    assert_eq!(json["location"], "jp");
    assert_eq!(json["item"], "shirt");
}

#[test]
fn test_full_response_round_trip_into_storage_form() {
    let raw = r#"{
        "tags": {
            "shirt_1": {
                "category_tags": {
                    "shirt": { "seo_score": 0.98, "buy_rate": 0.85, "click_rate": 0.9 }
                },
                "attribute_tags": {
                    "crimson": { "seo_score": 0.95 },
                    "wool_blend": {}
                },
                "style_tags": {
                    "preppy": { "buy_rate": 0.8 }
                },
                "usage_tags": {
                    "winter": { "click_rate": 0.95 }
                }
            }
        },
        "description": "A preppy crimson shirt for winter."
    }"#;
    let response: GenerateResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(
        response.description.as_deref(),
        Some("A preppy crimson shirt for winter.")
    );

    let set = merge_group_set(response.into_first_group_set().unwrap());
    assert_eq!(set.category["shirt"].seo_score, 0.98);
    assert_eq!(set.attribute["crimson"].seo_score, 0.95);
    assert_eq!(set.attribute["crimson"].buy_rate, 0.7);
    assert_eq!(set.attribute["wool_blend"], TagMetric::default());
    assert_eq!(set.style["preppy"].buy_rate, 0.8);
    assert_eq!(set.style["preppy"].seo_score, 0.8);
    assert_eq!(set.usage["winter"].click_rate, 0.95);
}
