//! Presentation tier for a tag's SEO score.
//!
//! Consumed by the presentation layer when rendering each tag badge.
//! Pure and total over any `f64` input: malformed scores are clamped.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    High,
    Average,
    Low,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::High => "high",
            Tier::Average => "average",
            Tier::Low => "low",
        }
    }
}

/// Clamp a score to `[0, 1]`. NaN counts as 0.
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 1.0)
}

/// Map a score to its presentation tier: `>= 0.8` high, `>= 0.4` average,
/// otherwise low. Out-of-range input is clamped first.
pub fn classify(score: f64) -> Tier {
    let score = clamp_score(score);
    if score >= 0.8 {
        Tier::High
    } else if score >= 0.4 {
        Tier::Average
    } else {
        Tier::Low
    }
}
