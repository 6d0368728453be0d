use serde::{Deserialize, Serialize};
use std::fmt;

/// Target market for tag generation. Each locale keeps its own generated
/// tags and description; switching locales never discards the other one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Us,
    Jp,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Us => "us",
            Locale::Jp => "jp",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
