use serde::Serialize;
use thiserror::Error;

use crate::types::locale::Locale;

/// Fallback message when the generation service fails without a usable detail.
pub const GENERIC_GENERATION_ERROR: &str = "Failed to generate tags";

#[derive(Debug, Error)]
pub enum TagServiceError {
    /// Network failure or non-success HTTP status. Carries the service's
    /// `detail` message when one was provided, the generic fallback otherwise.
    #[error("{0}")]
    Service(String),
    /// Success status but the body lacked a non-empty `tags` mapping.
    #[error("Invalid tag data received")]
    MalformedPayload,
    /// A generation request for this locale is already in flight.
    #[error("Tag generation already in progress for {0}")]
    AlreadyInFlight(Locale),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog I/O error: {0}")]
    Io(String),
    #[error("Catalog parse error: {0}")]
    Parse(String),
    #[error("Duplicate product id: {0}")]
    DuplicateId(String),
}

impl From<std::io::Error> for CatalogError {
    fn from(error: std::io::Error) -> Self {
        CatalogError::Io(error.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(error: serde_json::Error) -> Self {
        CatalogError::Parse(error.to_string())
    }
}

impl Serialize for TagServiceError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

impl Serialize for CatalogError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type TagServiceResult<T> = Result<T, TagServiceError>;
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
