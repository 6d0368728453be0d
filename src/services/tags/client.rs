//! HTTP client for the remote Tag Generation Service.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::services::tags::model::{GenerateRequest, GenerateResponse};
use crate::types::errors::{TagServiceError, TagServiceResult, GENERIC_GENERATION_ERROR};

const DEFAULT_ENDPOINT: &str = "http://localhost:8000/generate";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Seam over the remote generation call so the controller can be driven by
/// a mock in tests. One call per locale; no retry.
#[async_trait]
pub trait TagService: Send + Sync {
    async fn generate(&self, request: GenerateRequest) -> TagServiceResult<GenerateResponse>;
}

/// Endpoint configuration. `from_env` honors `TAG_SERVICE_URL` and
/// `TAG_SERVICE_TIMEOUT_SECS`, falling back to the local dev endpoint.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        // .env is optional; real env vars still apply without it
        dotenvy::dotenv().ok();

        let endpoint =
            std::env::var("TAG_SERVICE_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let timeout_secs = std::env::var("TAG_SERVICE_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        log::debug!("Tag service endpoint: {endpoint} (timeout {timeout_secs}s)");
        Self {
            endpoint,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

/// Error body shape used by the service on non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

pub struct HttpTagService {
    client: Client,
    endpoint: String,
}

impl HttpTagService {
    pub fn new(config: ServiceConfig) -> TagServiceResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TagServiceError::Service(format!("HTTP client init failed: {e}")))?;
        Ok(Self {
            client,
            endpoint: config.endpoint,
        })
    }

    /// Single POST to the generation endpoint. Transport-level failures
    /// (DNS, refused connection, timeout) surface here.
    async fn post_generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<reqwest::Response, anyhow::Error> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;
        Ok(response)
    }

    /// Pull the service's `detail` message out of an error body, if any.
    async fn error_detail(response: reqwest::Response) -> Option<String> {
        let body: ErrorBody = response.json().await.ok()?;
        body.detail.filter(|d| !d.is_empty())
    }
}

#[async_trait]
impl TagService for HttpTagService {
    async fn generate(&self, request: GenerateRequest) -> TagServiceResult<GenerateResponse> {
        let response = match self.post_generate(&request).await {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Tag service request failed: {e}");
                return Err(TagServiceError::Service(
                    GENERIC_GENERATION_ERROR.to_string(),
                ));
            }
        };

        let status = response.status();
        if !status.is_success() {
            log::warn!("Tag service returned HTTP {status}");
            let message = Self::error_detail(response)
                .await
                .unwrap_or_else(|| GENERIC_GENERATION_ERROR.to_string());
            return Err(TagServiceError::Service(message));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|_| TagServiceError::MalformedPayload)?;

        if body.tags.is_empty() {
            log::warn!("Tag service response has no tags mapping");
            return Err(TagServiceError::MalformedPayload);
        }

        Ok(body)
    }
}
