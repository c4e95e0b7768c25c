//! HTTP gateway for the analysis backend.
//!
//! The trait-based design lets the search session and the TUI run against a
//! mock in tests while [`HttpAnalysisGateway`] performs real requests with
//! reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use url::Url;

use super::error::AnalysisError;
use super::model::AnalysisResult;

const ERROR_BODY_PREVIEW_CHARS: usize = 160;

/// Gateway that can run product analyses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalysisGateway: Send + Sync {
    /// Runs `GET /analyze?product=<product>`.
    async fn analyze(&self, product: &str) -> Result<AnalysisResult, AnalysisError>;

    /// Runs `GET /health`.
    async fn health(&self) -> Result<HealthStatus, AnalysisError>;
}

/// Body of the backend's `/health` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    /// Reported status, `"ok"` when healthy.
    pub status: Option<String>,
}

impl HealthStatus {
    /// Returns whether the backend reported itself healthy.
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status.as_deref() == Some("ok")
    }
}

/// reqwest-backed gateway.
#[derive(Debug, Clone)]
pub struct HttpAnalysisGateway {
    client: Client,
    api_base: Url,
}

impl HttpAnalysisGateway {
    /// Builds a gateway for the given API base.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Configuration`] when the HTTP client cannot be
    /// constructed.
    pub fn new(api_base: Url, timeout: Duration) -> Result<Self, AnalysisError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| AnalysisError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;
        Ok(Self { client, api_base })
    }

    /// Returns the API base this gateway talks to.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.api_base.as_str().trim_end_matches('/'))
    }

    async fn get(&self, request: reqwest::RequestBuilder) -> Result<Response, AnalysisError> {
        let response = request.send().await.map_err(|error| AnalysisError::Network {
            message: error.to_string(),
        })?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(AnalysisError::Api {
            status,
            message: error_message_from_body(&body),
        })
    }
}

#[async_trait]
impl AnalysisGateway for HttpAnalysisGateway {
    async fn analyze(&self, product: &str) -> Result<AnalysisResult, AnalysisError> {
        let endpoint = self.endpoint("analyze");
        tracing::debug!("requesting analysis for '{product}' from {endpoint}");

        let request = self.client.get(endpoint).query(&[("product", product)]);
        let response = self.get(request).await.inspect_err(|error| {
            tracing::warn!("analysis request for '{product}' failed: {error}");
        })?;

        let payload = response
            .json::<serde_json::Value>()
            .await
            .map_err(|error| AnalysisError::Decode {
                message: error.to_string(),
            })?;

        AnalysisResult::from_payload(payload).map_err(|error| AnalysisError::Decode {
            message: error.to_string(),
        })
    }

    async fn health(&self) -> Result<HealthStatus, AnalysisError> {
        let endpoint = self.endpoint("health");
        tracing::debug!("checking backend health at {endpoint}");

        let response = self.get(self.client.get(endpoint)).await?;
        response
            .json::<HealthStatus>()
            .await
            .map_err(|error| AnalysisError::Decode {
                message: error.to_string(),
            })
    }
}

/// Extracts a readable message from an error response body.
///
/// FastAPI reports failures as `{"detail": "..."}`, and validation failures
/// as `{"detail": [...]}`. Anything else is shown as a truncated body.
fn error_message_from_body(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        detail: serde_json::Value,
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: serde_json::Value::String(detail),
        }) => detail,
        Ok(ErrorBody { detail }) if !detail.is_null() => {
            truncate_for_message(&detail.to_string(), ERROR_BODY_PREVIEW_CHARS)
        }
        _ if body.trim().is_empty() => "(empty response body)".to_owned(),
        _ => truncate_for_message(body.trim(), ERROR_BODY_PREVIEW_CHARS),
    }
}

fn truncate_for_message(message: &str, max_chars: usize) -> String {
    let mut output = String::new();
    let mut chars = message.chars();

    for _ in 0..max_chars {
        let Some(character) = chars.next() else {
            return output;
        };
        output.push(character);
    }

    if chars.next().is_some() {
        output.push_str("...");
    }

    output
}

#[cfg(test)]
#[path = "gateway_tests.rs"]
mod tests;
