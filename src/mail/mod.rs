//! HTTP client for the Resend transactional email API.
//!
//! This module provides a synchronous HTTP client that can be used from async
//! contexts via `tokio::task::spawn_blocking`. The client handles bearer-token
//! authentication and error mapping for the email API.

mod async_wrapper;
pub mod message;

pub use async_wrapper::{AsyncMailClient, Mailer};

use crate::config::Config;
use crate::error::{MailApiError, MailApiResult};
use crate::metrics::Metrics;
use crate::models::OutboundEmail;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// HTTP client for the transactional email API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct MailClient {
    /// Base URL for the email API
    base_url: String,

    /// API key for authentication
    api_key: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl MailClient {
    /// Create a new MailClient from configuration and the API key.
    ///
    /// The key is passed separately because its presence is gated per request,
    /// not at startup.
    pub fn new(config: &Config, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.mail_api_url.clone(),
            api_key,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a MailClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a POST request with authentication and JSON body.
    fn post(&self, path: &str, body: &serde_json::Value) -> Result<ureq::Response, MailApiError> {
        let start = Instant::now();
        let url = self.build_url(path);

        tracing::debug!("POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        match &result {
            Ok(response) => {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
                self.metrics.record_http_error();
            }
        }
        self.metrics.record_http_request(duration);

        result
    }

    /// Map a ureq error to a MailApiError.
    ///
    /// Status errors keep the upstream payload so the relay can echo it back;
    /// transport errors collapse into unreachable/timeout.
    fn map_error(&self, error: ureq::Error) -> MailApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let text = response.into_string().unwrap_or_default();
                let body = serde_json::from_str(&text)
                    .unwrap_or(serde_json::Value::String(text));
                MailApiError::Rejected { status: code, body }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    MailApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    MailApiError::Timeout
                } else {
                    MailApiError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Send one email, returning the upstream success payload verbatim.
    pub fn send_email(&self, email: &OutboundEmail) -> MailApiResult<serde_json::Value> {
        let body = serde_json::to_value(email).map_err(MailApiError::JsonError)?;

        let response = self.post("/emails", &body)?;
        let text = response
            .into_string()
            .map_err(|e| MailApiError::HttpError(e.to_string()))?;

        let data: serde_json::Value =
            serde_json::from_str(&text).map_err(MailApiError::JsonError)?;

        self.metrics.record_email_relayed();
        Ok(data)
    }
}
