//! Async wrapper around the synchronous MailClient.
//!
//! This module provides an async interface to the synchronous MailClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::error::{MailApiError, MailApiResult};
use crate::mail::MailClient;
use crate::models::OutboundEmail;
use async_trait::async_trait;
use std::sync::Arc;

/// Async seam for sending email.
///
/// The relay handler depends on this trait rather than on the concrete
/// client, so tests can substitute a mock and count calls.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send one email, returning the upstream success payload.
    async fn send(&self, email: &OutboundEmail) -> MailApiResult<serde_json::Value>;
}

/// Async wrapper around the synchronous MailClient.
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP
/// operations on a dedicated thread pool, preventing blocking
/// the async runtime.
#[derive(Clone)]
pub struct AsyncMailClient {
    client: Arc<MailClient>,
}

impl AsyncMailClient {
    pub fn new(client: MailClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Get a reference to the underlying client's metrics collector.
    pub fn metrics(&self) -> &crate::metrics::Metrics {
        self.client.metrics()
    }
}

#[async_trait]
impl Mailer for AsyncMailClient {
    async fn send(&self, email: &OutboundEmail) -> MailApiResult<serde_json::Value> {
        let client = self.client.clone();
        let email = email.clone();

        tokio::task::spawn_blocking(move || client.send_email(&email))
            .await
            .map_err(|e| MailApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
