//! HTTP surface of the relay service.
//!
//! Wires the submission handler, the health probe, and the method-not-allowed
//! fallback into an axum router, and serves it.

pub mod handler;

use crate::config::Config;
use crate::mail::{AsyncMailClient, MailClient, Mailer};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tracing::{info, warn};

/// Path of the relay endpoint, as the site's form client expects it.
pub const SUBMIT_PATH: &str = "/api/send-email";

/// Shared state handed to every request handler.
///
/// `mailer` is `None` when the API key was absent at startup; the handler
/// fails closed per request in that case.
#[derive(Clone)]
pub struct AppState {
    /// Outbound mail seam; absent when the service is misconfigured
    pub mailer: Option<Arc<dyn Mailer>>,

    /// Sender identity for notifications
    pub sender: String,

    /// Recipient of notifications (the site owner)
    pub recipient: String,
}

impl AppState {
    /// Build state from configuration, constructing the mail client only when
    /// an API key is available.
    pub fn from_config(config: &Config) -> Self {
        let mailer = config.resend_api_key.as_ref().map(|key| {
            Arc::new(AsyncMailClient::new(MailClient::new(config, key.clone())))
                as Arc<dyn Mailer>
        });

        if mailer.is_none() {
            warn!("RESEND_API_KEY is not set; submissions will be rejected until it is");
        }

        Self {
            mailer,
            sender: config.contact_from.clone(),
            recipient: config.contact_to.clone(),
        }
    }
}

/// Build the relay router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(SUBMIT_PATH, post(handler::submit_contact))
        .route("/health", get(handler::health))
        .method_not_allowed_fallback(handler::method_not_allowed)
        .with_state(state)
}

/// Bind and serve the relay until the process exits.
pub async fn serve(config: &Config) -> anyhow::Result<()> {
    let state = AppState::from_config(config);
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;

    info!("relay listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state).into_make_service()).await?;

    Ok(())
}
