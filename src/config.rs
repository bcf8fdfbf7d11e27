//! Configuration management for the relay service.
//!
//! This module handles loading and validating configuration from environment variables.
//! The Resend API key is deliberately optional here: its absence is a per-request,
//! reported condition (the relay fails closed with a configuration error), not a
//! startup crash.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default sender identity for outbound notifications.
///
/// `onboarding@resend.dev` is Resend's sandbox sender, deliverable to the
/// account owner without domain verification.
pub const DEFAULT_FROM: &str = "Portfolio Contact <onboarding@resend.dev>";

/// Default base URL of the Resend API.
pub const DEFAULT_MAIL_API_URL: &str = "https://api.resend.com";

/// Configuration for the relay service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host the HTTP server binds to
    pub host: String,

    /// Port the HTTP server binds to
    pub port: u16,

    /// Base URL of the transactional email API
    pub mail_api_url: String,

    /// Resend API key; `None` when unset or blank, gated per request
    pub resend_api_key: Option<String>,

    /// Sender identity placed in the `from` field of every notification
    pub contact_from: String,

    /// Recipient of every notification (the site owner)
    pub contact_to: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `CONTACT_TO`: recipient address for contact notifications
    ///
    /// Optional environment variables:
    /// - `RESEND_API_KEY`: email API key (absence is reported per request, not here)
    /// - `CONTACT_FROM`: sender identity (default: the Resend sandbox sender)
    /// - `MAIL_API_BASE_URL`: email API base URL (default: `https://api.resend.com`)
    /// - `RELAY_HOST`: bind host (default: `0.0.0.0`)
    /// - `RELAY_PORT`: bind port (default: `3000`)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let contact_to =
            env::var("CONTACT_TO").map_err(|_| ConfigError::MissingVar("CONTACT_TO".to_string()))?;

        if contact_to.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_TO".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let mail_api_url =
            env::var("MAIL_API_BASE_URL").unwrap_or_else(|_| DEFAULT_MAIL_API_URL.to_string());

        // Validate API URL format
        if !mail_api_url.starts_with("http://") && !mail_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "MAIL_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        // A blank key is as unusable as an absent one
        let resend_api_key = env::var("RESEND_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let contact_from = env::var("CONTACT_FROM").unwrap_or_else(|_| DEFAULT_FROM.to_string());
        let host = env::var("RELAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = Self::parse_env_u16("RELAY_PORT", 3000)?;
        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;

        Ok(Config {
            host,
            port,
            mail_api_url,
            resend_api_key,
            contact_from,
            contact_to,
            request_timeout,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a port number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 3000,
            mail_api_url: DEFAULT_MAIL_API_URL.to_string(),
            resend_api_key: None,
            contact_from: DEFAULT_FROM.to_string(),
            contact_to: String::new(),
            request_timeout: 10,
        }
    }
}
