//! Error types for the portfolio contact relay.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when calling the transactional email API.
#[derive(Error, Debug)]
pub enum MailApiError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned a non-success status code, with its error payload
    #[error("mail API rejected the request (status {status})")]
    Rejected {
        status: u16,
        body: serde_json::Value,
    },

    /// Failed to parse a JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,
}

/// Errors produced while handling one relay request.
///
/// Each variant is an exit from one of the per-request gates; the mapping to
/// HTTP responses lives next to the handler.
#[derive(Error, Debug)]
pub enum RelayError {
    /// Request used a method other than POST
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Request body was not valid JSON
    #[error("invalid JSON body")]
    MalformedPayload,

    /// One or more of name/email/message was absent or empty
    #[error("missing required fields")]
    MissingFields,

    /// The email API key is not configured; the call is never attempted
    #[error("server configuration error")]
    MisconfiguredServer,

    /// Upstream returned a non-success status; echoed back to the caller
    #[error("upstream rejected the submission (status {status})")]
    UpstreamRejected {
        status: u16,
        body: serde_json::Value,
    },

    /// The outbound call failed entirely (network error, bad response body)
    #[error("upstream unreachable")]
    UpstreamUnreachable,
}

/// Errors surfaced by the form client when a submission does not succeed.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The relay answered with a non-success status; carries the message to display
    #[error("submission rejected: {0}")]
    Rejected(String),

    /// The request never completed
    #[error("network failure")]
    NetworkFailure,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with MailApiError
pub type MailApiResult<T> = Result<T, MailApiError>;

/// Convenience type alias for Results with RelayError
pub type RelayResult<T> = Result<T, RelayError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
