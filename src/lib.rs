//! Portfolio Contact Relay - the contact-form backbone of a portfolio website.
//!
//! This library provides a small HTTP service that accepts a contact-form
//! submission, authenticates to the Resend transactional email API with a
//! server-held secret, and forwards the outcome back to the caller - plus the
//! form client that drives it from the page.
//!
//! # Architecture
//!
//! - **models**: Transient submission entity and the outbound email wire shape
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **mail**: HTTP client for the email API and notification composition
//! - **relay**: The axum HTTP surface (submission endpoint, health probe)
//! - **form**: Client-side submission state machine and HTTP client
//! - **metrics**: Counters for outbound mail API calls

// Re-export commonly used types
pub mod config;
pub mod error;
pub mod form;
pub mod mail;
pub mod metrics;
pub mod models;
pub mod relay;

pub use config::Config;
pub use error::{ConfigError, MailApiError, RelayError, SubmitError};
pub use form::{ContactForm, FormClient, FormStatus, PendingGuard};
pub use mail::{AsyncMailClient, MailClient, Mailer};
pub use metrics::Metrics;
pub use models::{ContactSubmission, OutboundEmail, SubmissionDraft};
pub use relay::AppState;
