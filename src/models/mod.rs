//! Data models for the contact relay.
//!
//! This module contains the transient submission entity and the outbound
//! email wire shape. Nothing here is ever persisted.

pub mod email;
pub mod submission;

pub use email::OutboundEmail;
pub use submission::{ContactSubmission, SubmissionDraft};
