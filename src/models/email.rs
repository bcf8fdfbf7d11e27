//! Outbound email wire model for the Resend `POST /emails` endpoint.

use serde::{Deserialize, Serialize};

/// An email ready to hand to the transactional email API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutboundEmail {
    /// Sender identity, e.g. `Portfolio Contact <onboarding@resend.dev>`
    pub from: String,

    /// Recipient addresses; the relay always sends to exactly one
    pub to: Vec<String>,

    /// Subject line
    pub subject: String,

    /// HTML body
    pub html: String,
}
