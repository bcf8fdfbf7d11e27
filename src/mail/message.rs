//! Composition of the owner-notification email from a submission.
//!
//! Field values are user-supplied and land in an HTML body, so every
//! interpolated value is escaped here. The message paragraph keeps its
//! whitespace via `white-space: pre-wrap`.

use crate::models::{ContactSubmission, OutboundEmail};

/// Escape a string for safe interpolation into HTML text and attributes.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Build the notification email sent to the site owner.
pub fn compose_notification(
    submission: &ContactSubmission,
    from: &str,
    to: &str,
) -> OutboundEmail {
    let subject = format!("New Portfolio Message from {}", submission.name);

    let html = format!(
        "<h2>New message from your portfolio website!</h2>\n\
         <p><strong>Name:</strong> {}</p>\n\
         <p><strong>Email:</strong> {}</p>\n\
         <p><strong>Message:</strong></p>\n\
         <p style=\"white-space: pre-wrap;\">{}</p>",
        escape_html(&submission.name),
        escape_html(&submission.email),
        escape_html(&submission.message),
    );

    OutboundEmail {
        from: from.to_string(),
        to: vec![to.to_string()],
        subject,
        html,
    }
}
