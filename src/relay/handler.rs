//! Request handlers for the relay endpoint.
//!
//! One submission runs the gate chain: method check (router fallback), body
//! parse, field validation, secret check, upstream call, response forwarding.
//! An error at any gate short-circuits to its terminal response; nothing
//! persists across requests.

use crate::error::{MailApiError, RelayError, RelayResult};
use crate::mail::message::compose_notification;
use crate::models::SubmissionDraft;
use crate::relay::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use tracing::{error, info};

/// Accept one contact submission and forward it to the email API.
pub async fn submit_contact(
    State(state): State<AppState>,
    body: Bytes,
) -> RelayResult<Json<Value>> {
    let submission = parse_submission(&body)?.validate()?;

    let mailer = state.mailer.as_ref().ok_or_else(|| {
        // Fail closed; the key value itself must never reach a response
        error!("RESEND_API_KEY missing, refusing to forward submission");
        RelayError::MisconfiguredServer
    })?;

    let email = compose_notification(&submission, &state.sender, &state.recipient);

    info!(name = %submission.name, reply_to = %submission.email, "relaying contact submission");

    let data = mailer.send(&email).await.map_err(|err| match err {
        MailApiError::Rejected { status, body } => {
            error!(status, "mail API rejected the submission");
            RelayError::UpstreamRejected { status, body }
        }
        other => {
            error!(error = %other, "mail API unreachable");
            RelayError::UpstreamUnreachable
        }
    })?;

    Ok(Json(json!({ "success": true, "data": data })))
}

/// Fallback for requests that hit a known path with the wrong method.
pub async fn method_not_allowed() -> RelayError {
    RelayError::MethodNotAllowed
}

/// Liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Parse the raw request body into a submission draft.
///
/// A double-encoded body (a JSON string holding the real JSON object) is
/// unwrapped once; some hosting platforms deliver the body that way.
fn parse_submission(body: &[u8]) -> RelayResult<SubmissionDraft> {
    let value: Value =
        serde_json::from_slice(body).map_err(|_| RelayError::MalformedPayload)?;

    let value = match value {
        Value::String(inner) => {
            serde_json::from_str(&inner).map_err(|_| RelayError::MalformedPayload)?
        }
        other => other,
    };

    serde_json::from_value(value).map_err(|_| RelayError::MalformedPayload)
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            RelayError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({ "error": "Method Not Allowed" }),
            ),
            RelayError::MalformedPayload => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid JSON body" }),
            ),
            RelayError::MissingFields => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Missing required fields" }),
            ),
            RelayError::MisconfiguredServer => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Server configuration error" }),
            ),
            RelayError::UpstreamRejected { status, body } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                json!({ "success": false, "error": body }),
            ),
            RelayError::UpstreamUnreachable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "success": false, "error": "Internal Server Error" }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
