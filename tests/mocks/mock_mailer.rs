use async_trait::async_trait;
use portfolio_relay::error::MailApiResult;
use portfolio_relay::models::OutboundEmail;
use portfolio_relay::Mailer;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Mock mailer for testing the relay endpoint.
///
/// Records every outbound email for verification and replays scripted
/// responses in order; with nothing scripted it answers success.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockMailer {
    responses: Arc<Mutex<VecDeque<MailApiResult<Value>>>>,
    sent: Arc<Mutex<Vec<OutboundEmail>>>,
}

#[allow(dead_code)]
impl MockMailer {
    /// Create a new MockMailer with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the next response to `send`.
    pub fn push_response(&self, response: MailApiResult<Value>) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Number of times `send` was called.
    pub fn send_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// The most recent outbound email, if any.
    pub fn last_email(&self) -> Option<OutboundEmail> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, email: &OutboundEmail) -> MailApiResult<Value> {
        self.sent.lock().unwrap().push(email.clone());

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(json!({ "id": "mock-email" })))
    }
}
