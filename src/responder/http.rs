//! HTTP responder client for `POST /api/chat`

use super::ResponderError;
use crate::message::Turn;
use crate::runtime::Responder;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Serialize)]
struct ChatRequestBody<'a> {
    messages: &'a [Turn],
}

#[derive(Debug, Deserialize)]
struct ReplyBody {
    reply: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Sends the full history to the responder endpoint and returns its reply
pub struct HttpResponder {
    client: Client,
    endpoint: String,
}

impl HttpResponder {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ResponderError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ResponderError::Network(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self::with_client(client, endpoint))
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

/// Map a non-success status and body to a classified error.
fn classify_failure(status: StatusCode, body: &str) -> ResponderError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty());

    if status == StatusCode::TOO_MANY_REQUESTS {
        ResponderError::RateLimited { message }
    } else {
        ResponderError::Remote {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl Responder for HttpResponder {
    async fn reply(&self, history: &[Turn]) -> Result<String, ResponderError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequestBody { messages: history })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ResponderError::Network(format!("Request timeout: {e}"))
                } else {
                    ResponderError::Network(format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ResponderError::Network(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(classify_failure(status, &body));
        }

        let parsed: ReplyBody = serde_json::from_str(&body).map_err(|e| {
            ResponderError::InvalidResponse(format!("Failed to parse response: {e}"))
        })?;
        Ok(parsed.reply)
    }
}
