//! Responder failure classification

use thiserror::Error;

/// Shown when the responder fails without explaining why
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Shown when the responder cannot be reached at all
pub const CONNECTION_FAILURE_MESSAGE: &str =
    "Connection failed. Please check your internet and try again.";

/// Shown when the responder reports rate limiting without a message
pub const RATE_LIMIT_MESSAGE: &str =
    "I'm receiving too many requests right now. Please try again in a moment.";

/// A failed request to the external responder
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponderError {
    /// HTTP 429 from the responder
    #[error("rate limited by responder")]
    RateLimited { message: Option<String> },
    /// Any other non-success status
    #[error("responder returned HTTP {status}")]
    Remote { status: u16, message: Option<String> },
    /// Connection, timeout, or body read failure
    #[error("network failure: {0}")]
    Network(String),
    /// Success status with a body we could not decode
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ResponderError {
    /// Text for the error entry shown to the user.
    ///
    /// Prefers the responder's own message; falls back to a generic one.
    pub fn user_message(&self) -> String {
        match self {
            ResponderError::RateLimited { message } => message
                .clone()
                .unwrap_or_else(|| RATE_LIMIT_MESSAGE.to_string()),
            ResponderError::Remote { message, .. } => message
                .clone()
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
            ResponderError::Network(_) => CONNECTION_FAILURE_MESSAGE.to_string(),
            ResponderError::InvalidResponse(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ResponderError::RateLimited { .. })
    }
}
