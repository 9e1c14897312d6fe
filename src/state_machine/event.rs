//! Events that can occur in a conversation

use super::state::PendingIndicator;
use crate::responder::ResponderError;
use chrono::{DateTime, Utc};

/// Events that trigger state transitions
#[derive(Debug, Clone)]
pub enum Event {
    // User events
    Submit {
        text: String,
        at: DateTime<Utc>,
    },

    // Runtime events
    /// The request is about to go out; carries the placeholder to show
    Dispatch { pending: PendingIndicator },

    // Responder events
    ReplyReceived {
        reply: String,
        at: DateTime<Utc>,
    },
    ReplyFailed {
        error: ResponderError,
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn submit(text: impl Into<String>, at: DateTime<Utc>) -> Self {
        Event::Submit {
            text: text.into(),
            at,
        }
    }
}
