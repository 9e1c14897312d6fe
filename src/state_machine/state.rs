//! Conversation state types

use crate::message::Message;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder shown while a reply is outstanding.
///
/// Lives inside [`ConvState::AwaitingReply`] and nowhere else, so at most one
/// exists and it never reaches history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingIndicator {
    pub id: Uuid,
    pub since: DateTime<Utc>,
}

impl PendingIndicator {
    pub fn new(since: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            since,
        }
    }
}

/// Conversation state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConvState {
    /// Ready for user input, no request outstanding
    #[default]
    Idle,

    /// Input accepted and cleared, request about to be issued
    Sending { message: Message },

    /// Request in flight
    AwaitingReply { pending: PendingIndicator },
}

impl ConvState {
    /// Check if a submission may start from this state
    pub fn accepts_input(&self) -> bool {
        matches!(self, ConvState::Idle)
    }

    /// The placeholder currently shown, if any
    pub fn pending(&self) -> Option<&PendingIndicator> {
        match self {
            ConvState::AwaitingReply { pending } => Some(pending),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConvState::Idle => "idle",
            ConvState::Sending { .. } => "sending",
            ConvState::AwaitingReply { .. } => "awaiting_reply",
        }
    }
}
