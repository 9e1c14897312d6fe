//! Effects produced by state transitions

use super::state::PendingIndicator;
use crate::message::{Message, Turn};
use uuid::Uuid;

/// Effects to be executed after state transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Empty the composer; does not wait for the network
    ClearInput,

    /// Create the placeholder and continue into `AwaitingReply`
    Dispatch,

    /// Append a turn to conversation history
    AppendHistory { turn: Turn },

    /// Render and show a message
    Display { message: Message },

    /// Show the "awaiting reply" placeholder
    ShowPending { pending: PendingIndicator },

    /// Remove the placeholder
    RemovePending { id: Uuid },

    /// Send the full history to the responder
    RequestReply,
}

impl Effect {
    /// Record a message in history, if its role belongs there
    pub fn append_history(message: &Message) -> Option<Self> {
        message.to_turn().map(|turn| Effect::AppendHistory { turn })
    }

    pub fn display(message: Message) -> Self {
        Effect::Display { message }
    }
}
