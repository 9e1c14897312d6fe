//! Runtime for driving a conversation
//!
//! The [`ConversationController`] owns history and state, runs the pure
//! transition function, and executes effects. Display updates go out on a
//! broadcast channel of [`ViewEvent`]s.

mod executor;
pub mod traits;


pub use executor::{can_submit, ConversationController, SubmitOutcome};
pub use traits::*;

use crate::clock::format_time;
use crate::markup::{render, render_plain};
use crate::message::{Message, Role};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A message prepared for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayEntry {
    pub role: Role,
    /// Pre-rendered HTML body
    pub html: String,
    /// Local `HH:MM` label
    pub time: String,
    pub timestamp: DateTime<Utc>,
}

impl DisplayEntry {
    /// Render a message for display.
    ///
    /// User text is only escaped; assistant and error text go through the
    /// full markup transformer.
    pub fn from_message(message: &Message) -> Self {
        let html = match message.role {
            Role::User => render_plain(&message.content),
            Role::Assistant | Role::Error => render(&message.content),
        };
        Self {
            role: message.role,
            html,
            time: format_time(message.timestamp),
            timestamp: message.timestamp,
        }
    }
}

/// Events sent to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewEvent {
    InputCleared,
    MessageAdded { entry: DisplayEntry },
    PendingShown { id: Uuid },
    PendingRemoved { id: Uuid },
}
