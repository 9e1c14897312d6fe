//! Pure state transition function

use super::{ConvState, Effect, Event};
use crate::message::Message;
use thiserror::Error;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: ConvState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: ConvState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_effects(mut self, effects: impl IntoIterator<Item = Effect>) -> Self {
        self.effects.extend(effects);
        self
    }
}

/// Errors that can occur during transition
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Message is empty")]
    EmptyMessage,
    #[error("A reply is still outstanding, cannot accept message")]
    Busy,
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}

/// Pure transition function
///
/// Given the same inputs it always produces the same outputs, with no I/O.
pub fn transition(state: &ConvState, event: Event) -> Result<TransitionResult, TransitionError> {
    match (state, event) {
        // ============================================================
        // Submission
        // ============================================================

        // Idle + Submit -> Sending, composer cleared immediately
        (ConvState::Idle, Event::Submit { text, at }) => {
            let text = text.trim();
            if text.is_empty() {
                return Err(TransitionError::EmptyMessage);
            }
            let message = Message::user(text, at);
            Ok(TransitionResult::new(ConvState::Sending { message })
                .with_effect(Effect::ClearInput)
                .with_effect(Effect::Dispatch))
        }

        // One outstanding request at a time
        (ConvState::Sending { .. } | ConvState::AwaitingReply { .. }, Event::Submit { .. }) => {
            Err(TransitionError::Busy)
        }

        // Sending + Dispatch -> AwaitingReply
        (ConvState::Sending { message }, Event::Dispatch { pending }) => {
            Ok(TransitionResult::new(ConvState::AwaitingReply {
                pending: pending.clone(),
            })
            .with_effects(Effect::append_history(message))
            .with_effect(Effect::display(message.clone()))
            .with_effect(Effect::ShowPending { pending })
            .with_effect(Effect::RequestReply))
        }

        // ============================================================
        // Resolution
        // ============================================================

        // AwaitingReply + ReplyReceived -> Idle, reply joins history
        (ConvState::AwaitingReply { pending }, Event::ReplyReceived { reply, at }) => {
            let message = Message::assistant(reply, at);
            Ok(TransitionResult::new(ConvState::Idle)
                .with_effect(Effect::RemovePending { id: pending.id })
                .with_effects(Effect::append_history(&message))
                .with_effect(Effect::display(message)))
        }

        // AwaitingReply + ReplyFailed -> Idle, error is display-only
        (ConvState::AwaitingReply { pending }, Event::ReplyFailed { error, at }) => {
            let message = Message::error(error.user_message(), at);
            Ok(TransitionResult::new(ConvState::Idle)
                .with_effect(Effect::RemovePending { id: pending.id })
                .with_effect(Effect::display(message)))
        }

        // ============================================================
        // Invalid Transitions
        // ============================================================
        (state, event) => Err(TransitionError::InvalidTransition(format!(
            "No transition from {} with event {event:?}",
            state.name()
        ))),
    }
}
