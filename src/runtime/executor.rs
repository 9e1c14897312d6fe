//! Conversation controller

use super::traits::Responder;
use super::{DisplayEntry, ViewEvent};
use crate::message::ConversationHistory;
use crate::state_machine::{transition, ConvState, Effect, Event, PendingIndicator, TransitionError};
use chrono::Utc;
use std::time::Instant;
use tokio::sync::broadcast;

const VIEW_CHANNEL_CAPACITY: usize = 128;

/// Whether the send affordance should be enabled for this input
pub fn can_submit(input: &str) -> bool {
    !input.trim().is_empty()
}

/// How a call to [`ConversationController::submit`] ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was empty after trimming; nothing happened
    Ignored,
    /// The responder replied and the reply joined history
    Replied,
    /// The request failed and an error entry was displayed
    Failed,
}

/// Drives one conversation against a responder.
///
/// `submit` borrows the controller mutably for the whole round trip, so a
/// second submission cannot begin until the first has resolved.
pub struct ConversationController<R: Responder> {
    state: ConvState,
    history: ConversationHistory,
    responder: R,
    view_tx: broadcast::Sender<ViewEvent>,
}

impl<R: Responder> ConversationController<R> {
    pub fn new(responder: R) -> Self {
        let (view_tx, _) = broadcast::channel(VIEW_CHANNEL_CAPACITY);
        Self {
            state: ConvState::Idle,
            history: ConversationHistory::new(),
            responder,
            view_tx,
        }
    }

    /// Subscribe to display updates
    pub fn subscribe(&self) -> broadcast::Receiver<ViewEvent> {
        self.view_tx.subscribe()
    }

    pub fn state(&self) -> &ConvState {
        &self.state
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    /// Submit user text and wait for the single resulting resolution.
    ///
    /// Empty or whitespace-only text is a no-op. Failures from the responder
    /// are not errors here: they surface as an error display entry and
    /// [`SubmitOutcome::Failed`].
    pub async fn submit(&mut self, text: &str) -> Result<SubmitOutcome, TransitionError> {
        match self.process_event(Event::submit(text, Utc::now())).await {
            Ok(outcome) => Ok(outcome),
            Err(TransitionError::EmptyMessage) => {
                tracing::debug!("Ignoring empty submission");
                Ok(SubmitOutcome::Ignored)
            }
            Err(e) => {
                tracing::warn!(error = %e, state = self.state.name(), "Submission rejected");
                Err(e)
            }
        }
    }

    async fn process_event(&mut self, event: Event) -> Result<SubmitOutcome, TransitionError> {
        let mut outcome = SubmitOutcome::Ignored;
        // Effects may generate follow-up events; process them in a loop
        let mut events_to_process = vec![event];

        while let Some(current_event) = events_to_process.pop() {
            let resolution = match &current_event {
                Event::ReplyReceived { .. } => Some(SubmitOutcome::Replied),
                Event::ReplyFailed { .. } => Some(SubmitOutcome::Failed),
                _ => None,
            };

            // Pure state transition
            let result = transition(&self.state, current_event)?;
            self.state = result.new_state;
            if let Some(resolved) = resolution {
                outcome = resolved;
            }

            for effect in result.effects {
                if let Some(generated_event) = self.execute_effect(effect).await {
                    events_to_process.push(generated_event);
                }
            }
        }

        Ok(outcome)
    }

    /// Execute an effect and optionally return a generated event
    async fn execute_effect(&mut self, effect: Effect) -> Option<Event> {
        match effect {
            Effect::ClearInput => {
                self.notify(ViewEvent::InputCleared);
                None
            }

            Effect::Dispatch => Some(Event::Dispatch {
                pending: PendingIndicator::new(Utc::now()),
            }),

            Effect::AppendHistory { turn } => {
                self.history.push(turn);
                None
            }

            Effect::Display { message } => {
                let entry = DisplayEntry::from_message(&message);
                self.notify(ViewEvent::MessageAdded { entry });
                None
            }

            Effect::ShowPending { pending } => {
                self.notify(ViewEvent::PendingShown { id: pending.id });
                None
            }

            Effect::RemovePending { id } => {
                self.notify(ViewEvent::PendingRemoved { id });
                None
            }

            Effect::RequestReply => Some(self.request_reply().await),
        }
    }

    /// The one suspension point: send history, turn the outcome into an event
    async fn request_reply(&self) -> Event {
        let turns = self.history.len();
        tracing::info!(turns, "Requesting reply");
        let start = Instant::now();

        match self.responder.reply(self.history.turns()).await {
            Ok(reply) => {
                tracing::info!(
                    turns,
                    duration_ms = %start.elapsed().as_millis(),
                    reply_chars = reply.chars().count(),
                    "Reply received"
                );
                Event::ReplyReceived {
                    reply,
                    at: Utc::now(),
                }
            }
            Err(error) => {
                tracing::warn!(
                    turns,
                    duration_ms = %start.elapsed().as_millis(),
                    error = %error,
                    rate_limited = error.is_rate_limited(),
                    "Reply request failed"
                );
                Event::ReplyFailed {
                    error,
                    at: Utc::now(),
                }
            }
        }
    }

    fn notify(&self, event: ViewEvent) {
        // No subscribers is fine; the view may not be attached yet
        let _ = self.view_tx.send(event);
    }
}
