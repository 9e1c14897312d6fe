//! Property-based tests for the state machine
//!
//! These tests drive random sequences of submissions and resolutions through
//! the pure transition function, interpreting effects against an in-memory
//! model, and check that the lifecycle invariants hold after every step.

use super::*;
use crate::message::{Message, Role, Turn, TurnRole};
use crate::responder::ResponderError;
use chrono::Utc;
use proptest::prelude::*;
use uuid::Uuid;

// ============================================================================
// Test Harness
// ============================================================================

/// Minimal effect interpreter mirroring the runtime
#[derive(Default)]
struct Harness {
    state: ConvState,
    history: Vec<Turn>,
    shown_pending: Vec<Uuid>,
    requests: Vec<Vec<Turn>>,
    displayed: Vec<Message>,
    input_cleared: usize,
}

impl Harness {
    fn apply(&mut self, event: Event) -> Result<(), TransitionError> {
        let mut queue = vec![event];
        while let Some(current) = queue.pop() {
            let result = transition(&self.state, current)?;
            self.state = result.new_state;
            for effect in result.effects {
                match effect {
                    Effect::ClearInput => self.input_cleared += 1,
                    Effect::Dispatch => queue.push(Event::Dispatch {
                        pending: PendingIndicator::new(Utc::now()),
                    }),
                    Effect::AppendHistory { turn } => self.history.push(turn),
                    Effect::Display { message } => self.displayed.push(message),
                    Effect::ShowPending { pending } => self.shown_pending.push(pending.id),
                    Effect::RemovePending { id } => self.shown_pending.retain(|p| *p != id),
                    Effect::RequestReply => self.requests.push(self.history.clone()),
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
enum Op {
    Submit(String),
    Succeed(String),
    Fail(ResponderError),
}

impl Op {
    fn into_event(self) -> Event {
        let at = Utc::now();
        match self {
            Op::Submit(text) => Event::Submit { text, at },
            Op::Succeed(reply) => Event::ReplyReceived { reply, at },
            Op::Fail(error) => Event::ReplyFailed { error, at },
        }
    }
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-zA-Z0-9 *\\-\n]{1,30}",
        1 => "[ \t\n]{0,5}",
    ]
}

fn arb_responder_error() -> impl Strategy<Value = ResponderError> {
    prop_oneof![
        proptest::option::of("[a-zA-Z ]{1,20}")
            .prop_map(|message| ResponderError::RateLimited { message }),
        (400u16..600, proptest::option::of("[a-zA-Z ]{1,20}"))
            .prop_map(|(status, message)| ResponderError::Remote { status, message }),
        "[a-z ]{1,20}".prop_map(ResponderError::Network),
        "[a-z ]{1,20}".prop_map(ResponderError::InvalidResponse),
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arb_text().prop_map(Op::Submit),
        "[a-zA-Z0-9 *\\-\n]{0,40}".prop_map(Op::Succeed),
        arb_responder_error().prop_map(Op::Fail),
    ]
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(arb_op(), 0..40)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Failures never reach history; every accepted turn does
    #[test]
    fn prop_history_never_contains_errors(ops in arb_ops()) {
        let mut h = Harness::default();
        let mut accepted_submits = 0usize;
        let mut replies = 0usize;
        let mut failures = 0usize;

        for op in ops {
            let before = h.history.len();
            let kind = op.clone();
            if h.apply(op.into_event()).is_ok() {
                match kind {
                    Op::Submit(_) => accepted_submits += 1,
                    Op::Succeed(_) => replies += 1,
                    Op::Fail(_) => {
                        failures += 1;
                        prop_assert_eq!(h.history.len(), before);
                    }
                }
            }
        }

        let user_turns = h.history.iter().filter(|t| t.role == TurnRole::User).count();
        let assistant_turns = h.history.iter().filter(|t| t.role == TurnRole::Assistant).count();
        prop_assert_eq!(user_turns, accepted_submits);
        prop_assert_eq!(assistant_turns, replies);

        let error_entries = h.displayed.iter().filter(|m| m.role == Role::Error).count();
        prop_assert_eq!(error_entries, failures);
    }

    /// The placeholder count is zero or one and always matches the state
    #[test]
    fn prop_at_most_one_pending_indicator(ops in arb_ops()) {
        let mut h = Harness::default();
        for op in ops {
            let _ = h.apply(op.into_event());
            prop_assert!(h.shown_pending.len() <= 1);
            prop_assert_eq!(h.shown_pending.len(), usize::from(h.state.pending().is_some()));
            prop_assert_eq!(
                h.shown_pending.first(),
                h.state.pending().map(|p| &p.id)
            );
        }
    }

    /// A non-empty submission from Idle issues exactly one request ending in the new turn
    #[test]
    fn prop_submit_issues_one_request(ops in arb_ops(), text in "[a-zA-Z0-9]{1,20}") {
        let mut h = Harness::default();
        for op in ops {
            let _ = h.apply(op.into_event());
        }
        prop_assume!(h.state.accepts_input());

        let requests_before = h.requests.len();
        let history_before = h.history.len();
        h.apply(Event::submit(text.clone(), Utc::now())).unwrap();

        prop_assert_eq!(h.requests.len(), requests_before + 1);
        prop_assert_eq!(h.history.len(), history_before + 1);
        let request = h.requests.last().unwrap();
        prop_assert_eq!(request.last(), Some(&Turn::user(text)));
        prop_assert_eq!(request, &h.history);
    }

    /// Whitespace-only submissions change nothing
    #[test]
    fn prop_empty_submit_is_noop(text in "[ \t\n\r]{0,10}") {
        let mut h = Harness::default();
        let result = h.apply(Event::submit(text, Utc::now()));

        prop_assert_eq!(result, Err(TransitionError::EmptyMessage));
        prop_assert_eq!(&h.state, &ConvState::Idle);
        prop_assert!(h.history.is_empty());
        prop_assert!(h.requests.is_empty());
        prop_assert_eq!(h.input_cleared, 0);
    }

    /// While a reply is outstanding every submission is rejected and nothing changes
    #[test]
    fn prop_busy_rejects_submission(first in "[a-z]{1,10}", second in arb_text()) {
        let mut h = Harness::default();
        h.apply(Event::submit(first, Utc::now())).unwrap();
        let state_before = h.state.clone();
        let history_before = h.history.clone();

        let result = h.apply(Event::submit(second, Utc::now()));

        prop_assert_eq!(result, Err(TransitionError::Busy));
        prop_assert_eq!(&h.state, &state_before);
        prop_assert_eq!(&h.history, &history_before);
        prop_assert_eq!(h.requests.len(), 1);
    }

    /// Every request resolves back to Idle
    #[test]
    fn prop_resolution_returns_to_idle(
        text in "[a-z]{1,10}",
        outcome in prop_oneof![
            "[a-z ]{0,20}".prop_map(Op::Succeed),
            arb_responder_error().prop_map(Op::Fail),
        ],
    ) {
        let mut h = Harness::default();
        h.apply(Event::submit(text, Utc::now())).unwrap();
        prop_assert!(
            matches!(h.state, ConvState::AwaitingReply { .. }),
            "expected AwaitingReply, got {:?}",
            h.state
        );

        h.apply(outcome.into_event()).unwrap();
        prop_assert_eq!(&h.state, &ConvState::Idle);
        prop_assert!(h.shown_pending.is_empty());
    }
}
