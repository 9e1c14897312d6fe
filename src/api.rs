//! HTTP API for the responder service
//!
//! `POST /api/chat` turns a conversation history into one assistant reply.

mod handlers;
mod types;

pub use handlers::{
    create_router, FALLBACK_REPLY, MESSAGES_REQUIRED_MESSAGE, SERVER_FAILURE_MESSAGE,
};
pub use types::*;

use crate::llm::{LlmService, Sampling};
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LlmService>,
    pub system_prompt: Arc<str>,
    pub sampling: Sampling,
}

impl AppState {
    pub fn new(llm: Arc<dyn LlmService>, system_prompt: impl Into<Arc<str>>) -> Self {
        Self {
            llm,
            system_prompt: system_prompt.into(),
            sampling: Sampling::default(),
        }
    }

    #[must_use]
    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }
}
