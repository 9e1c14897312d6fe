//! Property Assistant
//!
//! A conversational assistant in two halves: a client-side conversation
//! controller that owns history and renders replies through an
//! injection-safe markup transformer, and a small responder service that
//! forwards history to an `OpenAI`-compatible completion endpoint.

pub mod api;
pub mod clock;
pub mod config;
pub mod llm;
pub mod markup;
pub mod message;
pub mod responder;
pub mod runtime;
pub mod state_machine;
pub mod system_prompt;
