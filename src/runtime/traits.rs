//! Trait abstractions for runtime I/O
//!
//! The responder is the controller's only I/O seam; tests swap in a mock.

use crate::message::Turn;
use crate::responder::ResponderError;
use async_trait::async_trait;
use std::sync::Arc;

/// The external responder that produces assistant replies
#[async_trait]
pub trait Responder: Send + Sync {
    /// Send the full history, newest user turn last, and return the raw reply
    async fn reply(&self, history: &[Turn]) -> Result<String, ResponderError>;
}

#[async_trait]
impl<T: Responder + ?Sized> Responder for Arc<T> {
    async fn reply(&self, history: &[Turn]) -> Result<String, ResponderError> {
        (**self).reply(history).await
    }
}
