//! HTTP request handlers

use super::types::{ChatRequest, ChatResponse, ErrorResponse, HealthResponse};
use super::AppState;
use crate::llm::{LlmMessage, LlmRequest};
use crate::responder::RATE_LIMIT_MESSAGE;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

pub const MESSAGES_REQUIRED_MESSAGE: &str = "Messages array is required.";
pub const SERVER_FAILURE_MESSAGE: &str = "Something went wrong on our end. Please try again.";
/// Sent in place of an empty completion
pub const FALLBACK_REPLY: &str = "I'm sorry, I couldn't process that. Could you please rephrase?";

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let request = match payload {
        Ok(Json(request)) if !request.messages.is_empty() => request,
        Ok(_) => return Err(AppError::BadRequest(MESSAGES_REQUIRED_MESSAGE.to_string())),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected chat request body");
            return Err(AppError::BadRequest(MESSAGES_REQUIRED_MESSAGE.to_string()));
        }
    };

    let llm_request = LlmRequest {
        system: Some(state.system_prompt.to_string()),
        messages: request.messages.iter().map(LlmMessage::from).collect(),
        sampling: state.sampling,
    };

    match state.llm.complete(&llm_request).await {
        Ok(response) => {
            let reply = if response.text.trim().is_empty() {
                tracing::warn!(model = %state.llm.model_id(), "Empty completion, sending fallback reply");
                FALLBACK_REPLY.to_string()
            } else {
                response.text
            };
            Ok(Json(ChatResponse { reply }))
        }
        Err(e) if e.kind.is_rate_limit() => {
            tracing::warn!(error = %e, "Provider rate limit reached");
            Err(AppError::RateLimited(RATE_LIMIT_MESSAGE.to_string()))
        }
        Err(e) => {
            tracing::error!(error = %e, kind = ?e.kind, "Chat completion failed");
            Err(AppError::Internal(SERVER_FAILURE_MESSAGE.to_string()))
        }
    }
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    RateLimited(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::RateLimited(msg) => (StatusCode::TOO_MANY_REQUESTS, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
