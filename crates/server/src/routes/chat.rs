use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use roadmap_core::chat_fragments;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatResponse {
    pub reply: String,
    /// Reply split on sentence/line boundaries for bullet-style display.
    pub bullets: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatFailureResponse {
    pub reply: String,
}

#[utoipa::path(
    post,
    path = "/chatbot",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Chat reply", body = ChatResponse),
        (status = 400, description = "Empty message", body = ChatFailureResponse),
        (status = 500, description = "Gemini request failed", body = ChatFailureResponse)
    ),
    tag = "chat"
)]
pub async fn chatbot(State(state): State<AppState>, Json(payload): Json<ChatRequest>) -> Response {
    if payload.message.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ChatFailureResponse {
                reply: "No message provided".to_string(),
            }),
        )
            .into_response();
    }

    // Each call is a single stateless turn; no transcript is sent upstream.
    match state.gemini.reply(&payload.message).await {
        Ok(reply) => {
            let bullets = chat_fragments(&reply);
            (StatusCode::OK, Json(ChatResponse { reply, bullets })).into_response()
        }
        Err(e) => {
            error!(error = %e, "Chat completion failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatFailureResponse {
                    reply: "Something went wrong.".to_string(),
                }),
            )
                .into_response()
        }
    }
}
