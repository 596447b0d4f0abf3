use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug)]
pub enum AppError {
    Validation(String),
    Upstream(gemini::GeminiError),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, error) = match self {
            AppError::Validation(detail) => (
                StatusCode::BAD_REQUEST,
                "All required fields must be filled.".to_string(),
                Some(detail),
            ),
            AppError::Upstream(err) => {
                tracing::error!(error = %err, "Gemini request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate roadmap from Gemini AI.".to_string(),
                    Some(err.to_string()),
                )
            }
            AppError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message, None),
        };

        let body = Json(ErrorResponse { message, error });

        (status, body).into_response()
    }
}

impl From<gemini::GeminiError> for AppError {
    fn from(err: gemini::GeminiError) -> Self {
        AppError::Upstream(err)
    }
}
