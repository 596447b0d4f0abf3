use thiserror::Error;

/// Gemini adapter error types
#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("Gemini API error: {message}")]
    Api {
        message: String,
        status_code: Option<u16>,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Gemini operations
pub type GeminiResult<T> = Result<T, GeminiError>;
