mod client;
mod error;
mod types;

pub use client::{first_candidate_text, GeminiClient};
pub use error::{GeminiError, GeminiResult};
pub use types::*;
