use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error};

use crate::error::{GeminiError, GeminiResult};
use crate::types::{GeminiApiError, GenerateContentRequest};

/// Client for the Gemini generateContent API.
///
/// Each call is a single attempt: network failures, non-success statuses and
/// malformed response bodies all surface as [`GeminiError`] carrying the
/// upstream message. No retry, no timeout beyond transport defaults.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
            model,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Send a roadmap prompt and return the decoded completion JSON
    /// unmodified.
    pub async fn generate(&self, prompt: &str) -> GeminiResult<Value> {
        self.generate_content(&GenerateContentRequest::from_prompt(prompt))
            .await
    }

    /// Send a single chat turn and return the extracted reply text.
    pub async fn reply(&self, message: &str) -> GeminiResult<String> {
        let completion = self
            .generate_content(&GenerateContentRequest::user_turn(message))
            .await?;

        first_candidate_text(&completion).ok_or_else(|| GeminiError::Api {
            message: "No completion returned".to_string(),
            status_code: None,
        })
    }

    async fn generate_content(&self, request: &GenerateContentRequest) -> GeminiResult<Value> {
        debug!(model = %self.model, "Sending generateContent request");

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", &self.api_key)])
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            if let Ok(error_resp) = serde_json::from_str::<GeminiApiError>(&error_text) {
                error!(
                    status = status.as_u16(),
                    "Gemini API error: {}", error_resp.error.message
                );
                return Err(GeminiError::Api {
                    message: error_resp.error.message,
                    status_code: Some(status.as_u16()),
                });
            }

            return Err(GeminiError::Api {
                message: error_text,
                status_code: Some(status.as_u16()),
            });
        }

        Ok(response.json().await?)
    }
}

/// Extract `candidates[0].content.parts[0].text` from a completion.
///
/// The completion is untrusted free-form JSON; a missing path yields `None`
/// rather than an error.
pub fn first_candidate_text(completion: &Value) -> Option<String> {
    completion
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .map(str::to_string)
}
