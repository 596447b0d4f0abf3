use serde::{Deserialize, Serialize};

/// One text part of a content block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// A content block in a generateContent request
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

impl Content {
    /// Create a role-less content block holding one text part
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part { text: text.into() }],
        }
    }

    /// Create a user-role content block holding one text part
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// Request body for the generateContent endpoint
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Single-shot prompt without a role, as sent on the roadmap path
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::from_text(prompt)],
        }
    }

    /// Single user turn, as sent on the chat path
    pub fn user_turn(message: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::user(message)],
        }
    }
}

/// Error response body from the Gemini API
#[derive(Debug, Deserialize)]
pub struct GeminiApiError {
    pub error: GeminiApiErrorDetail,
}

/// Error detail
#[derive(Debug, Deserialize)]
pub struct GeminiApiErrorDetail {
    pub message: String,
    pub code: Option<u32>,
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_request_serialization() {
        let request = GenerateContentRequest::from_prompt("build a roadmap");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["contents"][0]["parts"][0]["text"], "build a roadmap");
        assert!(json["contents"][0].get("role").is_none());
    }

    #[test]
    fn test_user_turn_serialization() {
        let request = GenerateContentRequest::user_turn("Hello");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Hello");
    }

    #[test]
    fn test_error_body_deserialization() {
        let json = r#"{
            "error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}
        }"#;

        let error: GeminiApiError = serde_json::from_str(json).unwrap();
        assert_eq!(error.error.message, "API key not valid");
        assert_eq!(error.error.code, Some(400));
    }
}
