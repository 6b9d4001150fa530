//! Wire types of the `generateContent` endpoint
//!
//! Only the fields the deck reads are modelled. Everything optional on the wire
//! is optional here, and [`decode_generated_text`] is the single place that
//! turns a raw body into either the generated text or a malformed-response error.

#![warn(clippy::all, rust_2018_idioms)]

use super::error::DraftError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// A single user turn carrying the prompt
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// First non-empty text fragment of the first candidate
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .find(|text| !text.is_empty())
    }

    fn missing_text_reason(&self) -> String {
        match self.candidates.first() {
            None => match self
                .prompt_feedback
                .as_ref()
                .and_then(|f| f.block_reason.as_deref())
            {
                Some(reason) => format!("no candidates (prompt blocked: {})", reason),
                None => "no candidates".to_string(),
            },
            Some(candidate) => match candidate.finish_reason.as_deref() {
                Some(reason) => format!("first candidate has no text (finish reason: {})", reason),
                None => "first candidate has no text".to_string(),
            },
        }
    }
}

pub fn decode_generated_text(raw: &str) -> Result<String, DraftError> {
    let response: GenerateContentResponse = serde_json::from_str(raw)
        .map_err(|e| DraftError::malformed(format!("invalid JSON: {}", e), raw))?;

    match response.first_text() {
        Some(text) => Ok(text.to_string()),
        None => Err(DraftError::malformed(response.missing_text_reason(), raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::draft::error::DraftErrorKind;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(GenerateContentRequest::from_prompt("hello")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "contents": [{ "role": "user", "parts": [{ "text": "hello" }] }]
            })
        );
    }

    #[test]
    fn test_decode_first_candidate_text() {
        let raw = r#"{
            "candidates": [
                { "content": { "parts": [{ "text": "first" }, { "text": "second" }] } },
                { "content": { "parts": [{ "text": "other candidate" }] } }
            ]
        }"#;
        assert_eq!(decode_generated_text(raw).unwrap(), "first");
    }

    #[test]
    fn test_decode_skips_empty_fragments() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":""},{"text":"real"}]}}]}"#;
        assert_eq!(decode_generated_text(raw).unwrap(), "real");
    }

    #[test]
    fn test_decode_zero_candidates_is_malformed() {
        let err = decode_generated_text(r#"{"candidates":[]}"#).unwrap_err();
        assert_eq!(err.kind(), DraftErrorKind::MalformedResponse);
        match err {
            DraftError::MalformedResponse { reason, raw } => {
                assert_eq!(reason, "no candidates");
                assert_eq!(raw, r#"{"candidates":[]}"#);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_decode_blocked_prompt_reports_reason() {
        let raw = r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#;
        let err = decode_generated_text(raw).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn test_decode_candidate_without_parts() {
        let raw = r#"{"candidates":[{"finishReason":"MAX_TOKENS"}]}"#;
        let err = decode_generated_text(raw).unwrap_err();
        assert_eq!(err.kind(), DraftErrorKind::MalformedResponse);
        assert!(err.to_string().contains("MAX_TOKENS"));
    }

    #[test]
    fn test_decode_invalid_json() {
        let err = decode_generated_text("<html>bad gateway</html>").unwrap_err();
        assert_eq!(err.kind(), DraftErrorKind::MalformedResponse);
    }
}
