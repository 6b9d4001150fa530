#![warn(clippy::all, rust_2018_idioms)]

use thiserror::Error;

/// The two failure families a submission can end in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftErrorKind {
    /// The request never produced a usable HTTP response
    Transport,
    /// The service answered, but not with a generated text
    MalformedResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("no API key configured for the text-generation service")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("service returned HTTP {status}")]
    Status { status: u16, body: String },

    #[error("unexpected response: {reason}")]
    MalformedResponse { reason: String, raw: String },
}

impl DraftError {
    pub fn malformed(reason: impl Into<String>, raw: impl Into<String>) -> Self {
        DraftError::MalformedResponse {
            reason: reason.into(),
            raw: raw.into(),
        }
    }

    pub fn kind(&self) -> DraftErrorKind {
        match self {
            DraftError::MalformedResponse { .. } => DraftErrorKind::MalformedResponse,
            DraftError::MissingApiKey | DraftError::Transport(_) | DraftError::Status { .. } => {
                DraftErrorKind::Transport
            }
        }
    }

    /// Message shown in the draft output area
    pub fn user_message(&self) -> &'static str {
        match self.kind() {
            DraftErrorKind::MalformedResponse => {
                "Failed to generate draft: unexpected response from the AI service."
            }
            DraftErrorKind::Transport => "Could not connect to the AI service.",
        }
    }
}
