//! API Errors
//!
//! Failures of a single user action. None of them is fatal to the page.

/// Fallback text when the server rejects a request without saying why
const UNKNOWN_ERROR: &str = "Neznámá chyba";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Network down, CORS, aborted request
    #[error("Request failed: {0}")]
    Transport(String),

    /// Body was not the JSON we expected
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Non-2xx status, with the server's `error` field if present
    #[error("Rejected with status {status}: {}", .message.as_deref().unwrap_or(UNKNOWN_ERROR))]
    Rejected { status: u16, message: Option<String> },

    /// Field could not be parsed before sending
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ApiError {
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        let message = message.filter(|m| !m.trim().is_empty());
        ApiError::Rejected { status, message }
    }

    /// Text for a toast. `context` names the action for transport failures.
    pub fn user_message(&self, context: &str) -> String {
        match self {
            ApiError::Rejected { message, .. } => {
                format!("Chyba: {}", message.as_deref().unwrap_or(UNKNOWN_ERROR))
            }
            ApiError::InvalidInput(msg) => format!("Chyba: {}", msg),
            ApiError::Transport(_) | ApiError::Decode(_) => context.to_string(),
        }
    }
}
