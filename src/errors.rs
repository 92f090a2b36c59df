use thiserror::Error;

/// Top-level application error.
/// All variants carry a human-readable message for display/logging.
#[derive(Debug, Error)]
pub enum AppError {
    // ── Configuration errors ─────────────────────────────────────────────────
    #[error("Missing environment variable: {name}")]
    MissingEnv { name: &'static str },

    #[error("Environment variable {name} has an invalid value: {value}")]
    InvalidEnv { name: &'static str, value: String },

    #[error("Unknown mail provider '{value}' (expected 'smtp' or 'emailjs')")]
    UnknownMailProvider { value: String },

    #[error("The chat assistant is not configured (GEMINI_API_KEY is missing)")]
    AssistantNotConfigured,

    // ── AI agent errors ──────────────────────────────────────────────────────
    #[error("Gemini service unreachable: {message}")]
    ModelUnreachable { message: String },

    #[error("Inference error: {message}")]
    InferenceError { message: String },

    // ── Validation errors ────────────────────────────────────────────────────
    #[error("Field '{field_name}' cannot be empty")]
    EmptyField { field_name: String },

    #[error("Field '{field_name}' exceeds max length of {max_length} (actual: {actual_length})")]
    FieldTooLong { field_name: String, max_length: usize, actual_length: usize },

    // ── Session errors ───────────────────────────────────────────────────────
    #[error("Chat session '{id}' not found")]
    SessionNotFound { id: String },

    #[error("Chat session '{id}' is still waiting on a previous request")]
    SessionBusy { id: String },

    #[error("Chat session '{id}' is completed and accepts no further input")]
    SessionCompleted { id: String },

    #[error("Operation not allowed while the session is {phase}")]
    WrongPhase { phase: &'static str },

    // ── System errors ────────────────────────────────────────────────────────
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::EmptyField { .. } | AppError::FieldTooLong { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::SessionNotFound { .. })
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, AppError::SessionBusy { .. })
    }

    pub fn is_agent_unavailable(&self) -> bool {
        matches!(
            self,
            AppError::AssistantNotConfigured | AppError::ModelUnreachable { .. }
        )
    }
}
