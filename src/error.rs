use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ForgeError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    // --- Diffing ---
    MalformedDiff,

    // --- History ---
    HistoryReadFailed,
    HistoryWriteFailed,
    HistoryCorrupt,

    // --- Collaborators ---
    RewriteFailed,
    SummaryFailed,
    PersonaFailed,

    // --- Validation ---
    ValidationFailed,
    BoundsExceeded,
}

#[derive(Debug, Error)]
pub enum ForgeError {
    #[error("Diff Error: {message} (context: {context})")]
    Diff { code: ErrorCode, message: String, context: String },

    #[error("History Error: {message} (path: {path:?})")]
    History { code: ErrorCode, message: String, path: PathBuf },

    #[error("Flow Error: {message} (context: {context})")]
    Flow { code: ErrorCode, message: String, context: String },

    #[error("Validation Error: {message} (context: {context})")]
    Validation { code: ErrorCode, message: String, context: String },
}

impl ForgeError {
    /// Returns the machine-readable code carried by this error.
    pub fn code(&self) -> &ErrorCode {
        match self {
            ForgeError::Diff { code, .. }
            | ForgeError::History { code, .. }
            | ForgeError::Flow { code, .. }
            | ForgeError::Validation { code, .. } => code,
        }
    }
}
