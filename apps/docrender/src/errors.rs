use thiserror::Error;

/// Pipeline-level error type.
///
/// Only raised at the orchestrator boundary and always before any output is
/// produced. Classification, styling, and layout never fail on valid input.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Document has no non-blank lines")]
    EmptyContent,

    #[error("Unsupported document type: {0}")]
    UnsupportedDocumentType(String),

    #[error("Invalid page config: {0}")]
    InvalidPageConfig(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl PipelineError {
    /// Stable machine-readable code for callers that surface errors over a wire.
    /// Pure; internal errors are logged where they are raised.
    pub fn code(&self) -> &'static str {
        match self {
            PipelineError::EmptyContent => "EMPTY_CONTENT",
            PipelineError::UnsupportedDocumentType(_) => "UNSUPPORTED_DOCUMENT_TYPE",
            PipelineError::InvalidPageConfig(_) => "INVALID_PAGE_CONFIG",
            PipelineError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
