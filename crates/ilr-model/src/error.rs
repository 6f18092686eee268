use thiserror::Error;

/// Configuration and loading failures.
///
/// Compliance violations are never reported through this type; they flow to a
/// `ValidationErrorHandler` as [`crate::ValidationError`] values.
#[derive(Debug, Error)]
pub enum IlrError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("required service not configured: {0}")]
    MissingService(&'static str),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, IlrError>;
