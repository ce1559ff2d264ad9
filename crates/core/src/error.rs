#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown room category: '{0}'")]
    UnknownCategory(String),

    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
