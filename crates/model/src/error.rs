/// Load-time failures for a trained-model artifact.
///
/// Score-time failures are reported as `CoreError::ModelUnavailable` by
/// the regressor implementation instead.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Cannot read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unsupported model type '{0}'")]
    UnsupportedModelType(String),

    #[error("Feature mismatch: artifact was trained on {found:?}, expected {expected:?}")]
    FeatureMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Shape mismatch: {found} coefficients for {expected} features")]
    ShapeMismatch { expected: usize, found: usize },
}
