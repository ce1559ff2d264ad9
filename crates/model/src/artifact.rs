//! On-disk format for a trained regression artifact.
//!
//! The artifact is a JSON document exported by the training job. Loading
//! validates the schema against the core's feature contract: feature
//! order and units must match training-time construction bit-for-bit,
//! or predictions are silently meaningless -- a mismatched artifact is
//! refused outright.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use luxcalc_core::regressor::FEATURE_NAMES;

use crate::error::ModelError;

/// Model type tag for a linear regression artifact.
pub const MODEL_TYPE_LINEAR: &str = "linear";

/// Offline evaluation metrics recorded at export time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrainingMetrics {
    /// Mean absolute error on the held-out split, in fixtures.
    pub mae: f64,
    /// Coefficient of determination on the held-out split.
    pub r2: f64,
}

/// A trained regression artifact as exported by the training job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Model family tag (currently only `"linear"`).
    pub model_type: String,
    /// Feature column names in training order.
    pub feature_names: Vec<String>,
    pub intercept: f64,
    /// One coefficient per feature, in `feature_names` order.
    pub coefficients: Vec<f64>,
    #[serde(default)]
    pub trained_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub training_rows: Option<u64>,
    #[serde(default)]
    pub metrics: Option<TrainingMetrics>,
}

impl ModelArtifact {
    /// Validate the artifact against the core feature contract.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.model_type != MODEL_TYPE_LINEAR {
            return Err(ModelError::UnsupportedModelType(self.model_type.clone()));
        }
        if self.feature_names != FEATURE_NAMES {
            return Err(ModelError::FeatureMismatch {
                expected: FEATURE_NAMES.iter().map(|n| n.to_string()).collect(),
                found: self.feature_names.clone(),
            });
        }
        if self.coefficients.len() != self.feature_names.len() {
            return Err(ModelError::ShapeMismatch {
                expected: self.feature_names.len(),
                found: self.coefficients.len(),
            });
        }
        Ok(())
    }
}

/// Load and validate an artifact from a JSON file.
pub fn load_artifact(path: impl AsRef<Path>) -> Result<ModelArtifact, ModelError> {
    let raw = std::fs::read_to_string(path)?;
    let artifact: ModelArtifact = serde_json::from_str(&raw)?;
    artifact.validate()?;
    Ok(artifact)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::io::Write;

    use assert_matches::assert_matches;

    use super::*;

    fn valid_artifact() -> ModelArtifact {
        ModelArtifact {
            model_type: MODEL_TYPE_LINEAR.to_string(),
            feature_names: FEATURE_NAMES.iter().map(|n| n.to_string()).collect(),
            intercept: 1.8,
            coefficients: vec![0.135, 0.42, 0.0065, -0.00125],
            trained_at: None,
            training_rows: Some(5000),
            metrics: Some(TrainingMetrics { mae: 0.6, r2: 0.91 }),
        }
    }

    #[test]
    fn valid_artifact_passes() {
        assert!(valid_artifact().validate().is_ok());
    }

    #[test]
    fn unsupported_model_type_refused() {
        let mut artifact = valid_artifact();
        artifact.model_type = "gradient_boosting".to_string();
        assert_matches!(
            artifact.validate(),
            Err(ModelError::UnsupportedModelType(t)) if t == "gradient_boosting"
        );
    }

    #[test]
    fn reordered_features_refused() {
        // Same names, different order: the weights would silently apply
        // to the wrong columns.
        let mut artifact = valid_artifact();
        artifact.feature_names.swap(0, 1);
        assert_matches!(artifact.validate(), Err(ModelError::FeatureMismatch { .. }));
    }

    #[test]
    fn coefficient_count_mismatch_refused() {
        let mut artifact = valid_artifact();
        artifact.coefficients.pop();
        assert_matches!(
            artifact.validate(),
            Err(ModelError::ShapeMismatch {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{}",
            serde_json::to_string(&valid_artifact()).unwrap()
        )
        .unwrap();

        let loaded = load_artifact(file.path()).unwrap();
        assert_eq!(loaded.intercept, 1.8);
        assert_eq!(loaded.coefficients.len(), 4);
    }

    #[test]
    fn missing_file_is_io_error() {
        assert_matches!(
            load_artifact("/nonexistent/model.json"),
            Err(ModelError::Io(_))
        );
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        assert_matches!(load_artifact(file.path()), Err(ModelError::Parse(_)));
    }
}
