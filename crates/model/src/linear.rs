//! Linear regression scoring over the core feature vector.

use std::path::Path;

use luxcalc_core::error::CoreError;
use luxcalc_core::regressor::{FeatureVector, Regressor};

use crate::artifact::{self, ModelArtifact};
use crate::error::ModelError;

/// A validated linear model ready to score requests.
///
/// Stateless after construction; shared read-only across requests.
#[derive(Debug, Clone)]
pub struct LinearRegressor {
    intercept: f64,
    coefficients: [f64; 4],
}

impl LinearRegressor {
    /// Build from a validated artifact.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ModelError> {
        artifact.validate()?;
        let coefficients = [
            artifact.coefficients[0],
            artifact.coefficients[1],
            artifact.coefficients[2],
            artifact.coefficients[3],
        ];
        Ok(Self {
            intercept: artifact.intercept,
            coefficients,
        })
    }

    /// Load, validate, and build from a JSON artifact file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        Self::from_artifact(artifact::load_artifact(path)?)
    }
}

impl Regressor for LinearRegressor {
    fn score(&self, features: &FeatureVector) -> Result<f64, CoreError> {
        let columns = features.as_array();
        let estimate = self.intercept
            + self
                .coefficients
                .iter()
                .zip(columns.iter())
                .map(|(coef, value)| coef * value)
                .sum::<f64>();

        if !estimate.is_finite() {
            return Err(CoreError::ModelUnavailable(format!(
                "Linear model produced a non-finite estimate: {estimate}"
            )));
        }
        Ok(estimate)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
