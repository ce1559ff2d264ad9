//! Regression adjustment layer over the physics baseline.
//!
//! The trained regressor is an opaque, pre-trained, stateless scoring
//! function injected into the pipeline. Its output carries no validity
//! guarantee -- bounding it is entirely the resolver's job.

use crate::error::CoreError;

/// Feature names in training order.
///
/// The artifact loader checks its `feature_names` against this list;
/// any difference means the artifact was trained on a different feature
/// construction and its predictions would be silently meaningless.
pub const FEATURE_NAMES: [&str; 4] = ["area_m2", "ceiling_h", "required_lux", "fixture_lm"];

/// Input features for the trained regressor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    /// Effective floor area, in m².
    pub area_m2: f64,
    /// Ceiling height, in m.
    pub ceiling_h: f64,
    /// Required illuminance from the reference table, in lux.
    pub required_lux: f64,
    /// Luminous flux of the selected fixture, in lumens.
    pub fixture_lm: f64,
}

impl FeatureVector {
    /// Flatten to the training-time column order (see [`FEATURE_NAMES`]).
    pub fn as_array(&self) -> [f64; 4] {
        [
            self.area_m2,
            self.ceiling_h,
            self.required_lux,
            self.fixture_lm,
        ]
    }
}

/// An opaque, pre-trained, stateless scoring function.
pub trait Regressor: Send + Sync {
    /// Score a feature vector into a raw fixture-count estimate.
    ///
    /// The output may be fractional, negative, or far out of range.
    /// Fails with `ModelUnavailable` when the model cannot be evaluated.
    fn score(&self, features: &FeatureVector) -> Result<f64, CoreError>;
}

/// Raw regression output prior to constraint resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionEstimate {
    pub raw_count: f64,
}

/// Apply the regressor to a feature vector.
///
/// A non-finite score is treated as an unevaluable model rather than
/// handed to the resolver.
pub fn adjust(
    regressor: &dyn Regressor,
    features: &FeatureVector,
) -> Result<RegressionEstimate, CoreError> {
    let raw_count = regressor.score(features)?;
    if !raw_count.is_finite() {
        return Err(CoreError::ModelUnavailable(format!(
            "Regressor returned a non-finite estimate: {raw_count}"
        )));
    }
    Ok(RegressionEstimate { raw_count })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
