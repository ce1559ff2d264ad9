//! Physics baseline: the deterministic, regulation-derived minimum
//! fixture count.
//!
//! This is the trustworthy lower bound of the pipeline: identical inputs
//! always yield identical results, which is what lets the resolver use it
//! as a hard floor under the regression estimate.

use serde::Serialize;

use crate::error::CoreError;
use crate::norms::ReferenceEntry;

/// Result of the physics baseline calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BaselineResult {
    /// Total luminous flux required to meet the category norm, in lumens.
    pub required_flux_lm: f64,
    /// Minimum compliant fixture count.
    pub fixture_count: u32,
}

/// Compute the minimum compliant fixture count for a room.
///
/// `Φ = E_norm × S × K`, then `N = ceil(Φ / Φ_fixture)`, floored at one
/// fixture. Rounding is always upward: under-provisioning light is not an
/// acceptable rounding error, only over-provisioning is.
pub fn compute_baseline(
    entry: &ReferenceEntry,
    area_m2: f64,
    fixture_lm: f64,
) -> Result<BaselineResult, CoreError> {
    if area_m2 <= 0.0 || !area_m2.is_finite() {
        return Err(CoreError::InvalidDimension(format!(
            "area_m2 must be positive, got {area_m2}"
        )));
    }
    if fixture_lm <= 0.0 || !fixture_lm.is_finite() {
        return Err(CoreError::InvalidDimension(format!(
            "fixture_lm must be positive, got {fixture_lm}"
        )));
    }

    let required_flux_lm = entry.required_lux * area_m2 * entry.maintenance_factor;
    let fixture_count = (required_flux_lm / fixture_lm).ceil().max(1.0) as u32;

    Ok(BaselineResult {
        required_flux_lm,
        fixture_count,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
