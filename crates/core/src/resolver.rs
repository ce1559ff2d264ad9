//! Constraint & budget resolution.
//!
//! Merges the physics baseline and the raw regression estimate into one
//! final integer count. This stage is what makes the pipeline safe to
//! expose: every response stays inside a bounded, regulation-respecting
//! envelope regardless of what the statistical layer outputs.

use serde::Serialize;

use crate::baseline::BaselineResult;

/// Overrun factor the regression layer may add on top of the baseline.
pub const UPPER_BOUND_FACTOR: f64 = 1.5;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Which bound, if any, reshaped the regression estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundsApplied {
    None,
    ClampedLow,
    ClampedHigh,
    BudgetFallback,
}

/// The externally visible recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinalRecommendation {
    pub fixture_count: u32,
    pub bounds_applied: BoundsApplied,
    pub within_budget: bool,
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Round half-up to the nearest integer.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Resolve the raw regression estimate against the baseline, the upper
/// bound, and the budget.
///
/// Order is a fixed policy: round first, then clamp. Reordering changes
/// outcomes at `.5` boundaries.
///
/// The budget step runs only when both a budget and a unit cost are
/// supplied; it reduces the count directly to the baseline (never below),
/// because compliance cannot be sacrificed for cost. `within_budget` is
/// false when even the baseline count exceeds the budget.
pub fn resolve(
    baseline: &BaselineResult,
    raw_estimate: f64,
    budget: Option<f64>,
    unit_cost: Option<f64>,
) -> FinalRecommendation {
    let baseline_count = baseline.fixture_count;
    let candidate = round_half_up(raw_estimate);

    let mut bounds_applied = BoundsApplied::None;
    let mut count: u32;

    if candidate < i64::from(baseline_count) {
        // Hard safety invariant: never fewer fixtures than the
        // regulatory minimum.
        count = baseline_count;
        bounds_applied = BoundsApplied::ClampedLow;
    } else if candidate as f64 > UPPER_BOUND_FACTOR * f64::from(baseline_count) {
        // Bound runaway extrapolation at ceil(1.5 × baseline).
        count = (UPPER_BOUND_FACTOR * f64::from(baseline_count)).ceil() as u32;
        bounds_applied = BoundsApplied::ClampedHigh;
    } else {
        count = candidate as u32;
    }

    let mut within_budget = true;
    if let (Some(budget), Some(unit_cost)) = (budget, unit_cost) {
        let cost = f64::from(count) * unit_cost;
        if cost > budget {
            if count > baseline_count {
                count = baseline_count;
                bounds_applied = BoundsApplied::BudgetFallback;
            }
            within_budget = f64::from(count) * unit_cost <= budget;
        }
    }

    FinalRecommendation {
        fixture_count: count,
        bounds_applied,
        within_budget,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
