//! Pipeline orchestrator.
//!
//! Sequences the reference table, physics baseline, regression adjuster,
//! and constraint resolver for one request, and packages the result.
//! Each run is pure and confined to the request; the only shared values
//! are the read-only singletons injected at startup.

use std::sync::Arc;

use serde::Serialize;

use crate::baseline::{self, BaselineResult};
use crate::error::CoreError;
use crate::norms::NormTable;
use crate::regressor::{self, FeatureVector, Regressor};
use crate::resolver::{self, FinalRecommendation};

// ---------------------------------------------------------------------------
// Catalog seam
// ---------------------------------------------------------------------------

/// A concrete fixture choice with pricing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixtureSelection {
    pub fixture_type: String,
    pub brand: String,
    pub model_name: String,
    /// Luminous flux of one fixture, in lumens.
    pub fixture_lm: f64,
    /// Unit price in the catalog's currency.
    pub unit_cost: f64,
}

/// Fixture defaults and pricing live outside the core; the pipeline only
/// sees this capability.
pub trait FixtureCatalog: Send + Sync {
    /// Deterministic fixture selection for a category. A caller-supplied
    /// `fixture_lm` overrides the catalog's typical flux and is re-priced.
    fn select(&self, category: &str, fixture_lm: Option<f64>) -> Option<FixtureSelection>;

    /// Cheapest-brand alternative for the category, used when the primary
    /// selection blows the budget.
    fn select_economy(&self, category: &str, fixture_lm: Option<f64>)
        -> Option<FixtureSelection>;
}

// ---------------------------------------------------------------------------
// Request / result types
// ---------------------------------------------------------------------------

/// One lighting calculation request. Created per incoming call and
/// discarded after the response.
#[derive(Debug, Clone)]
pub struct CalculationRequest {
    pub category: String,
    /// Floor area for area categories.
    pub area_m2: Option<f64>,
    /// Run length for linear categories (street, escape route).
    pub length_m: Option<f64>,
    pub ceiling_h: f64,
    /// Luminous flux of the intended fixture; defaults to the catalog's
    /// typical fixture for the category when omitted.
    pub fixture_lm: Option<f64>,
    pub budget: Option<f64>,
}

/// Everything the pipeline derived for one request.
#[derive(Debug, Clone, Serialize)]
pub struct Calculation {
    pub category: String,
    pub effective_area_m2: f64,
    pub required_lux: f64,
    pub norm_ref: String,
    pub baseline: BaselineResult,
    /// Raw regression output before constraint resolution.
    pub raw_estimate: f64,
    pub recommendation: FinalRecommendation,
    /// The priced fixture selection, when a catalog is configured.
    pub fixture: Option<FixtureSelection>,
    /// `fixture_count × unit_cost`, when a catalog is configured.
    pub estimated_cost: Option<f64>,
    /// True when the regressor could not be evaluated and the pipeline
    /// fell back to the physics baseline.
    pub degraded: bool,
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// The assembled calculation pipeline.
///
/// Holds the two read-only singletons (norm table, trained regressor)
/// plus the optional cost catalog. Cheap to share behind an `Arc`; all
/// methods take `&self` and keep no per-request state.
pub struct Pipeline {
    norms: Arc<NormTable>,
    regressor: Option<Arc<dyn Regressor>>,
    catalog: Option<Arc<dyn FixtureCatalog>>,
}

impl Pipeline {
    pub fn new(
        norms: Arc<NormTable>,
        regressor: Option<Arc<dyn Regressor>>,
        catalog: Option<Arc<dyn FixtureCatalog>>,
    ) -> Self {
        Self {
            norms,
            regressor,
            catalog,
        }
    }

    /// The reference table this pipeline serves from.
    pub fn norms(&self) -> &NormTable {
        &self.norms
    }

    /// False when the service is running in physics-only mode.
    pub fn has_regressor(&self) -> bool {
        self.regressor.is_some()
    }

    /// Run the full pipeline for one request.
    ///
    /// Validation errors (`UnknownCategory`, `InvalidDimension`,
    /// `Validation`) propagate to the caller unchanged. A failing
    /// regressor is absorbed: the pipeline substitutes the baseline count
    /// and flags the result as degraded.
    pub fn calculate(&self, request: &CalculationRequest) -> Result<Calculation, CoreError> {
        if request.ceiling_h <= 0.0 || !request.ceiling_h.is_finite() {
            return Err(CoreError::InvalidDimension(format!(
                "ceiling_h must be positive, got {}",
                request.ceiling_h
            )));
        }
        if let Some(budget) = request.budget {
            if budget < 0.0 || !budget.is_finite() {
                return Err(CoreError::Validation(format!(
                    "budget must be non-negative, got {budget}"
                )));
            }
        }

        let entry = self.norms.lookup(&request.category)?;
        let area_m2 = entry.effective_area(request.area_m2, request.length_m)?;

        let mut selection = self
            .catalog
            .as_deref()
            .and_then(|catalog| catalog.select(&entry.category, request.fixture_lm));
        let fixture_lm = match request.fixture_lm {
            Some(lm) => lm,
            None => match &selection {
                Some(fixture) => fixture.fixture_lm,
                None => {
                    return Err(CoreError::Validation(format!(
                        "fixture_lm is required: no catalog default exists for category '{}'",
                        entry.category
                    )))
                }
            },
        };

        let baseline = baseline::compute_baseline(entry, area_m2, fixture_lm)?;

        let features = FeatureVector {
            area_m2,
            ceiling_h: request.ceiling_h,
            required_lux: entry.required_lux,
            fixture_lm,
        };

        // Graceful degradation: availability of the deterministic layer
        // is a stronger guarantee than availability of the ML layer.
        let (raw_estimate, degraded) = match self.regressor.as_deref() {
            Some(model) => match regressor::adjust(model, &features) {
                Ok(estimate) => (estimate.raw_count, false),
                Err(CoreError::ModelUnavailable(reason)) => {
                    tracing::warn!(
                        category = %entry.category,
                        %reason,
                        "Regressor unavailable, falling back to physics baseline"
                    );
                    (f64::from(baseline.fixture_count), true)
                }
                Err(other) => return Err(other),
            },
            None => (f64::from(baseline.fixture_count), true),
        };

        let unit_cost = selection.as_ref().map(|fixture| fixture.unit_cost);
        let mut recommendation =
            resolver::resolve(&baseline, raw_estimate, request.budget, unit_cost);

        // Budget path: retry with the category's cheapest brand before
        // reporting the budget as infeasible.
        if !recommendation.within_budget {
            if let (Some(catalog), Some(current)) = (self.catalog.as_deref(), selection.clone()) {
                if let Some(economy) =
                    catalog.select_economy(&entry.category, request.fixture_lm)
                {
                    if economy.unit_cost < current.unit_cost {
                        tracing::info!(
                            category = %entry.category,
                            brand = %economy.brand,
                            "Switching to economy brand to fit budget"
                        );
                        recommendation = resolver::resolve(
                            &baseline,
                            raw_estimate,
                            request.budget,
                            Some(economy.unit_cost),
                        );
                        selection = Some(economy);
                    }
                }
            }
        }

        let estimated_cost = selection
            .as_ref()
            .map(|fixture| f64::from(recommendation.fixture_count) * fixture.unit_cost);

        Ok(Calculation {
            category: entry.category.clone(),
            effective_area_m2: area_m2,
            required_lux: entry.required_lux,
            norm_ref: entry.norm_ref.clone(),
            baseline,
            raw_estimate,
            recommendation,
            fixture: selection,
            estimated_cost,
            degraded,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
