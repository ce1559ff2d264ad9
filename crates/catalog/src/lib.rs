//! Fixture catalog: deterministic fixture-type, brand, and pricing data.
//!
//! Implements the core's [`FixtureCatalog`] seam. Selection is fully
//! deterministic: the lexicographically first fixture type among a
//! category's candidates, the group's preferred brand (or its cheapest
//! brand on the economy path), and the cheapest matching model from the
//! optional CSV dataset.

pub mod dataset;
pub mod error;
pub mod tables;

use std::path::Path;

use luxcalc_core::pipeline::{FixtureCatalog, FixtureSelection};

use crate::dataset::CatalogRow;
use crate::error::CatalogError;
use crate::tables::{BrandSpec, FixtureTypeSpec};

/// The assembled catalog: static tables plus the optional model dataset.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    rows: Vec<CatalogRow>,
}

impl Catalog {
    /// Catalog with tables only; model names are synthesized.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Catalog backed by a CSV model dataset.
    pub fn from_csv_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        Ok(Self {
            rows: dataset::load_rows(path)?,
        })
    }

    /// Number of dataset rows loaded.
    pub fn dataset_len(&self) -> usize {
        self.rows.len()
    }

    /// Cheapest dataset model for a (fixture_type, brand) pair, falling
    /// back to a synthetic name when no row matches.
    fn model_name(&self, fixture_type: &str, brand: &str) -> String {
        self.rows
            .iter()
            .filter(|row| row.fixture_type == fixture_type && row.brand == brand)
            .min_by(|a, b| a.price.total_cmp(&b.price))
            .map(|row| row.model_name.clone())
            .unwrap_or_else(|| format!("{brand} {fixture_type}"))
    }

    fn build_selection(
        &self,
        fixture_lm: Option<f64>,
        brand: &'static BrandSpec,
        type_spec: &'static FixtureTypeSpec,
    ) -> FixtureSelection {
        let fixture_lm = fixture_lm.unwrap_or((type_spec.lm_low + type_spec.lm_high) / 2.0);
        FixtureSelection {
            fixture_type: type_spec.fixture_type.to_string(),
            brand: brand.brand.to_string(),
            model_name: self.model_name(type_spec.fixture_type, brand.brand),
            fixture_lm,
            unit_cost: tables::unit_cost(fixture_lm, type_spec, brand),
        }
    }

    fn selection_for(
        &self,
        category: &str,
        fixture_lm: Option<f64>,
        economy: bool,
    ) -> Option<FixtureSelection> {
        let mapping = tables::category_fixtures(category)?;
        let type_name = *mapping.fixture_types.iter().min()?;
        let type_spec = tables::fixture_type(type_name)?;
        let brand = if economy {
            tables::economy_brand(mapping.brand_group)?
        } else {
            tables::default_brand(mapping.brand_group)?
        };
        Some(self.build_selection(fixture_lm, brand, type_spec))
    }
}

impl FixtureCatalog for Catalog {
    fn select(&self, category: &str, fixture_lm: Option<f64>) -> Option<FixtureSelection> {
        self.selection_for(category, fixture_lm, false)
    }

    fn select_economy(
        &self,
        category: &str,
        fixture_lm: Option<f64>,
    ) -> Option<FixtureSelection> {
        self.selection_for(category, fixture_lm, true)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
