//! Optional CSV dataset of concrete fixture models.
//!
//! Maps (fixture_type, brand) pairs to purchasable model names with list
//! prices. The catalog works without it, falling back to synthetic
//! `"<brand> <type>"` names.

use std::path::Path;

use serde::Deserialize;

use crate::error::CatalogError;

/// One dataset row.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRow {
    pub model_name: String,
    pub fixture_type: String,
    pub brand: String,
    /// Rated luminous flux, in lumens.
    pub lumens: f64,
    /// List price per unit.
    pub price: f64,
}

/// Load all rows from a CSV file with a header row.
pub fn load_rows(path: impl AsRef<Path>) -> Result<Vec<CatalogRow>, CatalogError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: CatalogRow = record?;
        rows.push(row);
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
