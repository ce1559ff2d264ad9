//! Regulatory reference table: required illuminance per room category.
//!
//! The table is built once at startup and shared read-only by every
//! request. A lookup never falls back to a default value -- a category
//! without an entry is a request error, because silently approximating a
//! regulatory requirement would invalidate the baseline's compliance
//! guarantee.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// How a category's illuminated surface is measured.
///
/// Indoor categories are sized by floor area. Street and escape-route
/// categories are linear: the request supplies a run length and the
/// effective area is `length × standard_width_m`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geometry {
    Area,
    Linear { standard_width_m: f64 },
}

fn default_geometry() -> Geometry {
    Geometry::Area
}

// ---------------------------------------------------------------------------
// Reference entries
// ---------------------------------------------------------------------------

/// One row of the regulatory reference table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceEntry {
    /// Category identifier, the join key between request input and
    /// regulatory data.
    pub category: String,
    /// Required maintained illuminance on the working plane, in lux.
    pub required_lux: f64,
    /// Maintenance factor applied on top of the requirement (>= 1),
    /// accounting for fixture degradation over time.
    pub maintenance_factor: f64,
    /// Citation for the requirement (standard and clause).
    pub norm_ref: String,
    /// How the illuminated surface is measured.
    #[serde(default = "default_geometry")]
    pub geometry: Geometry,
}

impl ReferenceEntry {
    /// Resolve the effective floor area for a request against this
    /// entry's geometry.
    ///
    /// Area categories require `area_m2`; linear categories require
    /// `length_m` and multiply it by the category's standard width.
    /// A missing or non-positive measurement is an `InvalidDimension`.
    pub fn effective_area(
        &self,
        area_m2: Option<f64>,
        length_m: Option<f64>,
    ) -> Result<f64, CoreError> {
        match self.geometry {
            Geometry::Area => match area_m2 {
                Some(area) if area > 0.0 && area.is_finite() => Ok(area),
                Some(area) => Err(CoreError::InvalidDimension(format!(
                    "area_m2 must be positive, got {area}"
                ))),
                None => Err(CoreError::InvalidDimension(format!(
                    "area_m2 is required for category '{}'",
                    self.category
                ))),
            },
            Geometry::Linear { standard_width_m } => match length_m {
                Some(length) if length > 0.0 && length.is_finite() => {
                    Ok(length * standard_width_m)
                }
                Some(length) => Err(CoreError::InvalidDimension(format!(
                    "length_m must be positive, got {length}"
                ))),
                None => Err(CoreError::InvalidDimension(format!(
                    "length_m is required for linear category '{}'",
                    self.category
                ))),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Built-in defaults
// ---------------------------------------------------------------------------

/// A default reference table row.
pub struct DefaultNorm {
    pub category: &'static str,
    pub required_lux: f64,
    pub maintenance_factor: f64,
    pub norm_ref: &'static str,
    /// `Some(width)` marks a linear category.
    pub standard_width_m: Option<f64>,
}

/// Built-in reference table used when no override file is configured.
pub const DEFAULT_NORMS: &[DefaultNorm] = &[
    DefaultNorm {
        category: "office",
        required_lux: 500.0,
        maintenance_factor: 1.2,
        norm_ref: "EN 12464-1 §6.26.2",
        standard_width_m: None,
    },
    DefaultNorm {
        category: "open_plan_office",
        required_lux: 500.0,
        maintenance_factor: 1.25,
        norm_ref: "EN 12464-1 §6.26.4",
        standard_width_m: None,
    },
    DefaultNorm {
        category: "classroom",
        required_lux: 300.0,
        maintenance_factor: 1.2,
        norm_ref: "EN 12464-1 §6.38.2",
        standard_width_m: None,
    },
    DefaultNorm {
        category: "laboratory",
        required_lux: 500.0,
        maintenance_factor: 1.2,
        norm_ref: "EN 12464-1 §6.38.10",
        standard_width_m: None,
    },
    DefaultNorm {
        category: "corridor",
        required_lux: 100.0,
        maintenance_factor: 1.25,
        norm_ref: "EN 12464-1 §6.1.2",
        standard_width_m: None,
    },
    DefaultNorm {
        category: "retail",
        required_lux: 300.0,
        maintenance_factor: 1.2,
        norm_ref: "EN 12464-1 §6.33.1",
        standard_width_m: None,
    },
    DefaultNorm {
        category: "warehouse",
        required_lux: 150.0,
        maintenance_factor: 1.3,
        norm_ref: "EN 12464-1 §6.10.2",
        standard_width_m: None,
    },
    DefaultNorm {
        category: "workshop",
        required_lux: 300.0,
        maintenance_factor: 1.3,
        norm_ref: "EN 12464-1 §6.19.3",
        standard_width_m: None,
    },
    DefaultNorm {
        category: "parking_indoor",
        required_lux: 75.0,
        maintenance_factor: 1.25,
        norm_ref: "EN 12464-1 §6.4.4",
        standard_width_m: None,
    },
    // Linear categories: the request supplies a run length.
    DefaultNorm {
        category: "street",
        required_lux: 15.0,
        maintenance_factor: 1.3,
        norm_ref: "EN 13201-2 class P2",
        standard_width_m: Some(3.0),
    },
    DefaultNorm {
        category: "escape_route",
        required_lux: 5.0,
        maintenance_factor: 1.3,
        norm_ref: "EN 1838 §4.2",
        standard_width_m: Some(1.2),
    },
];

// ---------------------------------------------------------------------------
// Norm table
// ---------------------------------------------------------------------------

/// The read-only regulatory reference table.
///
/// Constructed once at startup, then shared by all requests. Construction
/// validates the whole table and fails rather than serving partial data.
#[derive(Debug, Clone)]
pub struct NormTable {
    entries: HashMap<String, ReferenceEntry>,
}

impl NormTable {
    /// Build the table from explicit entries, validating every row.
    pub fn from_entries(entries: Vec<ReferenceEntry>) -> Result<Self, CoreError> {
        if entries.is_empty() {
            return Err(CoreError::Validation(
                "Norm table is empty; refusing to start without regulatory data".to_string(),
            ));
        }

        let mut map = HashMap::with_capacity(entries.len());
        for entry in entries {
            if entry.required_lux <= 0.0 || !entry.required_lux.is_finite() {
                return Err(CoreError::Validation(format!(
                    "Category '{}' has non-positive required_lux {}",
                    entry.category, entry.required_lux
                )));
            }
            if entry.maintenance_factor < 1.0 || !entry.maintenance_factor.is_finite() {
                return Err(CoreError::Validation(format!(
                    "Category '{}' has maintenance_factor {} below 1.0",
                    entry.category, entry.maintenance_factor
                )));
            }
            if let Geometry::Linear { standard_width_m } = entry.geometry {
                if standard_width_m <= 0.0 || !standard_width_m.is_finite() {
                    return Err(CoreError::Validation(format!(
                        "Linear category '{}' has non-positive standard width {standard_width_m}",
                        entry.category
                    )));
                }
            }
            if map.contains_key(&entry.category) {
                return Err(CoreError::Validation(format!(
                    "Norm table contains duplicate category '{}'",
                    entry.category
                )));
            }
            map.insert(entry.category.clone(), entry);
        }

        Ok(Self { entries: map })
    }

    /// Build the table from the built-in defaults.
    pub fn builtin() -> Self {
        let entries = DEFAULT_NORMS
            .iter()
            .map(|norm| ReferenceEntry {
                category: norm.category.to_string(),
                required_lux: norm.required_lux,
                maintenance_factor: norm.maintenance_factor,
                norm_ref: norm.norm_ref.to_string(),
                geometry: match norm.standard_width_m {
                    Some(width) => Geometry::Linear {
                        standard_width_m: width,
                    },
                    None => Geometry::Area,
                },
            })
            .collect();

        Self::from_entries(entries).expect("built-in norm table must be valid")
    }

    /// Load the table from a JSON file (an array of [`ReferenceEntry`]).
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|err| {
            CoreError::Validation(format!(
                "Cannot read norm table from {}: {err}",
                path.display()
            ))
        })?;
        let entries: Vec<ReferenceEntry> = serde_json::from_str(&raw).map_err(|err| {
            CoreError::Validation(format!(
                "Malformed norm table in {}: {err}",
                path.display()
            ))
        })?;
        Self::from_entries(entries)
    }

    /// Look up the reference entry for a category.
    ///
    /// Fails with `UnknownCategory` when absent; never substitutes a
    /// default illuminance.
    pub fn lookup(&self, category: &str) -> Result<&ReferenceEntry, CoreError> {
        self.entries
            .get(category)
            .ok_or_else(|| CoreError::UnknownCategory(category.to_string()))
    }

    /// All entries, sorted by category name.
    pub fn categories(&self) -> Vec<&ReferenceEntry> {
        let mut entries: Vec<&ReferenceEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| a.category.cmp(&b.category));
        entries
    }

    /// Number of categories in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no entries (never the case post-construction).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
