//! Static catalog tables: fixture types, category mappings, brands, and
//! the pricing formula.

// ---------------------------------------------------------------------------
// Fixture types
// ---------------------------------------------------------------------------

/// A fixture family with its typical luminous flux range.
pub struct FixtureTypeSpec {
    pub fixture_type: &'static str,
    /// Typical flux range, in lumens; the default flux is the midpoint.
    pub lm_low: f64,
    pub lm_high: f64,
    /// Price multiplier relative to a plain panel.
    pub price_coef: f64,
}

pub const FIXTURE_TYPES: &[FixtureTypeSpec] = &[
    FixtureTypeSpec {
        fixture_type: "bulkhead",
        lm_low: 800.0,
        lm_high: 1500.0,
        price_coef: 0.7,
    },
    FixtureTypeSpec {
        fixture_type: "downlight",
        lm_low: 1500.0,
        lm_high: 2500.0,
        price_coef: 0.9,
    },
    FixtureTypeSpec {
        fixture_type: "floodlight",
        lm_low: 8000.0,
        lm_high: 15000.0,
        price_coef: 1.3,
    },
    FixtureTypeSpec {
        fixture_type: "highbay",
        lm_low: 12000.0,
        lm_high: 20000.0,
        price_coef: 1.4,
    },
    FixtureTypeSpec {
        fixture_type: "linear",
        lm_low: 4000.0,
        lm_high: 6000.0,
        price_coef: 1.1,
    },
    FixtureTypeSpec {
        fixture_type: "panel",
        lm_low: 3000.0,
        lm_high: 4000.0,
        price_coef: 1.0,
    },
    FixtureTypeSpec {
        fixture_type: "street_lantern",
        lm_low: 5000.0,
        lm_high: 9000.0,
        price_coef: 1.2,
    },
    FixtureTypeSpec {
        fixture_type: "track_spot",
        lm_low: 2000.0,
        lm_high: 3500.0,
        price_coef: 1.05,
    },
];

/// Find a fixture type spec by name.
pub fn fixture_type(name: &str) -> Option<&'static FixtureTypeSpec> {
    FIXTURE_TYPES.iter().find(|spec| spec.fixture_type == name)
}

// ---------------------------------------------------------------------------
// Category mappings
// ---------------------------------------------------------------------------

/// Candidate fixture types and brand group for one room category.
pub struct CategoryFixtures {
    pub category: &'static str,
    pub fixture_types: &'static [&'static str],
    pub brand_group: &'static str,
}

pub const CATEGORY_FIXTURES: &[CategoryFixtures] = &[
    CategoryFixtures {
        category: "office",
        fixture_types: &["panel"],
        brand_group: "commercial",
    },
    CategoryFixtures {
        category: "open_plan_office",
        fixture_types: &["linear", "panel"],
        brand_group: "commercial",
    },
    CategoryFixtures {
        category: "classroom",
        fixture_types: &["panel"],
        brand_group: "commercial",
    },
    CategoryFixtures {
        category: "laboratory",
        fixture_types: &["linear", "panel"],
        brand_group: "commercial",
    },
    CategoryFixtures {
        category: "corridor",
        fixture_types: &["bulkhead", "downlight"],
        brand_group: "commercial",
    },
    CategoryFixtures {
        category: "retail",
        fixture_types: &["downlight", "track_spot"],
        brand_group: "commercial",
    },
    CategoryFixtures {
        category: "warehouse",
        fixture_types: &["highbay", "linear"],
        brand_group: "industrial",
    },
    CategoryFixtures {
        category: "workshop",
        fixture_types: &["highbay", "linear"],
        brand_group: "industrial",
    },
    CategoryFixtures {
        category: "parking_indoor",
        fixture_types: &["bulkhead", "linear"],
        brand_group: "industrial",
    },
    CategoryFixtures {
        category: "street",
        fixture_types: &["floodlight", "street_lantern"],
        brand_group: "outdoor",
    },
    CategoryFixtures {
        category: "escape_route",
        fixture_types: &["bulkhead"],
        brand_group: "outdoor",
    },
];

/// Find the fixture mapping for a category.
pub fn category_fixtures(category: &str) -> Option<&'static CategoryFixtures> {
    CATEGORY_FIXTURES
        .iter()
        .find(|mapping| mapping.category == category)
}

// ---------------------------------------------------------------------------
// Brands
// ---------------------------------------------------------------------------

/// A brand inside a brand group. The first brand listed for a group is
/// the preferred default; the cheapest coefficient is the economy pick.
pub struct BrandSpec {
    pub brand: &'static str,
    pub group: &'static str,
    pub price_coef: f64,
}

pub const BRANDS: &[BrandSpec] = &[
    BrandSpec {
        brand: "Luxerna",
        group: "commercial",
        price_coef: 1.15,
    },
    BrandSpec {
        brand: "Brightline",
        group: "commercial",
        price_coef: 1.0,
    },
    BrandSpec {
        brand: "Omnilux",
        group: "commercial",
        price_coef: 0.85,
    },
    BrandSpec {
        brand: "Vektra",
        group: "industrial",
        price_coef: 1.2,
    },
    BrandSpec {
        brand: "Halvik",
        group: "industrial",
        price_coef: 0.95,
    },
    BrandSpec {
        brand: "Boreal",
        group: "outdoor",
        price_coef: 1.25,
    },
    BrandSpec {
        brand: "Streton",
        group: "outdoor",
        price_coef: 0.9,
    },
];

/// The preferred (first listed) brand of a group.
pub fn default_brand(group: &str) -> Option<&'static BrandSpec> {
    BRANDS.iter().find(|brand| brand.group == group)
}

/// The cheapest brand of a group.
pub fn economy_brand(group: &str) -> Option<&'static BrandSpec> {
    BRANDS
        .iter()
        .filter(|brand| brand.group == group)
        .min_by(|a, b| a.price_coef.total_cmp(&b.price_coef))
}

// ---------------------------------------------------------------------------
// Pricing
// ---------------------------------------------------------------------------

/// Base price per lumen before brand and fixture coefficients.
pub const BASE_RATE_PER_LM: f64 = 0.5;

/// Indoor groups whose unit prices are normalized into a retail band.
pub const PRICE_CLAMPED_GROUPS: &[&str] = &["commercial"];

pub const PRICE_FLOOR: f64 = 800.0;
pub const PRICE_CEIL: f64 = 6000.0;

/// Unit price for one fixture.
pub fn unit_cost(fixture_lm: f64, type_spec: &FixtureTypeSpec, brand: &BrandSpec) -> f64 {
    let price = fixture_lm * BASE_RATE_PER_LM * brand.price_coef * type_spec.price_coef;
    if PRICE_CLAMPED_GROUPS.contains(&brand.group) {
        price.clamp(PRICE_FLOOR, PRICE_CEIL)
    } else {
        price
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
