//! Domain logic for the luxcalc lighting estimation service.
//!
//! Implements the hybrid calculation pipeline: a regulatory reference
//! table, a deterministic physics baseline, a learned regression
//! adjustment, and a constraint/budget resolver, sequenced per request
//! by [`pipeline::Pipeline`]. Everything here is pure and synchronous;
//! the HTTP layer, model artifact loading, and catalog data live in the
//! sibling crates.

pub mod baseline;
pub mod error;
pub mod norms;
pub mod pipeline;
pub mod regressor;
pub mod resolver;
