//! High-level derivation entry points.
//!
//! These functions validate their inputs once and then delegate to the
//! chart, dasha and interpretation modules. Callers that already hold
//! validated values can use the lower-level modules directly.

use crate::chart::{BirthChart, PlacementFact, placements};
use crate::dasha::systems::DashaSystemConfig;
use crate::dasha::tree::{DashaTree, mahadasha_sequence};
use crate::dasha::types::{DashaLevel, DashaSeed};
use crate::error::ChartError;
use crate::interpret::{Interpretation, resolve_all};
use crate::varga::Varga;

/// Build a lazily expanded dasha tree from a seed period.
pub fn derive_dasha_tree(
    seed: &DashaSeed,
    max_level: DashaLevel,
) -> Result<DashaTree, ChartError> {
    DashaTree::from_seed(seed, max_level)
}

/// Derive the full mahadasha cycle for a birth, one lazy tree per period.
///
/// The first tree's root covers only the birth balance; the remaining
/// roots run their full system years in cycle order.
pub fn derive_mahadashas(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    config: &DashaSystemConfig,
    max_level: DashaLevel,
) -> Result<Vec<DashaTree>, ChartError> {
    if !birth_jd.is_finite() {
        return Err(ChartError::InvalidInput("birth date must be finite"));
    }
    if !moon_sidereal_lon.is_finite() {
        return Err(ChartError::InvalidInput("moon longitude must be finite"));
    }
    let periods = mahadasha_sequence(birth_jd, moon_sidereal_lon, config);
    Ok(periods
        .into_iter()
        .map(|p| DashaTree::from_period(p, max_level))
        .collect())
}

/// Sign and house placements for every graha present in the chart,
/// within the given divisional chart.
pub fn derive_placements(chart: &BirthChart, varga: Varga) -> Vec<PlacementFact> {
    placements(chart, varga)
}

/// Resolved interpretation texts for every graha present in the chart.
pub fn derive_interpretations(chart: &BirthChart, varga: Varga) -> Vec<Interpretation> {
    resolve_all(chart, varga)
}
