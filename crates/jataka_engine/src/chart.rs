//! Birth chart input and derived placement facts.
//!
//! A [`BirthChart`] is supplied by the upstream ephemeris service and is
//! never mutated by the engine. Placements are pure derived values,
//! recomputed on request.

use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::graha::{ALL_GRAHAS, Graha};
use crate::rashi::{Rashi, bhava_of};
use crate::varga::{Varga, varga_rashi};

/// Immutable chart input: ascendant longitude plus per-graha longitudes.
///
/// Grahas missing from the chart are simply skipped by all derivations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthChart {
    ascendant: f64,
    longitudes: [Option<f64>; 9],
}

impl BirthChart {
    /// Create a chart with the given ascendant longitude and no grahas.
    pub fn new(ascendant_lon_deg: f64) -> Result<Self, ChartError> {
        if !ascendant_lon_deg.is_finite() {
            return Err(ChartError::InvalidInput("ascendant longitude must be finite"));
        }
        Ok(Self {
            ascendant: ascendant_lon_deg,
            longitudes: [None; 9],
        })
    }

    /// Set a graha's sidereal longitude.
    pub fn set_longitude(&mut self, graha: Graha, lon_deg: f64) -> Result<(), ChartError> {
        if !lon_deg.is_finite() {
            return Err(ChartError::InvalidInput("graha longitude must be finite"));
        }
        self.longitudes[graha.index() as usize] = Some(lon_deg);
        Ok(())
    }

    /// Ascendant sidereal longitude in degrees.
    pub fn ascendant(&self) -> f64 {
        self.ascendant
    }

    /// A graha's sidereal longitude, if present in the chart.
    pub fn longitude(&self, graha: Graha) -> Option<f64> {
        self.longitudes[graha.index() as usize]
    }
}

/// Sign and house of one graha in one divisional chart. Derived, never
/// stored independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementFact {
    pub graha: Graha,
    pub varga: Varga,
    pub rashi: Rashi,
    /// House 1..=12, counted from the ascendant's rashi in the same chart.
    pub bhava: u8,
}

/// Compute placements for every graha present in the chart.
///
/// The ascendant is transformed through the same varga as the grahas, so
/// houses stay consistent within each divisional chart.
pub fn placements(chart: &BirthChart, varga: Varga) -> Vec<PlacementFact> {
    let lagna_rashi = varga_rashi(chart.ascendant(), varga);
    ALL_GRAHAS
        .iter()
        .filter_map(|&graha| {
            let lon = chart.longitude(graha)?;
            let rashi = varga_rashi(lon, varga);
            Some(PlacementFact {
                graha,
                varga,
                rashi,
                bhava: bhava_of(rashi, lagna_rashi),
            })
        })
        .collect()
}
