//! Period-system definitions: ordered lord cycles and duration tables.
//!
//! A system is fully described by its lord sequence, the full-cycle years
//! of each lord, and the nakshatra-to-starting-lord map. The recursion
//! and all invariants are identical across systems; only the table
//! differs.

use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::graha::Graha;

/// Supported period systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DashaSystem {
    /// Classical 9-lord, 120-year system.
    Vimshottari,
    /// 8-lord, 36-year system (yoginis mapped to their graha lords).
    Yogini,
}

impl DashaSystem {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vimshottari => "Vimshottari",
            Self::Yogini => "Yogini",
        }
    }
}

/// Validated table for one period system.
#[derive(Debug, Clone)]
pub struct DashaSystemConfig {
    /// Which system this table describes.
    pub system: DashaSystem,
    /// Lord cycle in dasha order.
    pub lords: Vec<Graha>,
    /// Full-cycle years per lord, parallel to `lords`.
    pub years: Vec<f64>,
    /// Sum of `years`; computed once at construction.
    pub total_years: f64,
    /// Nakshatra (0-26) to starting position in `lords`.
    pub nakshatra_to_lord_idx: [u8; 27],
}

impl DashaSystemConfig {
    /// Build and validate a system table.
    ///
    /// Fails fast on an empty or mismatched table, non-positive years, or
    /// a nakshatra map entry outside the lord cycle.
    pub fn new(
        system: DashaSystem,
        lords: Vec<Graha>,
        years: Vec<f64>,
        nakshatra_to_lord_idx: [u8; 27],
    ) -> Result<Self, ChartError> {
        if lords.is_empty() {
            return Err(ChartError::InvalidInput("lord cycle must be non-empty"));
        }
        if lords.len() != years.len() {
            return Err(ChartError::InvalidInput(
                "lord cycle and year table must have equal length",
            ));
        }
        if years.iter().any(|y| !y.is_finite() || *y <= 0.0) {
            return Err(ChartError::InvalidInput(
                "year table entries must be finite and strictly positive",
            ));
        }
        if nakshatra_to_lord_idx
            .iter()
            .any(|&i| i as usize >= lords.len())
        {
            return Err(ChartError::InvalidInput(
                "nakshatra map entry outside the lord cycle",
            ));
        }
        let total_years = years.iter().sum();
        Ok(Self {
            system,
            lords,
            years,
            total_years,
            nakshatra_to_lord_idx,
        })
    }

    /// Position of a lord in the cycle. Falls back to 0 for a graha the
    /// cycle does not contain, matching the cyclic-rotation convention.
    pub fn lord_position(&self, lord: Graha) -> usize {
        self.lords.iter().position(|&g| g == lord).unwrap_or(0)
    }

    /// Starting lord position for a nakshatra index (0-26).
    pub fn starting_lord_idx(&self, nakshatra_index: u8) -> usize {
        self.nakshatra_to_lord_idx[nakshatra_index.min(26) as usize] as usize
    }

    /// Full-cycle years of the starting lord for a nakshatra.
    pub fn entry_years(&self, nakshatra_index: u8) -> f64 {
        self.years[self.starting_lord_idx(nakshatra_index)]
    }
}

// ---------------------------------------------------------------------------
// Vimshottari (120 years, 9 lords)
// ---------------------------------------------------------------------------

const VIMSHOTTARI_LORDS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Every 3rd nakshatra shares a lord, in cycle order from Ashwini.
const VIMSHOTTARI_NAK_MAP: [u8; 27] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, // Ashwini..Ashlesha
    0, 1, 2, 3, 4, 5, 6, 7, 8, // Magha..Jyeshtha
    0, 1, 2, 3, 4, 5, 6, 7, 8, // Mula..Revati
];

/// The classical Vimshottari table.
pub fn vimshottari() -> DashaSystemConfig {
    let years = VIMSHOTTARI_YEARS.to_vec();
    let total_years = years.iter().sum();
    DashaSystemConfig {
        system: DashaSystem::Vimshottari,
        lords: VIMSHOTTARI_LORDS.to_vec(),
        years,
        total_years,
        nakshatra_to_lord_idx: VIMSHOTTARI_NAK_MAP,
    }
}

// ---------------------------------------------------------------------------
// Yogini (36 years, 8 lords)
// ---------------------------------------------------------------------------

/// Graha lords of the 8 yoginis in cycle order
/// (Mangala, Pingala, Dhanya, Bhramari, Bhadrika, Ulka, Siddha, Sankata).
const YOGINI_LORDS: [Graha; 8] = [
    Graha::Chandra,
    Graha::Surya,
    Graha::Guru,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Shani,
    Graha::Shukra,
    Graha::Rahu,
];

const YOGINI_YEARS: [f64; 8] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];

/// Nakshatra-to-yogini map: the pattern repeats every 8 nakshatras; for
/// 1-indexed nakshatra n the yogini index is `(n + 3) % 8`, with 0
/// standing for the 8th yogini.
fn yogini_nak_map() -> [u8; 27] {
    let mut map = [0u8; 27];
    for (i, slot) in map.iter_mut().enumerate() {
        let rem = (i as u8 + 1 + 3) % 8;
        *slot = if rem == 0 { 7 } else { rem - 1 };
    }
    map
}

/// The 8-lord Yogini table.
pub fn yogini() -> DashaSystemConfig {
    let years = YOGINI_YEARS.to_vec();
    let total_years = years.iter().sum();
    DashaSystemConfig {
        system: DashaSystem::Yogini,
        lords: YOGINI_LORDS.to_vec(),
        years,
        total_years,
        nakshatra_to_lord_idx: yogini_nak_map(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vimshottari_totals_120() {
        let cfg = vimshottari();
        assert_eq!(cfg.lords.len(), 9);
        assert!((cfg.total_years - 120.0).abs() < 1e-12);
    }

    #[test]
    fn yogini_totals_36() {
        let cfg = yogini();
        assert_eq!(cfg.lords.len(), 8);
        assert!((cfg.total_years - 36.0).abs() < 1e-12);
    }

    #[test]
    fn vimshottari_ashwini_starts_ketu() {
        let cfg = vimshottari();
        assert_eq!(cfg.lords[cfg.starting_lord_idx(0)], Graha::Ketu);
        // Rohini (3) -> Chandra
        assert_eq!(cfg.lords[cfg.starting_lord_idx(3)], Graha::Chandra);
    }

    #[test]
    fn yogini_map_in_range() {
        let cfg = yogini();
        for n in 0..27u8 {
            assert!(cfg.starting_lord_idx(n) < 8);
        }
        // Ardra (index 5): (6+3)%8 = 1 -> yogini index 0 (Mangala/Chandra)
        assert_eq!(cfg.lords[cfg.starting_lord_idx(5)], Graha::Chandra);
    }

    #[test]
    fn lord_position_found_and_fallback() {
        let cfg = vimshottari();
        assert_eq!(cfg.lord_position(Graha::Surya), 2);
        let ycfg = yogini();
        // Ketu is not in the yogini cycle; rotation falls back to the head
        assert_eq!(ycfg.lord_position(Graha::Ketu), 0);
    }

    #[test]
    fn rejects_empty_cycle() {
        let r = DashaSystemConfig::new(DashaSystem::Vimshottari, vec![], vec![], [0; 27]);
        assert!(r.is_err());
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let r = DashaSystemConfig::new(
            DashaSystem::Vimshottari,
            vec![Graha::Surya, Graha::Chandra],
            vec![1.0],
            [0; 27],
        );
        assert!(r.is_err());
    }

    #[test]
    fn rejects_non_positive_years() {
        let r = DashaSystemConfig::new(
            DashaSystem::Vimshottari,
            vec![Graha::Surya],
            vec![0.0],
            [0; 27],
        );
        assert!(r.is_err());
    }

    #[test]
    fn rejects_out_of_range_nak_map() {
        let mut map = [0u8; 27];
        map[13] = 2;
        let r = DashaSystemConfig::new(
            DashaSystem::Vimshottari,
            vec![Graha::Surya, Graha::Chandra],
            vec![1.0, 2.0],
            map,
        );
        assert!(r.is_err());
    }
}
