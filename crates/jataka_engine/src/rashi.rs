//! Rashi (zodiac sign) identification and house-from-sign rotation.
//!
//! The ecliptic is divided into 12 signs of 30 degrees starting from
//! Mesha (Aries) at 0. Houses are the same 12-fold division counted
//! relative to the ascendant's sign; the two coordinate systems differ
//! only by a fixed rotation.

use std::fmt::{Display, Formatter};

use jataka_math::normalize_360;
use serde::{Deserialize, Serialize};

/// The 12 rashis from Mesha (Aries) to Meena (Pisces).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in zodiac order (index 0 = Mesha).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western name, used in interpretation text.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha = 0 .. Meena = 11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// 1-based sign number (Mesha = 1 .. Meena = 12).
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Rashi from a 0-based index taken mod 12.
    pub const fn from_index(index: u8) -> Rashi {
        ALL_RASHIS[(index % 12) as usize]
    }
}

impl Display for Rashi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}

/// Determine the rashi for a sidereal ecliptic longitude.
///
/// Each rashi spans exactly 30 degrees: Mesha = [0, 30), Vrishabha =
/// [30, 60), etc. Input is normalized into [0, 360) first.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> Rashi {
    let lon = normalize_360(sidereal_lon_deg);
    // Clamp guards the floating-point edge at exactly 360.0
    let idx = ((lon / 30.0).floor() as u8).min(11);
    ALL_RASHIS[idx as usize]
}

/// Position within the sign, in [0, 30) degrees.
pub fn degrees_in_rashi(sidereal_lon_deg: f64) -> f64 {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = ((lon / 30.0).floor()).min(11.0);
    lon - idx * 30.0
}

/// House (bhava) occupied by a rashi, counted from the ascendant's rashi.
///
/// Returns 1..=12 for every input pair; the ascendant's own rashi is
/// house 1.
pub fn bhava_of(rashi: Rashi, lagna_rashi: Rashi) -> u8 {
    let diff = (rashi.index() as i16 - lagna_rashi.index() as i16 + 12) % 12;
    diff as u8 + 1
}
