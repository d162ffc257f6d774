//! Varga (divisional chart) transforms.
//!
//! Every varga divides the 30-degree rashi span into N equal segments and
//! maps each segment to a target rashi. All supported charts share one
//! transform: a divisor-specific segment count plus a divisor-specific
//! `(start, step)` rule. Only the rule table differs per chart.
//!
//! Chart definitions follow the BPHS Shodashavarga conventions.

use std::fmt::{Display, Formatter};

use jataka_math::normalize_360;
use serde::{Deserialize, Serialize};

use crate::rashi::{ALL_RASHIS, Rashi};

/// Supported divisional charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Varga {
    D1,
    D2,
    D3,
    D4,
    D7,
    D9,
    D10,
    D12,
    D30,
    D60,
}

/// All supported vargas in harmonic order.
pub const ALL_VARGAS: [Varga; 10] = [
    Varga::D1,
    Varga::D2,
    Varga::D3,
    Varga::D4,
    Varga::D7,
    Varga::D9,
    Varga::D10,
    Varga::D12,
    Varga::D30,
    Varga::D60,
];

impl Varga {
    /// Number of segments per rashi (the harmonic divisor).
    pub const fn divisions(self) -> u16 {
        match self {
            Self::D1 => 1,
            Self::D2 => 2,
            Self::D3 => 3,
            Self::D4 => 4,
            Self::D7 => 7,
            Self::D9 => 9,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D30 => 30,
            Self::D60 => 60,
        }
    }

    /// Chart key, e.g. "D9".
    pub const fn key(self) -> &'static str {
        match self {
            Self::D1 => "D1",
            Self::D2 => "D2",
            Self::D3 => "D3",
            Self::D4 => "D4",
            Self::D7 => "D7",
            Self::D9 => "D9",
            Self::D10 => "D10",
            Self::D12 => "D12",
            Self::D30 => "D30",
            Self::D60 => "D60",
        }
    }

    /// Sanskrit chart name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::D1 => "Rashi",
            Self::D2 => "Hora",
            Self::D3 => "Drekkana",
            Self::D4 => "Chaturthamsha",
            Self::D7 => "Saptamsha",
            Self::D9 => "Navamsha",
            Self::D10 => "Dashamsha",
            Self::D12 => "Dwadashamsha",
            Self::D30 => "Trimshamsha",
            Self::D60 => "Shashtiamsha",
        }
    }

    /// Reverse lookup from the harmonic divisor.
    pub fn from_code(code: u16) -> Option<Varga> {
        ALL_VARGAS.iter().copied().find(|v| v.divisions() == code)
    }
}

impl Display for Varga {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Starting rashi for the fire/earth/air/water trines, 0-based.
///
/// The three signs of each trine sit 120 degrees apart and share one
/// harmonic starting point: fire -> Mesha, earth -> Makara, air -> Tula,
/// water -> Karka.
const TRINE_START: [u16; 4] = [0, 9, 6, 3];

/// `(start, step)` rule for one varga given the natal rashi index.
///
/// The target for segment `i` is `(start + i * step) % 12`.
fn start_and_step(varga: Varga, natal_idx: u8) -> (u16, u16) {
    let natal = natal_idx as u16;
    // 0-based even indices are the odd (1-based) signs
    let odd_sign = natal_idx % 2 == 0;
    match varga {
        Varga::D1 => (natal, 1),
        Varga::D2 => ((natal * 2) % 12, 1),
        Varga::D3 => (natal, 4),
        Varga::D4 | Varga::D12 => (natal, 1),
        Varga::D7 => (if odd_sign { natal } else { (natal + 6) % 12 }, 1),
        Varga::D9 | Varga::D60 => (TRINE_START[(natal_idx % 4) as usize], 1),
        Varga::D10 => (if odd_sign { natal } else { (natal + 8) % 12 }, 1),
        Varga::D30 => (if odd_sign { 0 } else { 11 }, 1),
    }
}

/// Transform a sidereal longitude through a divisional chart.
///
/// Returns the transformed longitude in [0, 360). Total over all finite
/// input; the segment index is clamped at the upper rashi boundary.
pub fn varga_longitude(sidereal_lon_deg: f64, varga: Varga) -> f64 {
    let lon = normalize_360(sidereal_lon_deg);
    if varga == Varga::D1 {
        return lon;
    }

    let natal_idx = ((lon / 30.0).floor() as u8).min(11);
    let pos_in_rashi = lon - natal_idx as f64 * 30.0;
    let divisions = varga.divisions();
    let deg_per_div = 30.0 / divisions as f64;
    let div_idx = ((pos_in_rashi / deg_per_div).floor() as u16).min(divisions - 1);

    let (start, step) = start_and_step(varga, natal_idx);
    let target_idx = ((start + div_idx * step) % 12) as u8;

    // Rescale the position inside the segment to a full 0-30 span
    let pos_in_div = pos_in_rashi - div_idx as f64 * deg_per_div;
    let scaled = pos_in_div / deg_per_div * 30.0;

    (target_idx as f64 * 30.0 + scaled) % 360.0
}

/// Rashi occupied in a divisional chart.
pub fn varga_rashi(sidereal_lon_deg: f64, varga: Varga) -> Rashi {
    let lon = varga_longitude(sidereal_lon_deg, varga);
    let idx = ((lon / 30.0).floor() as u8).min(11);
    ALL_RASHIS[idx as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn d1_identity() {
        for i in 0..12 {
            let lon = i as f64 * 30.0 + 15.0;
            assert!((varga_longitude(lon, Varga::D1) - lon).abs() < 1e-10);
        }
    }

    #[test]
    fn navamsha_mesha_fifth_pada() {
        // Aries 15 deg: pada 5 of a fire sign starting at Mesha -> Simha
        assert_eq!(varga_rashi(15.0, Varga::D9), Rashi::Simha);
    }

    #[test]
    fn navamsha_trine_starts() {
        // First pada of each trine lands on the trine's start sign
        assert_eq!(varga_rashi(0.0, Varga::D9), Rashi::Mesha); // fire
        assert_eq!(varga_rashi(30.0, Varga::D9), Rashi::Makara); // earth
        assert_eq!(varga_rashi(60.0, Varga::D9), Rashi::Tula); // air
        assert_eq!(varga_rashi(90.0, Varga::D9), Rashi::Karka); // water
    }

    #[test]
    fn navamsha_even_coverage() {
        // Sweeping one pada (3 deg 20') at a time over the full circle
        // must visit each of the 12 rashis exactly 9 times.
        let pada = 30.0 / 9.0;
        let mut counts = [0u32; 12];
        for i in 0..108 {
            let lon = i as f64 * pada + pada / 2.0;
            counts[varga_rashi(lon, Varga::D9).index() as usize] += 1;
        }
        for (i, &c) in counts.iter().enumerate() {
            assert_eq!(c, 9, "rashi index {i} visited {c} times");
        }
    }

    #[test]
    fn navamsha_longitude_earth_sign() {
        // Vrishabha 15.5 deg: earth trine starts Makara, segment 4
        // -> (9+4)%12 = 1 (Vrishabha), rescaled 19.5 deg
        let result = varga_longitude(45.5, Varga::D9);
        assert!((result - 49.5).abs() < 0.01, "got {result}");
    }

    #[test]
    fn hora_doubled_start() {
        // Vrishabha 15.5: start (1*2)%12 = 2, segment 1 -> Karka, 1.0 deg
        let result = varga_longitude(45.5, Varga::D2);
        assert!((result - 91.0).abs() < 0.01, "got {result}");
    }

    #[test]
    fn drekkana_trine_step() {
        // Vrishabha 15.5: segment 1 with step 4 -> (1+4)%12 = 5 (Kanya)
        let result = varga_longitude(45.5, Varga::D3);
        assert!((result - 166.5).abs() < 0.01, "got {result}");
    }

    #[test]
    fn dashamsha_even_sign_offset() {
        // Vrishabha (even sign) 15.5: start (1+8)%12 = 9, segment 5
        // -> (9+5)%12 = 2 (Mithuna)
        assert_eq!(varga_rashi(45.5, Varga::D10), Rashi::Mithuna);
    }

    #[test]
    fn trimshamsha_odd_even() {
        // Mesha (odd) 1.5 -> segment 1 from Mesha = Vrishabha
        assert_eq!(varga_rashi(1.5, Varga::D30), Rashi::Vrishabha);
        // Vrishabha (even) 1.5 -> segment 1 from Meena = Mesha
        assert_eq!(varga_rashi(31.5, Varga::D30), Rashi::Mesha);
    }

    #[test]
    fn saptamsha_odd_starts_natal() {
        // Mesha 0 deg: odd sign, segment 0 -> Mesha itself
        assert_eq!(varga_rashi(0.0, Varga::D7), Rashi::Mesha);
        // Vrishabha 30 deg: even sign, start (1+6)%12 = 7 -> Vrischika
        assert_eq!(varga_rashi(30.0, Varga::D7), Rashi::Vrischika);
    }

    #[test]
    fn all_vargas_output_in_range() {
        let lons = [0.0, 15.0, 29.999, 45.5, 90.0, 180.0, 270.0, 359.999, -10.0];
        for &lon in &lons {
            for &v in &ALL_VARGAS {
                let out = varga_longitude(lon, v);
                assert!(
                    (0.0..360.0).contains(&out),
                    "out of range: {v} lon={lon} out={out}"
                );
            }
        }
    }

    #[test]
    fn varga_from_code() {
        assert_eq!(Varga::from_code(9), Some(Varga::D9));
        assert_eq!(Varga::from_code(1), Some(Varga::D1));
        assert_eq!(Varga::from_code(13), None);
    }

    #[test]
    fn varga_keys_match_divisions() {
        for v in ALL_VARGAS {
            assert_eq!(v.key(), format!("D{}", v.divisions()));
        }
    }
}
