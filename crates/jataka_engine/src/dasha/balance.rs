//! Birth balance: starting lord and remaining duration from the Moon.
//!
//! The Moon's nakshatra picks the first mahadasha lord; the fraction of
//! the nakshatra already traversed at birth reduces that first period
//! proportionally.

use jataka_math::normalize_360;

use crate::dasha::systems::DashaSystemConfig;

/// Span of one nakshatra: 360/27 degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Birth balance for a nakshatra-seeded dasha system.
///
/// Returns `(nakshatra_index, starting_lord_idx, remaining_years)`:
/// the Moon's nakshatra (0 = Ashwini .. 26 = Revati), the starting
/// position in the system's lord cycle, and the years left in that
/// lord's first period.
pub fn birth_balance(moon_sidereal_lon: f64, config: &DashaSystemConfig) -> (u8, usize, f64) {
    let lon = normalize_360(moon_sidereal_lon);
    let nak_idx = ((lon / NAKSHATRA_SPAN).floor() as u8).min(26);
    let position_in_nak = lon - nak_idx as f64 * NAKSHATRA_SPAN;
    let elapsed_fraction = position_in_nak / NAKSHATRA_SPAN;
    let lord_idx = config.starting_lord_idx(nak_idx);
    let remaining_years = config.entry_years(nak_idx) * (1.0 - elapsed_fraction);
    (nak_idx, lord_idx, remaining_years)
}
