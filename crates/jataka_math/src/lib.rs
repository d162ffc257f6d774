//! Dependency-free math primitives for chart derivation.
//!
//! Dates are Julian Day numbers (f64, days). Period arithmetic uses one
//! mean-year constant at every hierarchy level; proportional subdivision
//! scales against a once-computed weight sum, so child durations sum back
//! to the parent's duration up to floating-point error.

/// Mean Gregorian year length in days.
///
/// The same constant is applied at every dasha level. Mixing year
/// conventions across levels would silently break sub-period contiguity.
pub const DAYS_PER_YEAR: f64 = 365.2425;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Convert a fractional-year duration to days.
pub fn years_to_days(years: f64) -> f64 {
    years * DAYS_PER_YEAR
}

/// Add a fractional-year duration to a JD date.
pub fn add_years(start_jd: f64, years: f64) -> f64 {
    start_jd + years_to_days(years)
}

/// Split a total duration proportionally across a weight table.
///
/// Unit-agnostic: `total` and the results share whatever unit the caller
/// uses. Returns `weights[i] * total / sum(weights)` for each entry. The
/// weight sum is computed once, so the results sum to `total` up to
/// floating-point error.
///
/// # Panics
///
/// Panics if `weights` is empty or contains a non-positive or non-finite
/// entry. Period-system tables are validated at construction; reaching
/// this with a bad table is a programming error, not a runtime case.
pub fn distribute(total: f64, weights: &[f64]) -> Vec<f64> {
    assert!(!weights.is_empty(), "distribute: empty weight table");
    let mut sum = 0.0;
    for &w in weights {
        assert!(
            w.is_finite() && w > 0.0,
            "distribute: weights must be finite and strictly positive"
        );
        sum += w;
    }
    weights.iter().map(|&w| total * w / sum).collect()
}

/// Convert a Gregorian civil date to the Julian Day number at 00:00 UT.
///
/// Fliegel-Van Flandern algorithm, valid for all dates in the Gregorian
/// calendar. Month is 1-12, day 1-31.
pub fn jd_from_civil(year: i32, month: u32, day: u32) -> f64 {
    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;
    let jdn =
        day as i64 + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045;
    jdn as f64 - 0.5
}

/// Convert a Julian Day number to a Gregorian `(year, month, day)` triple.
///
/// The returned date is the civil day containing the instant (fractional
/// day discarded).
pub fn civil_from_jd(jd: f64) -> (i32, u32, u32) {
    let j = (jd + 0.5).floor() as i64;
    let a = j + 32044;
    let b = (4 * a + 3) / 146097;
    let c = a - 146097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;
    let day = (e - (153 * m + 2) / 5 + 1) as u32;
    let month = (m + 3 - 12 * (m / 10)) as u32;
    let year = (100 * b + d - 4800 + m / 10) as i32;
    (year, month, day)
}
