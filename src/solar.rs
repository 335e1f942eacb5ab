//! Solar Position Module
//!
//! Day-of-year, solar declination, equation of time and solar noon. These
//! are the classic low-precision formulas (Cooper declination, the
//! three-term equation of time); they are accurate to well under a minute
//! at tropical latitudes, which is all the minute-truncated output needs.

use chrono::{Datelike, NaiveDate};

// ===================== DAY OF YEAR =====================

/// Day of year (1-366), computed as days elapsed since Dec 31 of the
/// previous year. The date difference handles leap years implicitly.
pub fn day_of_year(date: NaiveDate) -> i64 {
    // Dec 31 exists in every year
    let anchor = NaiveDate::from_ymd_opt(date.year() - 1, 12, 31).unwrap();
    (date - anchor).num_days()
}

// ===================== DECLINATION =====================

/// Solar declination in degrees for a given date.
///
/// δ = 23.45° × sin(360° × (284 + n) / 365.25), n = day of year.
/// Always within ±23.45°.
pub fn solar_declination(date: NaiveDate) -> f64 {
    let n = day_of_year(date) as f64;
    23.45 * (360.0 * (284.0 + n) / 365.25).to_radians().sin()
}

// ===================== EQUATION OF TIME =====================

/// Equation of time in minutes for a given date.
///
/// EoT = 9.87 × sin(2B) − 7.53 × cos(B) − 1.5 × sin(B),
/// B = 360° × (n − 81) / 365.25. Typical range is ±20 minutes.
pub fn equation_of_time(date: NaiveDate) -> f64 {
    let n = day_of_year(date) as f64;
    let b = (360.0 * (n - 81.0) / 365.25).to_radians();
    9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin()
}

// ===================== SOLAR NOON =====================

/// Solar noon in minutes from local midnight.
///
/// The standard meridian is derived from the numeric timezone offset
/// (15° per hour); the engine has no notion of political timezones.
/// The longitude correction is 4 minutes per degree east of the meridian.
pub fn solar_noon(longitude: f64, date: NaiveDate, timezone_offset_hours: f64) -> f64 {
    let standard_meridian = timezone_offset_hours * 15.0;
    720.0 + 4.0 * (longitude - standard_meridian) + equation_of_time(date)
}

// ===================== TESTS =====================
