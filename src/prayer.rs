//! Prayer Times Orchestrator
//!
//! Composes the solar position, hour-angle and Asr modules into the seven
//! canonical daily events, applies per-method branching and fixed
//! adjustments, and runs the advisory sequence validator.

use chrono::{Days, NaiveDate};
use serde::Serialize;
use tracing::warn;

use crate::asr::asr_altitude;
use crate::error::CalcError;
use crate::geo::GeoCoordinate;
use crate::hour_angle::{clock_to_minutes, event_time_from_noon, hour_angle, minutes_to_clock};
use crate::methods::{self, IshaRule};
use crate::options::{
    CalculationOptions, DEFAULT_SUNSET_ANGLE, DEFAULT_TIMEZONE_OFFSET, FALLBACK_ISHA_ANGLE,
};
use crate::solar::{solar_declination, solar_noon};

// ===================== TYPES =====================

/// The seven daily events, each a wall-clock "HH:MM" string truncated to
/// minute precision, plus any sequence-anomaly warnings.
#[derive(Debug, Clone, Serialize)]
pub struct PrayerTimes {
    pub fajr: String,
    pub sunrise: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub sunset: String,
    pub isha: String,
    /// Non-fatal diagnostics from the sequence validator. The engine never
    /// fails a request because events came out of order; callers decide
    /// whether an anomaly is fatal upstream.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

// ===================== ORCHESTRATOR =====================

/// Compute the full set of daily prayer times.
///
/// # Arguments
/// * `coordinate` - Location, validated against the operational region
/// * `date` - Calculation date (shifted first if a hijri adjustment is set)
/// * `method` - Calculation method code; unknown codes fall back to the
///   default method
/// * `options` - Per-request overrides
///
/// # Errors
/// [`CalcError::OutOfRegion`] for coordinates outside the bounding box and
/// [`CalcError::InvalidParameter`] for out-of-range overrides. Circumpolar
/// geometry and out-of-order sequences are not errors (see [`PrayerTimes`]).
pub fn compute_prayer_times(
    coordinate: GeoCoordinate,
    date: NaiveDate,
    method: &str,
    options: &CalculationOptions,
) -> Result<PrayerTimes, CalcError> {
    coordinate.validate_region()?;
    options.validate()?;

    let params = methods::resolve(method, options);
    let date = shift_date(date, options.hijri_adjustment.unwrap_or(0));
    let timezone_offset = options.timezone_offset.unwrap_or(DEFAULT_TIMEZONE_OFFSET);

    let lat = coordinate.latitude;
    let declination = solar_declination(date);
    let noon = solar_noon(coordinate.longitude, date, timezone_offset);

    // Angles are supplied as positive magnitudes but used as depressions
    let fajr_angle = -params.fajr_angle.abs();
    let sunset_angle = options.sunset_angle.unwrap_or(DEFAULT_SUNSET_ANGLE);
    let sunset_adjustment = options.sunset_adjustment.unwrap_or(0) as f64;

    let fajr_ha = hour_angle(lat, declination, fajr_angle).degrees();
    // The sunset-angle hour angle serves both sunrise and the sunset base
    let sunrise_ha = hour_angle(lat, declination, sunset_angle).degrees();
    let asr_ha = hour_angle(lat, declination, asr_altitude(lat, declination, params.asr_method))
        .degrees();

    let fajr = event_time_from_noon(noon, fajr_ha, true);
    let sunrise = event_time_from_noon(noon, sunrise_ha, true);
    let dhuhr = noon + params.dhuhr_adjustment as f64;
    let asr = event_time_from_noon(noon, asr_ha, false);
    let sunset = event_time_from_noon(noon, sunrise_ha, false) + sunset_adjustment;
    let maghrib = sunset + params.maghrib_adjustment as f64;

    let isha = match params.isha_rule {
        IshaRule::FixedOffset if params.isha_time_adjustment.is_some() => {
            // Fixed minutes after Maghrib, wrapped past midnight
            let mut isha = maghrib + params.isha_time_adjustment.unwrap_or(0) as f64;
            if isha >= 1440.0 {
                isha -= 1440.0;
            }
            isha
        }
        _ => {
            let angle = match params.isha_angle {
                Some(angle) => -angle.abs(),
                // Last resort when neither an angle nor an offset is set
                None => FALLBACK_ISHA_ANGLE,
            };
            let isha_ha = hour_angle(lat, declination, angle).degrees();
            event_time_from_noon(noon, isha_ha, false)
        }
    };

    let mut times = PrayerTimes {
        fajr: minutes_to_clock(fajr),
        sunrise: minutes_to_clock(sunrise),
        dhuhr: minutes_to_clock(dhuhr),
        asr: minutes_to_clock(asr),
        maghrib: minutes_to_clock(maghrib),
        sunset: minutes_to_clock(sunset),
        isha: minutes_to_clock(isha),
        warnings: Vec::new(),
    };

    times.warnings = validate_sequence(&times);
    for warning in &times.warnings {
        warn!(method, date = %date, "prayer time sequence anomaly: {warning}");
    }

    Ok(times)
}

/// Shift a date by a signed number of days.
fn shift_date(date: NaiveDate, days: i64) -> NaiveDate {
    if days >= 0 {
        date.checked_add_days(Days::new(days as u64)).unwrap_or(date)
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs())).unwrap_or(date)
    }
}

// ===================== SEQUENCE VALIDATION =====================

/// Check the strict chronological ordering of the daily events, comparing
/// the minute-truncated clock values. Returns one message per violated
/// adjacency; an empty list means the sequence is sound. The separately
/// reported `sunset` is not part of the chain (Maghrib covers it).
pub fn validate_sequence(times: &PrayerTimes) -> Vec<String> {
    let chain = [
        ("Fajr", &times.fajr),
        ("Sunrise", &times.sunrise),
        ("Dhuhr", &times.dhuhr),
        ("Asr", &times.asr),
        ("Maghrib", &times.maghrib),
        ("Isha", &times.isha),
    ];

    let mut warnings = Vec::new();
    for pair in chain.windows(2) {
        let (earlier_name, earlier) = pair[0];
        let (later_name, later) = pair[1];
        match (clock_to_minutes(earlier), clock_to_minutes(later)) {
            (Some(a), Some(b)) if a >= b => {
                warnings.push(format!("{earlier_name} must be before {later_name}"));
            }
            (Some(_), Some(_)) => {}
            _ => warnings.push(format!("unparseable time for {earlier_name} or {later_name}")),
        }
    }
    warnings
}

// ===================== TESTS =====================
