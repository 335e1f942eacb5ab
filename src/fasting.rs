//! Fasting & Sun Times Module
//!
//! Derivations on top of the prayer times pipeline: Sehri/Iftar margins and
//! fast-duration arithmetic, plus a reduced sunrise/sunset-only pipeline
//! that does not consult the method catalog at all.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::CalcError;
use crate::geo::GeoCoordinate;
use crate::hour_angle::{
    clock_to_minutes, event_time_from_noon, hour_angle, minutes_to_clock, MINUTES_PER_DAY,
};
use crate::options::{CalculationOptions, DEFAULT_SUNSET_ANGLE};
use crate::prayer::compute_prayer_times;
use crate::solar::{solar_declination, solar_noon};

// ===================== CONSTANTS =====================

/// Smallest accepted Sehri margin in minutes (inclusive)
pub const MIN_SEHRI_MARGIN: i64 = 5;

/// Largest accepted Sehri margin in minutes (inclusive)
pub const MAX_SEHRI_MARGIN: i64 = 15;

// ===================== TYPES =====================

/// Fasting boundaries and durations for one day.
#[derive(Debug, Clone, Serialize)]
pub struct FastingTimes {
    /// Last minute of the pre-dawn meal: Fajr minus the Sehri margin
    pub sehri_end: String,
    pub fajr: String,
    pub sunrise: String,
    pub sunset: String,
    /// The fast breaks at Maghrib
    pub iftar: String,
    pub maghrib: String,
    pub fasting_duration_minutes: i64,
    pub fasting_duration_hours: f64,
    pub fasting_duration_formatted: String,
    pub day_length_minutes: i64,
    pub day_length_hours: f64,
    pub day_length_formatted: String,
}

/// Sunrise and sunset only.
#[derive(Debug, Clone, Serialize)]
pub struct SunTimes {
    pub sunrise: String,
    pub sunset: String,
}

// ===================== FASTING TIMES =====================

/// Compute the fasting boundaries for one day.
///
/// # Arguments
/// * `sehri_margin` - Minutes before Fajr at which Sehri ends (5-15)
///
/// # Errors
/// An out-of-range margin is rejected before anything is computed; the
/// underlying prayer calculation contributes its own errors.
pub fn compute_fasting_times(
    coordinate: GeoCoordinate,
    date: NaiveDate,
    method: &str,
    sehri_margin: i64,
    options: &CalculationOptions,
) -> Result<FastingTimes, CalcError> {
    if !(MIN_SEHRI_MARGIN..=MAX_SEHRI_MARGIN).contains(&sehri_margin) {
        return Err(CalcError::InvalidParameter {
            parameter: "sehri_margin",
            value: sehri_margin as f64,
            min: MIN_SEHRI_MARGIN as f64,
            max: MAX_SEHRI_MARGIN as f64,
        });
    }

    let prayer = compute_prayer_times(coordinate, date, method, options)?;

    // Durations work on the minute-truncated clock values so that the
    // published times and the published durations always agree
    let fajr = parse_own(&prayer.fajr);
    let sunrise = parse_own(&prayer.sunrise);
    let sunset = parse_own(&prayer.sunset);
    let maghrib = parse_own(&prayer.maghrib);

    let sehri_end = (fajr - sehri_margin).rem_euclid(MINUTES_PER_DAY as i64);
    let iftar = maghrib;

    let fasting_duration_minutes = (iftar - fajr).rem_euclid(MINUTES_PER_DAY as i64);
    let day_length_minutes = (sunset - sunrise).rem_euclid(MINUTES_PER_DAY as i64);

    Ok(FastingTimes {
        sehri_end: minutes_to_clock(sehri_end as f64),
        fajr: prayer.fajr,
        sunrise: prayer.sunrise,
        sunset: prayer.sunset,
        iftar: minutes_to_clock(iftar as f64),
        maghrib: prayer.maghrib,
        fasting_duration_minutes,
        fasting_duration_hours: round_hours(fasting_duration_minutes),
        fasting_duration_formatted: format_duration(fasting_duration_minutes),
        day_length_minutes,
        day_length_hours: round_hours(day_length_minutes),
        day_length_formatted: format_duration(day_length_minutes),
    })
}

/// Parse a clock string this module itself produced.
fn parse_own(clock: &str) -> i64 {
    // Engine-formatted times always parse
    clock_to_minutes(clock).unwrap_or(0)
}

/// Duration in hours, rounded to two decimals.
fn round_hours(minutes: i64) -> f64 {
    (minutes as f64 / 60.0 * 100.0).round() / 100.0
}

/// Duration as "H hours M minutes".
pub fn format_duration(minutes: i64) -> String {
    format!("{} hours {} minutes", minutes / 60, minutes % 60)
}

// ===================== SUN TIMES =====================

/// Compute sunrise and sunset only.
///
/// This is the one entry point that does not consult the method catalog:
/// only the sunset depression angle matters. The timezone offset is an
/// explicit argument; `options` contributes `sunset_angle` and
/// `sunset_adjustment` when set.
pub fn compute_sun_times(
    coordinate: GeoCoordinate,
    date: NaiveDate,
    timezone_offset_hours: f64,
    options: &CalculationOptions,
) -> Result<SunTimes, CalcError> {
    coordinate.validate_region()?;

    let declination = solar_declination(date);
    let noon = solar_noon(coordinate.longitude, date, timezone_offset_hours);
    let sunset_angle = options.sunset_angle.unwrap_or(DEFAULT_SUNSET_ANGLE);
    let sunset_adjustment = options.sunset_adjustment.unwrap_or(0) as f64;

    let ha = hour_angle(coordinate.latitude, declination, sunset_angle).degrees();
    let sunrise = event_time_from_noon(noon, ha, true);
    let sunset = event_time_from_noon(noon, ha, false) + sunset_adjustment;

    Ok(SunTimes {
        sunrise: minutes_to_clock(sunrise),
        sunset: minutes_to_clock(sunset),
    })
}

// ===================== TESTS =====================

#[cfg(test)]
mod tests {
    use super::*;

    const DHAKA: GeoCoordinate = GeoCoordinate { latitude: 23.8103, longitude: 90.4125 };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sehri_margin_bounds() {
        let d = date(2024, 3, 15);
        for margin in [MIN_SEHRI_MARGIN, 10, MAX_SEHRI_MARGIN] {
            assert!(
                compute_fasting_times(DHAKA, d, "karachi", margin, &Default::default()).is_ok(),
                "margin {margin} should be accepted"
            );
        }
        for margin in [3, 4, 16, 20, 0, -1] {
            let err = compute_fasting_times(DHAKA, d, "karachi", margin, &Default::default())
                .unwrap_err();
            assert!(
                matches!(err, CalcError::InvalidParameter { parameter: "sehri_margin", .. }),
                "margin {margin} should be rejected"
            );
        }
    }

    #[test]
    fn test_sehri_end_is_exactly_margin_before_fajr() {
        let d = date(2024, 3, 15);
        for margin in MIN_SEHRI_MARGIN..=MAX_SEHRI_MARGIN {
            let f = compute_fasting_times(DHAKA, d, "karachi", margin, &Default::default())
                .unwrap();
            let fajr = clock_to_minutes(&f.fajr).unwrap();
            let sehri = clock_to_minutes(&f.sehri_end).unwrap();
            assert_eq!((fajr - sehri).rem_euclid(1440), margin);
        }
    }

    #[test]
    fn test_iftar_equals_maghrib_and_durations() {
        let f = compute_fasting_times(DHAKA, date(2024, 3, 15), "karachi", 10, &Default::default())
            .unwrap();
        assert_eq!(f.iftar, f.maghrib);

        let fajr = clock_to_minutes(&f.fajr).unwrap();
        let iftar = clock_to_minutes(&f.iftar).unwrap();
        assert_eq!(f.fasting_duration_minutes, (iftar - fajr).rem_euclid(1440));

        // Dhaka in March fasts roughly 13 hours
        assert!((720..=840).contains(&f.fasting_duration_minutes));
        assert!(f.day_length_minutes < f.fasting_duration_minutes);
    }

    #[test]
    fn test_duration_formatting() {
        assert_eq!(format_duration(0), "0 hours 0 minutes");
        assert_eq!(format_duration(61), "1 hours 1 minutes");
        assert_eq!(format_duration(785), "13 hours 5 minutes");
        assert_eq!(round_hours(785), 13.08);
        assert_eq!(round_hours(90), 1.5);
    }

    #[test]
    fn test_fasting_out_of_region() {
        let err = compute_fasting_times(
            GeoCoordinate { latitude: 30.0, longitude: 90.0 },
            date(2024, 3, 15),
            "karachi",
            10,
            &Default::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CalcError::OutOfRegion { .. }));
    }

    #[test]
    fn test_sun_times_plausible() {
        let s = compute_sun_times(DHAKA, date(2024, 3, 15), 6.0, &Default::default()).unwrap();
        let sunrise = clock_to_minutes(&s.sunrise).unwrap();
        let sunset = clock_to_minutes(&s.sunset).unwrap();
        assert!((330..=420).contains(&sunrise), "sunrise {}", s.sunrise);
        assert!((1050..=1140).contains(&sunset), "sunset {}", s.sunset);
        // Near the equinox the day is close to 12 hours
        assert!(((sunset - sunrise) - 720).abs() < 30);
    }

    #[test]
    fn test_sun_times_match_prayer_pipeline() {
        // The reduced pipeline and the orchestrator agree on sunrise/sunset
        let d = date(2024, 7, 1);
        let s = compute_sun_times(DHAKA, d, 6.0, &Default::default()).unwrap();
        let p = compute_prayer_times(DHAKA, d, "karachi", &Default::default()).unwrap();
        assert_eq!(s.sunrise, p.sunrise);
        assert_eq!(s.sunset, p.sunset);
    }

    #[test]
    fn test_sun_times_out_of_region() {
        let err = compute_sun_times(
            GeoCoordinate { latitude: 30.0, longitude: 90.0 },
            date(2024, 3, 15),
            6.0,
            &Default::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CalcError::OutOfRegion { .. }));
    }
}
