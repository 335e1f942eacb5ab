//! Calculation Options Module
//!
//! Per-request overrides for a calculation, their boundary range validation,
//! ±HH:MM timezone parsing, and the cache-boundary contract (only
//! zero-override requests are cacheable).

use chrono::NaiveDate;

use crate::error::CalcError;
use crate::methods::AsrMethod;

// ===================== DEFAULTS =====================

/// Default sunset depression angle: solar semi-diameter plus standard
/// atmospheric refraction.
pub const DEFAULT_SUNSET_ANGLE: f64 = -0.833;

/// Default timezone offset in hours from UTC (Bangladesh Standard Time).
pub const DEFAULT_TIMEZONE_OFFSET: f64 = 6.0;

/// Depression angle used for Isha when a method configures neither an angle
/// nor a fixed offset.
pub const FALLBACK_ISHA_ANGLE: f64 = -18.0;

// ===================== OPTIONS =====================

/// Per-request overrides. All fields are optional and independently
/// overridable; `None` means "use the method default".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CalculationOptions {
    /// Fajr depression angle in degrees (positive magnitude, 10.0-24.5)
    pub fajr_angle: Option<f64>,
    /// Isha depression angle in degrees (positive magnitude, 10.0-24.5)
    pub isha_angle: Option<f64>,
    /// Minutes after Maghrib for fixed-offset Isha (0-180)
    pub isha_time_adjustment: Option<i64>,
    pub asr_method: Option<AsrMethod>,
    /// Minutes after solar noon for Dhuhr (1-60)
    pub dhuhr_adjustment: Option<i64>,
    /// Minutes after sunset for Maghrib (1-15)
    pub maghrib_adjustment: Option<i64>,
    /// Additive minutes applied to the computed sunset (default 0)
    pub sunset_adjustment: Option<i64>,
    /// Sunset depression angle in degrees (default -0.833)
    pub sunset_angle: Option<f64>,
    /// Hours from UTC (default +6)
    pub timezone_offset: Option<f64>,
    /// Days to shift the calculation date before any solar math (-2 to +2)
    pub hijri_adjustment: Option<i64>,
}

impl CalculationOptions {
    /// Validate every supplied option against its allowed range.
    ///
    /// Violations are caller-input errors and are rejected before any solar
    /// math runs.
    pub fn validate(&self) -> Result<(), CalcError> {
        check_range("fajr_angle", self.fajr_angle, 10.0, 24.5)?;
        check_range("isha_angle", self.isha_angle, 10.0, 24.5)?;
        check_range("isha_time_adjustment", self.isha_time_adjustment.map(|v| v as f64), 0.0, 180.0)?;
        check_range("dhuhr_adjustment", self.dhuhr_adjustment.map(|v| v as f64), 1.0, 60.0)?;
        check_range("maghrib_adjustment", self.maghrib_adjustment.map(|v| v as f64), 1.0, 15.0)?;
        check_range("hijri_adjustment", self.hijri_adjustment.map(|v| v as f64), -2.0, 2.0)?;
        Ok(())
    }

    /// Whether a request with these options may be served from or written
    /// to the shared cache.
    ///
    /// Any override of a parameter that changes the computed times makes the
    /// request uncacheable; only method-default requests share cache entries.
    /// `sunset_angle`, `sunset_adjustment` and `hijri_adjustment` are *not*
    /// part of this set upstream, so they do not affect cacheability.
    pub fn is_cacheable(&self) -> bool {
        self.fajr_angle.is_none()
            && self.isha_angle.is_none()
            && self.isha_time_adjustment.is_none()
            && self.asr_method.is_none()
            && self.dhuhr_adjustment.is_none()
            && self.maghrib_adjustment.is_none()
            && self.timezone_offset.is_none()
    }
}

fn check_range(
    parameter: &'static str,
    value: Option<f64>,
    min: f64,
    max: f64,
) -> Result<(), CalcError> {
    match value {
        Some(v) if !(min..=max).contains(&v) => {
            Err(CalcError::InvalidParameter { parameter, value: v, min, max })
        }
        _ => Ok(()),
    }
}

// ===================== CACHE KEY =====================

/// Cache key for a method-default request: coordinates rounded to 1e-6°,
/// the date, and the method code.
pub fn cache_key(latitude: f64, longitude: f64, date: NaiveDate, method: &str) -> String {
    format!("{:.6}|{:.6}|{}|{}", latitude, longitude, date, method)
}

// ===================== TIMEZONE PARSING =====================

/// Parse a `±HH:MM` timezone string into fractional hours from UTC.
pub fn parse_timezone_offset(s: &str) -> Result<f64, CalcError> {
    let invalid = || CalcError::InvalidTimezone(s.to_string());

    let bytes = s.as_bytes();
    if bytes.len() != 6 || bytes[3] != b':' {
        return Err(invalid());
    }
    let sign = match bytes[0] {
        b'+' => 1.0,
        b'-' => -1.0,
        _ => return Err(invalid()),
    };
    if !s[1..3].bytes().all(|b| b.is_ascii_digit()) || !s[4..6].bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let hours: f64 = s[1..3].parse().map_err(|_| invalid())?;
    let minutes: f64 = s[4..6].parse().map_err(|_| invalid())?;
    if minutes >= 60.0 {
        return Err(invalid());
    }

    Ok(sign * (hours + minutes / 60.0))
}

/// Format a fractional-hour offset as `±HH:MM`.
pub fn format_timezone_offset(offset_hours: f64) -> String {
    let sign = if offset_hours >= 0.0 { '+' } else { '-' };
    let total_minutes = (offset_hours.abs() * 60.0).round() as i64;
    format!("{}{:02}:{:02}", sign, total_minutes / 60, total_minutes % 60)
}

// ===================== TESTS =====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_validate() {
        assert!(CalculationOptions::default().validate().is_ok());
    }

    #[test]
    fn test_angle_ranges() {
        let ok = CalculationOptions { fajr_angle: Some(18.0), ..Default::default() };
        assert!(ok.validate().is_ok());

        let low = CalculationOptions { fajr_angle: Some(9.5), ..Default::default() };
        assert!(matches!(
            low.validate(),
            Err(CalcError::InvalidParameter { parameter: "fajr_angle", .. })
        ));

        let high = CalculationOptions { isha_angle: Some(25.0), ..Default::default() };
        assert!(matches!(
            high.validate(),
            Err(CalcError::InvalidParameter { parameter: "isha_angle", .. })
        ));
    }

    #[test]
    fn test_adjustment_ranges() {
        let bad = CalculationOptions { dhuhr_adjustment: Some(0), ..Default::default() };
        assert!(bad.validate().is_err());

        let bad = CalculationOptions { maghrib_adjustment: Some(16), ..Default::default() };
        assert!(bad.validate().is_err());

        let bad = CalculationOptions { isha_time_adjustment: Some(181), ..Default::default() };
        assert!(bad.validate().is_err());

        let bad = CalculationOptions { hijri_adjustment: Some(3), ..Default::default() };
        assert!(bad.validate().is_err());

        let ok = CalculationOptions {
            dhuhr_adjustment: Some(1),
            maghrib_adjustment: Some(15),
            isha_time_adjustment: Some(0),
            hijri_adjustment: Some(-2),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_cacheability() {
        assert!(CalculationOptions::default().is_cacheable());

        let custom = CalculationOptions { fajr_angle: Some(18.0), ..Default::default() };
        assert!(!custom.is_cacheable());

        let tz = CalculationOptions { timezone_offset: Some(5.5), ..Default::default() };
        assert!(!tz.is_cacheable());

        // Sunset tuning and hijri shift do not affect cacheability upstream
        let sunset = CalculationOptions {
            sunset_adjustment: Some(2),
            sunset_angle: Some(-0.9),
            hijri_adjustment: Some(1),
            ..Default::default()
        };
        assert!(sunset.is_cacheable());
    }

    #[test]
    fn test_cache_key_rounding() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(
            cache_key(23.8103, 90.4125, date, "karachi"),
            "23.810300|90.412500|2024-03-15|karachi"
        );
    }

    #[test]
    fn test_parse_timezone_offset() {
        assert_eq!(parse_timezone_offset("+06:00").unwrap(), 6.0);
        assert_eq!(parse_timezone_offset("-05:30").unwrap(), -5.5);
        assert_eq!(parse_timezone_offset("+00:00").unwrap(), 0.0);
        assert!(parse_timezone_offset("06:00").is_err());
        assert!(parse_timezone_offset("+6:00").is_err());
        assert!(parse_timezone_offset("+06:60").is_err());
        assert!(parse_timezone_offset("+0a:00").is_err());
    }

    #[test]
    fn test_format_timezone_offset() {
        assert_eq!(format_timezone_offset(6.0), "+06:00");
        assert_eq!(format_timezone_offset(-5.5), "-05:30");
        assert_eq!(format_timezone_offset(0.0), "+00:00");
    }
}
