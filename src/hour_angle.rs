//! Hour Angle & Time Conversion Module
//!
//! Converts solar altitude thresholds into hour angles and hour angles into
//! wall-clock times. The arccos domain edge cases (circumpolar conditions)
//! are represented as explicit tagged outcomes instead of letting an
//! out-of-domain `acos` produce NaN: callers always get a usable, if
//! physically degenerate, time.

// ===================== CONSTANTS =====================

/// Minutes in a day
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Degrees of hour angle per hour of time
const DEGREES_PER_HOUR: f64 = 15.0;

/// Denominator magnitudes below this are treated as the polar degenerate case
const DENOMINATOR_EPSILON: f64 = 1e-10;

// ===================== HOUR ANGLE =====================

/// Outcome of an altitude-to-hour-angle conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HourAngle {
    /// The sun crosses the target altitude; angle in degrees [0, 180].
    Crosses(f64),
    /// The sun never climbs to the target altitude on this day.
    /// Clamps to 0°.
    NeverReaches,
    /// The sun never descends to the target altitude on this day.
    /// Clamps to 180°.
    NeverSets,
}

impl HourAngle {
    /// The saturated hour angle in degrees.
    pub fn degrees(self) -> f64 {
        match self {
            HourAngle::Crosses(deg) => deg,
            HourAngle::NeverReaches => 0.0,
            HourAngle::NeverSets => 180.0,
        }
    }
}

/// Compute the hour angle at which the sun reaches a target altitude.
///
/// H = arccos[(sin α − sin φ · sin δ) / (cos φ · cos δ)]
///
/// # Arguments
/// * `latitude` - Observer latitude in degrees
/// * `declination` - Solar declination in degrees
/// * `altitude` - Target solar altitude in degrees (negative below horizon)
///
/// Never panics: out-of-domain ratios are returned as the tagged
/// circumpolar variants, and a vanishing denominator (poles) yields 0°.
pub fn hour_angle(latitude: f64, declination: f64, altitude: f64) -> HourAngle {
    let lat = latitude.to_radians();
    let dec = declination.to_radians();
    let alt = altitude.to_radians();

    let numerator = alt.sin() - lat.sin() * dec.sin();
    let denominator = lat.cos() * dec.cos();

    if denominator.abs() < DENOMINATOR_EPSILON {
        return HourAngle::Crosses(0.0);
    }

    let ratio = numerator / denominator;
    if ratio > 1.0 {
        HourAngle::NeverReaches
    } else if ratio < -1.0 {
        HourAngle::NeverSets
    } else {
        HourAngle::Crosses(ratio.acos().to_degrees())
    }
}

// ===================== TIME CONVERSION =====================

/// Convert an hour angle in degrees to hours from solar noon (15°/hour).
pub fn hour_angle_to_hours(hour_angle_deg: f64) -> f64 {
    hour_angle_deg / DEGREES_PER_HOUR
}

/// Clock time of a solar event, in minutes from midnight.
///
/// # Arguments
/// * `solar_noon_minutes` - Solar noon in minutes from midnight
/// * `hour_angle_deg` - Hour angle of the event in degrees
/// * `before_noon` - Whether the event is on the morning side of noon
///
/// The result is wrapped into [0, 1440) across day boundaries in both
/// directions.
pub fn event_time_from_noon(solar_noon_minutes: f64, hour_angle_deg: f64, before_noon: bool) -> f64 {
    let offset = hour_angle_to_hours(hour_angle_deg) * 60.0;
    let minutes = if before_noon {
        solar_noon_minutes - offset
    } else {
        solar_noon_minutes + offset
    };
    wrap_minutes(minutes)
}

/// Normalize minutes into [0, 1440).
pub fn wrap_minutes(minutes: f64) -> f64 {
    minutes.rem_euclid(MINUTES_PER_DAY)
}

/// Format minutes from midnight as a zero-padded "HH:MM" string.
///
/// Any value, including negative or ≥ 1440, is normalized into [0, 1440)
/// first; fractional minutes are truncated.
pub fn minutes_to_clock(minutes: f64) -> String {
    let normalized = wrap_minutes(minutes);
    let hours = (normalized / 60.0).floor() as u32;
    let mins = (normalized % 60.0).floor() as u32;
    format!("{:02}:{:02}", hours, mins)
}

/// Parse a "HH:MM" string back into minutes from midnight.
pub fn clock_to_minutes(clock: &str) -> Option<i64> {
    let (h, m) = clock.split_once(':')?;
    let hours: i64 = h.parse().ok()?;
    let minutes: i64 = m.parse().ok()?;
    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return None;
    }
    Some(hours * 60 + minutes)
}

// ===================== TESTS =====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_angle_equator_equinox_sunset() {
        // Sun on the celestial equator seen from the equator: geometric
        // sunset (altitude 0) is exactly 90° from noon
        match hour_angle(0.0, 0.0, 0.0) {
            HourAngle::Crosses(deg) => assert!((deg - 90.0).abs() < 1e-9),
            other => panic!("expected a crossing, got {:?}", other),
        }
    }

    #[test]
    fn test_hour_angle_never_reaches() {
        // At 80°N with zero declination the sun tops out around 10°;
        // an 18° target is unreachable and must clamp to 0°
        let h = hour_angle(80.0, 0.0, 18.0);
        assert_eq!(h, HourAngle::NeverReaches);
        assert_eq!(h.degrees(), 0.0);
    }

    #[test]
    fn test_hour_angle_never_sets() {
        // Same latitude, -18° target: the sun never gets that far below
        // the horizon, so the angle saturates at 180°
        let h = hour_angle(80.0, 0.0, -18.0);
        assert_eq!(h, HourAngle::NeverSets);
        assert_eq!(h.degrees(), 180.0);
    }

    #[test]
    fn test_hour_angle_pole_degenerate() {
        // cos(90°) makes the denominator vanish
        assert_eq!(hour_angle(90.0, 0.0, -0.833), HourAngle::Crosses(0.0));
    }

    #[test]
    fn test_hour_angle_to_hours() {
        assert!((hour_angle_to_hours(90.0) - 6.0).abs() < 1e-12);
        assert!((hour_angle_to_hours(15.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_event_time_from_noon() {
        // Noon at 12:00, 90° hour angle: 06:00 before, 18:00 after
        assert!((event_time_from_noon(720.0, 90.0, true) - 360.0).abs() < 1e-9);
        assert!((event_time_from_noon(720.0, 90.0, false) - 1080.0).abs() < 1e-9);
    }

    #[test]
    fn test_event_time_rollover() {
        // Past-midnight results wrap in both directions
        assert!((event_time_from_noon(1400.0, 120.0, false) - 440.0).abs() < 1e-9);
        assert!((event_time_from_noon(40.0, 120.0, true) - 960.0).abs() < 1e-9);
    }

    #[test]
    fn test_minutes_to_clock_wrapping() {
        assert_eq!(minutes_to_clock(0.0), "00:00");
        assert_eq!(minutes_to_clock(1440.0), "00:00");
        assert_eq!(minutes_to_clock(-30.0), "23:30");
        assert_eq!(minutes_to_clock(90.0), "01:30");
        assert_eq!(minutes_to_clock(725.5), "12:05");
        assert_eq!(minutes_to_clock(2880.0 + 61.0), "01:01");
    }

    #[test]
    fn test_clock_to_minutes() {
        assert_eq!(clock_to_minutes("00:00"), Some(0));
        assert_eq!(clock_to_minutes("23:30"), Some(1410));
        assert_eq!(clock_to_minutes("05:07"), Some(307));
        assert_eq!(clock_to_minutes("24:00"), None);
        assert_eq!(clock_to_minutes("12:60"), None);
        assert_eq!(clock_to_minutes("noon"), None);
    }
}
