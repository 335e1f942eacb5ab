//! Output Formatting Module
//!
//! Text rendering for the salattimes binary. JSON output is handled in
//! main via serde.

use chrono::NaiveDate;

use salattimes::fasting::{format_duration, FastingTimes, SunTimes};
use salattimes::hijri::gregorian_to_hijri;
use salattimes::hour_angle::clock_to_minutes;
use salattimes::methods::{self, IshaRule};
use salattimes::options::format_timezone_offset;
use salattimes::{GeoCoordinate, PrayerTimes};

// ===================== HEADER =====================

/// Print the shared location/date header.
pub fn print_header(coordinate: GeoCoordinate, date: NaiveDate, timezone_offset: f64) {
    let hijri = gregorian_to_hijri(date);
    println!("Location : lat={:.6}, lon={:.6}", coordinate.latitude, coordinate.longitude);
    println!("Timezone : UTC{}", format_timezone_offset(timezone_offset));
    println!(
        "Date     : {} ({} {} {} AH)",
        date,
        hijri.day,
        hijri.month_name_en(),
        hijri.year
    );
    println!();
}

// ===================== PRAYER TIMES =====================

pub fn print_prayer_times(method: &str, times: &PrayerTimes) {
    let method_name = methods::find(method).map_or(method, |m| m.name);
    println!("Method   : {}", method_name);
    println!();
    println!("Fajr     : {}", times.fajr);
    println!("Sunrise  : {}", times.sunrise);
    println!("Dhuhr    : {}", times.dhuhr);
    println!("Asr      : {}", times.asr);
    println!("Sunset   : {}", times.sunset);
    println!("Maghrib  : {}", times.maghrib);
    println!("Isha     : {}", times.isha);

    if !times.warnings.is_empty() {
        println!();
        for warning in &times.warnings {
            println!("Warning  : {}", warning);
        }
    }
}

// ===================== FASTING TIMES =====================

pub fn print_fasting_times(method: &str, sehri_margin: i64, fasting: &FastingTimes) {
    let method_name = methods::find(method).map_or(method, |m| m.name);
    println!("Method       : {}", method_name);
    println!("Sehri margin : {} minutes before Fajr", sehri_margin);
    println!();
    println!("Sehri ends   : {}", fasting.sehri_end);
    println!("Fajr         : {}", fasting.fajr);
    println!("Sunrise      : {}", fasting.sunrise);
    println!("Sunset       : {}", fasting.sunset);
    println!("Iftar        : {}", fasting.iftar);
    println!();
    println!("Fasting      : {}", fasting.fasting_duration_formatted);
    println!("Daylight     : {}", fasting.day_length_formatted);
}

// ===================== SUN TIMES =====================

pub fn print_sun_times(sun: &SunTimes) {
    println!("Sunrise  : {}", sun.sunrise);
    println!("Sunset   : {}", sun.sunset);

    // Day length from the minute-truncated clock values
    if let (Some(sunrise), Some(sunset)) =
        (clock_to_minutes(&sun.sunrise), clock_to_minutes(&sun.sunset))
    {
        let day_length = (sunset - sunrise).rem_euclid(1440);
        println!("Daylight : {}", format_duration(day_length));
    }
}

// ===================== METHOD LIST =====================

pub fn print_method_list() {
    println!("Available calculation methods:");
    println!();
    for method in methods::all() {
        let numeric = method
            .numeric_code
            .map_or_else(|| "  ".to_string(), |n| format!("{:2}", n));
        let isha = match method.isha_rule {
            IshaRule::Angle => {
                format!("isha {:.1}°", method.isha_angle.unwrap_or(0.0))
            }
            IshaRule::FixedOffset => {
                format!("isha +{} min", method.isha_time_adjustment.unwrap_or(0))
            }
        };
        let default_marker = if method.is_default { " (default)" } else { "" };
        println!(
            "  {} {:14} fajr {:4.1}°, {:13} asr {:8}  {}{}",
            numeric,
            method.code,
            method.fajr_angle,
            format!("{},", isha),
            method.asr_method.to_string(),
            method.name,
            default_marker
        );
    }
}
