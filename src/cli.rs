//! Command-Line Interface Module
//!
//! Argument parsing and validation for the salattimes binary.

use chrono::NaiveDate;
use clap::Parser;

use salattimes::error::CalcError;
use salattimes::methods::AsrMethod;
use salattimes::options::{parse_timezone_offset, CalculationOptions};

// ===================== CLI =====================

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Latitude in decimal degrees (-90 to 90)
    #[arg(long, allow_hyphen_values = true, value_parser = parse_latitude,
          required_unless_present = "list_methods", env = "SALATTIMES_LATITUDE")]
    pub latitude: Option<f64>,

    /// Longitude in decimal degrees (-180 to 180)
    #[arg(long, allow_hyphen_values = true, value_parser = parse_longitude,
          required_unless_present = "list_methods", env = "SALATTIMES_LONGITUDE")]
    pub longitude: Option<f64>,

    /// Date for calculations (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Calculation method code (see --list-methods)
    #[arg(long, default_value = "karachi", env = "SALATTIMES_METHOD")]
    pub method: String,

    /// What to compute
    #[arg(long, default_value = "prayer", value_parser = ["prayer", "fasting", "sun"])]
    pub mode: String,

    /// Minutes before Fajr at which Sehri ends (5 to 15, fasting mode)
    #[arg(long, default_value_t = 10, allow_hyphen_values = true)]
    pub sehri_margin: i64,

    /// Timezone as a fixed UTC offset in ±HH:MM form (default +06:00)
    #[arg(long, env = "SALATTIMES_TIMEZONE")]
    pub timezone: Option<String>,

    // ===================== METHOD OVERRIDES =====================
    /// Override the Fajr depression angle in degrees (10.0 to 24.5)
    #[arg(long)]
    pub fajr_angle: Option<f64>,

    /// Override the Isha depression angle in degrees (10.0 to 24.5)
    #[arg(long)]
    pub isha_angle: Option<f64>,

    /// Override the fixed-offset Isha delay after Maghrib (0 to 180 minutes)
    #[arg(long)]
    pub isha_time_adjustment: Option<i64>,

    /// Asr juristic school
    #[arg(long, value_parser = parse_asr_method)]
    pub asr_method: Option<AsrMethod>,

    /// Minutes after solar noon for Dhuhr (1 to 60)
    #[arg(long)]
    pub dhuhr_adjustment: Option<i64>,

    /// Minutes after sunset for Maghrib (1 to 15)
    #[arg(long)]
    pub maghrib_adjustment: Option<i64>,

    /// Additive minutes applied to the computed sunset
    #[arg(long, allow_hyphen_values = true)]
    pub sunset_adjustment: Option<i64>,

    /// Sunset depression angle in degrees (default -0.833)
    #[arg(long, allow_hyphen_values = true)]
    pub sunset_angle: Option<f64>,

    /// Shift the calculation date by whole days (-2 to +2, moon sighting)
    #[arg(long, allow_hyphen_values = true)]
    pub hijri_adjustment: Option<i64>,

    // ===================== OUTPUT =====================
    /// List the available calculation methods and exit
    #[arg(long)]
    pub list_methods: bool,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Collect the override flags into engine options. Range validation
    /// happens in the engine; only the timezone syntax is parsed here.
    pub fn to_options(&self) -> Result<CalculationOptions, CalcError> {
        let timezone_offset = match self.timezone.as_deref() {
            Some(tz) => Some(parse_timezone_offset(tz)?),
            None => None,
        };

        Ok(CalculationOptions {
            fajr_angle: self.fajr_angle,
            isha_angle: self.isha_angle,
            isha_time_adjustment: self.isha_time_adjustment,
            asr_method: self.asr_method,
            dhuhr_adjustment: self.dhuhr_adjustment,
            maghrib_adjustment: self.maghrib_adjustment,
            sunset_adjustment: self.sunset_adjustment,
            sunset_angle: self.sunset_angle,
            timezone_offset,
            hijri_adjustment: self.hijri_adjustment,
        })
    }
}

// ===================== CLI VALUE PARSERS =====================

fn parse_latitude(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(-90.0..=90.0).contains(&v) {
        return Err(format!("Latitude must be between -90 and 90, got {}", v));
    }
    Ok(v)
}

fn parse_longitude(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(-180.0..=180.0).contains(&v) {
        return Err(format!("Longitude must be between -180 and 180, got {}", v));
    }
    Ok(v)
}

fn parse_asr_method(s: &str) -> Result<AsrMethod, String> {
    s.parse()
}
