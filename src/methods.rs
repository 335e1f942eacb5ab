//! Calculation Method Catalog
//!
//! The twenty calculation conventions, keyed by a string code and (for most)
//! a legacy numeric code. The table is process-wide immutable configuration;
//! only read accessors are exposed. Method parameters can be overridden per
//! request, field by field, through [`CalculationOptions`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::options::CalculationOptions;

// ===================== TYPES =====================

/// How Isha is derived for a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IshaRule {
    /// Isha at a solar depression angle below the horizon.
    Angle,
    /// Isha at a fixed number of minutes after Maghrib.
    FixedOffset,
}

/// Juristic school for the Asr shadow calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AsrMethod {
    Standard,
    Hanafi,
}

impl FromStr for AsrMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(AsrMethod::Standard),
            "hanafi" => Ok(AsrMethod::Hanafi),
            other => Err(format!("asr method must be \"standard\" or \"hanafi\", got \"{other}\"")),
        }
    }
}

impl fmt::Display for AsrMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AsrMethod::Standard => f.write_str("standard"),
            AsrMethod::Hanafi => f.write_str("hanafi"),
        }
    }
}

/// An immutable catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Method {
    /// Unique string code, e.g. "karachi"
    pub code: &'static str,
    /// Legacy numeric identifier (1-18); madhab variants have none
    pub numeric_code: Option<u8>,
    /// Human-readable name
    pub name: &'static str,
    /// Fajr depression angle in degrees (positive magnitude)
    pub fajr_angle: f64,
    /// Isha depression angle in degrees, if the method is angle-based
    pub isha_angle: Option<f64>,
    /// Minutes after Maghrib, used when `isha_rule` is `FixedOffset`
    pub isha_time_adjustment: Option<i64>,
    pub isha_rule: IshaRule,
    pub asr_method: AsrMethod,
    /// Minutes after solar noon for Dhuhr
    pub dhuhr_adjustment: i64,
    /// Minutes after sunset for Maghrib
    pub maghrib_adjustment: i64,
    /// Exactly one method carries this flag
    pub is_default: bool,
}

/// Method parameters after merging per-request overrides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveParameters {
    pub fajr_angle: f64,
    pub isha_angle: Option<f64>,
    pub isha_time_adjustment: Option<i64>,
    pub isha_rule: IshaRule,
    pub asr_method: AsrMethod,
    pub dhuhr_adjustment: i64,
    pub maghrib_adjustment: i64,
}

// ===================== CATALOG =====================

/// Code of the default method, used for unknown-code fallback.
pub const DEFAULT_METHOD: &str = "karachi";

macro_rules! angle_method {
    ($code:literal, $num:expr, $name:literal, fajr: $fajr:literal, isha: $isha:literal, asr: $asr:ident) => {
        Method {
            code: $code,
            numeric_code: $num,
            name: $name,
            fajr_angle: $fajr,
            isha_angle: Some($isha),
            isha_time_adjustment: None,
            isha_rule: IshaRule::Angle,
            asr_method: AsrMethod::$asr,
            dhuhr_adjustment: 1,
            maghrib_adjustment: 1,
            is_default: false,
        }
    };
}

macro_rules! offset_method {
    ($code:literal, $num:expr, $name:literal, fajr: $fajr:literal, isha_offset: $offset:literal) => {
        Method {
            code: $code,
            numeric_code: $num,
            name: $name,
            fajr_angle: $fajr,
            isha_angle: None,
            isha_time_adjustment: Some($offset),
            isha_rule: IshaRule::FixedOffset,
            asr_method: AsrMethod::Standard,
            dhuhr_adjustment: 1,
            maghrib_adjustment: 1,
            is_default: false,
        }
    };
}

/// The twenty calculation conventions. Numeric codes 10 and 17 are
/// unassigned upstream; the four madhab variants carry no numeric code and
/// are reachable only by string code.
pub const METHODS: [Method; 20] = [
    Method {
        is_default: true,
        ..angle_method!("karachi", Some(3), "University of Islamic Sciences, Karachi",
            fajr: 18.0, isha: 18.0, asr: Standard)
    },
    angle_method!("mwl", Some(1), "Muslim World League",
        fajr: 18.0, isha: 17.0, asr: Standard),
    angle_method!("isna", Some(5), "Islamic Society of North America",
        fajr: 15.0, isha: 15.0, asr: Standard),
    angle_method!("egyptian", Some(2), "Egyptian General Authority of Survey",
        fajr: 19.5, isha: 17.5, asr: Standard),
    offset_method!("umm_al_qura", Some(4), "Umm Al-Qura",
        fajr: 18.5, isha_offset: 90),
    angle_method!("singapore", Some(9), "Majlis Ugama Islam Singapura",
        fajr: 20.0, isha: 18.0, asr: Standard),
    angle_method!("turkey", Some(16), "Diyanet İşleri Başkanlığı, Turkey",
        fajr: 18.0, isha: 17.0, asr: Standard),
    angle_method!("jakim", Some(13), "JAKIM (Jabatan Kemajuan Islam Malaysia)",
        fajr: 20.0, isha: 18.0, asr: Standard),
    angle_method!("france", Some(8), "Union des Organisations Islamiques de France",
        fajr: 12.0, isha: 12.0, asr: Standard),
    angle_method!("algeria", Some(15), "Algerian Ministry of Religious Affairs and Wakfs",
        fajr: 18.0, isha: 17.0, asr: Standard),
    angle_method!("tunisia", Some(12), "Tunisian Ministry of Religious Affairs",
        fajr: 18.0, isha: 18.0, asr: Standard),
    angle_method!("indonesia", Some(11), "Sihat/Kemenag (Indonesia)",
        fajr: 20.0, isha: 18.0, asr: Standard),
    angle_method!("russia", Some(14), "Spiritual Administration of Muslims of Russia",
        fajr: 16.0, isha: 15.0, asr: Standard),
    angle_method!("jafri", Some(18), "Shia Ithna-Ashari, Leva Institute, Qum (Jafri)",
        fajr: 16.0, isha: 14.0, asr: Standard),
    angle_method!("hanafi", None, "Hanafi",
        fajr: 18.0, isha: 18.0, asr: Hanafi),
    angle_method!("shafi", None, "Shafi",
        fajr: 20.0, isha: 18.0, asr: Standard),
    angle_method!("maliki", None, "Maliki",
        fajr: 18.0, isha: 17.0, asr: Standard),
    angle_method!("hanbali", None, "Hanbali",
        fajr: 18.0, isha: 17.0, asr: Standard),
    angle_method!("custom_angles", Some(6), "Custom - Fajr and Isha Angle",
        fajr: 18.0, isha: 18.0, asr: Standard),
    offset_method!("custom_time", Some(7), "Custom - Fajr Angle and Isha Time Adjustment",
        fajr: 18.0, isha_offset: 90),
];

// ===================== ACCESSORS =====================

/// All catalog entries, in catalog order.
pub fn all() -> &'static [Method] {
    &METHODS
}

/// Look up a method by exact string code.
pub fn find(code: &str) -> Option<&'static Method> {
    METHODS.iter().find(|m| m.code == code)
}

/// The default method ("karachi").
pub fn default_method() -> &'static Method {
    // The catalog always carries exactly one default entry
    METHODS.iter().find(|m| m.is_default).unwrap()
}

/// Look up a method by its legacy numeric code. Madhab variants have no
/// numeric code and are unreachable via this path.
pub fn by_numeric_code(numeric_code: u8) -> Option<&'static Method> {
    METHODS.iter().find(|m| m.numeric_code == Some(numeric_code))
}

/// Whether a string code names a catalog entry.
pub fn is_valid(code: &str) -> bool {
    find(code).is_some()
}

/// Resolve a method code and per-request overrides into effective
/// parameters.
///
/// An unknown code resolves to the default method rather than failing; this
/// leniency is deliberate and load-bearing for callers that pass through
/// user-supplied codes. Overrides win per field. The Isha rule always comes
/// from the method itself: overriding `isha_angle` on a fixed-offset method
/// does not switch it to angle-based.
pub fn resolve(code: &str, overrides: &CalculationOptions) -> EffectiveParameters {
    let method = find(code).unwrap_or_else(default_method);

    EffectiveParameters {
        fajr_angle: overrides.fajr_angle.unwrap_or(method.fajr_angle),
        isha_angle: overrides.isha_angle.or(method.isha_angle),
        isha_time_adjustment: overrides.isha_time_adjustment.or(method.isha_time_adjustment),
        isha_rule: method.isha_rule,
        asr_method: overrides.asr_method.unwrap_or(method.asr_method),
        dhuhr_adjustment: overrides.dhuhr_adjustment.unwrap_or(method.dhuhr_adjustment),
        maghrib_adjustment: overrides.maghrib_adjustment.unwrap_or(method.maghrib_adjustment),
    }
}

// ===================== TESTS =====================
