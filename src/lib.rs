//! Prayer, fasting and sun time calculations for Bangladesh.
//!
//! The engine is a set of pure functions over value inputs: a geographic
//! coordinate, a calendar date, one of twenty named calculation methods and
//! an optional set of per-request overrides. Solar position math (declination,
//! equation of time, solar noon) feeds an hour-angle conversion that turns
//! solar altitude thresholds into wall-clock times.
//!
//! Timezones are plain numeric UTC offsets (default +6); the engine has no
//! notion of political timezones and performs no IANA lookups. Coordinates
//! are restricted to the operational bounding box the parameters were tuned
//! for (roughly Bangladesh); outside it every entry point refuses to compute.
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use salattimes::{compute_prayer_times, CalculationOptions, GeoCoordinate};
//!
//! let dhaka = GeoCoordinate { latitude: 23.8103, longitude: 90.4125 };
//! let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let times = compute_prayer_times(dhaka, date, "karachi", &CalculationOptions::default())?;
//! println!("Fajr {}  Maghrib {}", times.fajr, times.maghrib);
//! # Ok::<(), salattimes::CalcError>(())
//! ```

pub mod asr;
pub mod error;
pub mod fasting;
pub mod geo;
pub mod hijri;
pub mod hour_angle;
pub mod methods;
pub mod options;
pub mod prayer;
pub mod solar;

pub use error::CalcError;
pub use fasting::{compute_fasting_times, compute_sun_times, FastingTimes, SunTimes};
pub use geo::GeoCoordinate;
pub use methods::{AsrMethod, EffectiveParameters, IshaRule, Method};
pub use options::CalculationOptions;
pub use prayer::{compute_prayer_times, PrayerTimes};
