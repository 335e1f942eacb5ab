//! Asr Altitude Module
//!
//! The Asr prayer is anchored to a shadow-length condition: it begins when
//! an object's shadow equals its height plus the shadow it already cast at
//! noon. That shadow factor (k = 1) translates to a solar altitude via
//! tan(α) = 1 / (k + tan(φ − δ)).

use crate::methods::AsrMethod;

/// Solar altitude in degrees at which Asr begins.
///
/// # Arguments
/// * `latitude` - Observer latitude in degrees
/// * `declination` - Solar declination in degrees
/// * `asr_method` - Juristic school
pub fn asr_altitude(latitude: f64, declination: f64, asr_method: AsrMethod) -> f64 {
    let diff = (latitude - declination).to_radians();

    match asr_method {
        // Both schools use the single-shadow factor (k = 1) here. Hanafi is
        // often given k = 2 (double shadow) in the literature, but local
        // practice in this region uses k = 1 for both; keep them identical
        // until that is revisited with the issuing authorities.
        AsrMethod::Standard | AsrMethod::Hanafi => {
            let tan_asr = 1.0 / (1.0 + diff.tan());
            tan_asr.atan().to_degrees()
        }
    }
}

// ===================== TESTS =====================
