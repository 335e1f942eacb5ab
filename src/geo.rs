//! Geographic Coordinate Module
//!
//! Provides the coordinate value type and the operational bounding box check.
//! The calculation parameters (angles, adjustments, default timezone) were
//! tuned for Bangladesh; the engine refuses to compute outside that region
//! rather than produce numbers it cannot stand behind.

use serde::Serialize;

use crate::error::CalcError;

// ===================== CONSTANTS =====================

/// Southern edge of the operational bounding box (degrees north)
pub const MIN_LATITUDE: f64 = 20.738;

/// Northern edge of the operational bounding box (degrees north)
pub const MAX_LATITUDE: f64 = 26.638;

/// Western edge of the operational bounding box (degrees east)
pub const MIN_LONGITUDE: f64 = 88.084;

/// Eastern edge of the operational bounding box (degrees east)
pub const MAX_LONGITUDE: f64 = 92.673;

// ===================== COORDINATE =====================

/// A geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoCoordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Check the coordinate against the operational bounding box.
    ///
    /// # Errors
    /// Returns [`CalcError::OutOfRegion`] when the coordinate lies outside
    /// the region the engine is tuned for.
    pub fn validate_region(&self) -> Result<(), CalcError> {
        let lat_ok = (MIN_LATITUDE..=MAX_LATITUDE).contains(&self.latitude);
        let lng_ok = (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&self.longitude);
        if lat_ok && lng_ok {
            Ok(())
        } else {
            Err(CalcError::OutOfRegion {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

// ===================== TESTS =====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dhaka_inside_region() {
        let c = GeoCoordinate { latitude: 23.8103, longitude: 90.4125 };
        assert!(c.validate_region().is_ok());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        for (lat, lng) in [
            (MIN_LATITUDE, MIN_LONGITUDE),
            (MAX_LATITUDE, MAX_LONGITUDE),
            (MIN_LATITUDE, MAX_LONGITUDE),
            (MAX_LATITUDE, MIN_LONGITUDE),
        ] {
            let c = GeoCoordinate { latitude: lat, longitude: lng };
            assert!(c.validate_region().is_ok(), "corner ({lat}, {lng}) should be valid");
        }
    }

    #[test]
    fn test_outside_region_rejected() {
        // Valid longitude, latitude too far north
        let c = GeoCoordinate { latitude: 30.0, longitude: 90.0 };
        assert_eq!(
            c.validate_region(),
            Err(CalcError::OutOfRegion { latitude: 30.0, longitude: 90.0 })
        );

        // Valid latitude, longitude too far west
        let c = GeoCoordinate { latitude: 23.0, longitude: 80.0 };
        assert!(c.validate_region().is_err());
    }
}
