//! Observer position on Earth.
//!
//! [`GeographicCoordinates`] is the location component the sidereal-time
//! and equatorial-to-horizontal machinery is parameterized by.
//!
//! # Coordinate conventions
//!
//! - **Longitude**: east positive, `[-180°, 180°)`
//! - **Latitude**: north positive, `[-90°, 90°]`
//!
//! ```
//! use skymap_core::GeographicCoordinates;
//!
//! // EPFL campus
//! let obs = GeographicCoordinates::from_degrees(6.57, 46.52)?;
//! assert!((obs.lat().degrees() - 46.52).abs() < 1e-12);
//! # Ok::<(), skymap_core::CoreError>(())
//! ```

use crate::angle::Angle;
use crate::errors::{CoreError, CoreResult};
use crate::interval::{ClosedInterval, RightOpenInterval};
use std::fmt;

const LON_RANGE: RightOpenInterval = RightOpenInterval::CENTERED_TURN;

const LAT_RANGE: ClosedInterval = ClosedInterval::POLAR;

/// A geographic location, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeographicCoordinates {
    lon: Angle,
    lat: Angle,
}

impl GeographicCoordinates {
    /// Creates a location from angular coordinates.
    ///
    /// # Errors
    ///
    /// Fails when the longitude is outside `[-180°, 180°)` or the latitude
    /// outside `[-90°, 90°]`.
    pub fn new(lon: Angle, lat: Angle) -> CoreResult<Self> {
        if !LON_RANGE.contains(lon.radians()) {
            return Err(CoreError::out_of_domain(
                "longitude",
                lon.degrees(),
                "[-180\u{b0}, 180\u{b0})",
            ));
        }
        if !LAT_RANGE.contains(lat.radians()) {
            return Err(CoreError::out_of_domain(
                "latitude",
                lat.degrees(),
                "[-90\u{b0}, 90\u{b0}]",
            ));
        }
        Ok(Self { lon, lat })
    }

    /// Creates a location from coordinates in degrees.
    ///
    /// This is the typical entry point, since most sources provide
    /// coordinates in degrees.
    pub fn from_degrees(lon_deg: f64, lat_deg: f64) -> CoreResult<Self> {
        Self::new(Angle::from_degrees(lon_deg), Angle::from_degrees(lat_deg))
    }

    /// East-positive longitude.
    #[inline]
    pub fn lon(&self) -> Angle {
        self.lon
    }

    /// North-positive latitude.
    #[inline]
    pub fn lat(&self) -> Angle {
        self.lat
    }
}

impl fmt::Display for GeographicCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(lon={:.4}\u{b0}, lat={:.4}\u{b0})",
            self.lon.degrees(),
            self.lat.degrees()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_construction() {
        let g = GeographicCoordinates::from_degrees(6.57, 46.52).unwrap();
        assert!((g.lon().degrees() - 6.57).abs() < 1e-12);
        assert!((g.lat().degrees() - 46.52).abs() < 1e-12);
    }

    #[test]
    fn test_longitude_domain_is_right_open() {
        assert!(GeographicCoordinates::from_degrees(-180.0, 0.0).is_ok());
        assert!(GeographicCoordinates::from_degrees(179.999999, 0.0).is_ok());
        assert!(GeographicCoordinates::from_degrees(180.0, 0.0).is_err());
        assert!(GeographicCoordinates::from_degrees(-180.0001, 0.0).is_err());
    }

    #[test]
    fn test_latitude_domain_is_closed() {
        assert!(GeographicCoordinates::from_degrees(0.0, 90.0).is_ok());
        assert!(GeographicCoordinates::from_degrees(0.0, -90.0).is_ok());
        assert!(GeographicCoordinates::from_degrees(0.0, 90.0001).is_err());
        assert!(GeographicCoordinates::from_degrees(0.0, -90.0001).is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(GeographicCoordinates::from_degrees(f64::NAN, 0.0).is_err());
        assert!(GeographicCoordinates::from_degrees(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_display() {
        let g = GeographicCoordinates::from_degrees(6.57, 46.52).unwrap();
        assert_eq!(g.to_string(), "(lon=6.5700\u{b0}, lat=46.5200\u{b0})");
    }
}
