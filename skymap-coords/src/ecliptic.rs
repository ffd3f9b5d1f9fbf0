//! Ecliptic coordinates: celestial longitude and latitude.
//!
//! The frame anchored to the plane of Earth's orbit. Solar-system positions
//! are naturally expressed here; converting them to the equatorial frame is
//! a rotation by the obliquity of the ecliptic
//! (see [`EclipticToEquatorial`](crate::convert::EclipticToEquatorial)).

use crate::errors::CoordResult;
use crate::validate::{check_full_turn, check_polar};
use skymap_core::Angle;
use std::fmt;

/// A validated (ecliptic longitude, ecliptic latitude) pair.
///
/// Invariants: lon in `[0, 2pi)`, lat in `[-pi/2, pi/2]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EclipticCoordinates {
    lon: Angle,
    lat: Angle,
}

impl EclipticCoordinates {
    /// Creates ecliptic coordinates from angular components.
    ///
    /// # Errors
    ///
    /// Fails when lon is outside `[0, 2pi)` or lat outside `[-pi/2, pi/2]`.
    pub fn new(lon: Angle, lat: Angle) -> CoordResult<Self> {
        check_full_turn("ecliptic longitude", lon)?;
        check_polar("ecliptic latitude", lat)?;
        Ok(Self { lon, lat })
    }

    /// Creates ecliptic coordinates from degrees.
    pub fn from_degrees(lon_deg: f64, lat_deg: f64) -> CoordResult<Self> {
        Self::new(Angle::from_degrees(lon_deg), Angle::from_degrees(lat_deg))
    }

    /// Ecliptic longitude, in `[0, 2pi)`.
    #[inline]
    pub fn lon(&self) -> Angle {
        self.lon
    }

    /// Ecliptic latitude, in `[-pi/2, pi/2]`.
    #[inline]
    pub fn lat(&self) -> Angle {
        self.lat
    }
}

impl fmt::Display for EclipticCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(\u{3bb}={:.4}\u{b0}, \u{3b2}={:.4}\u{b0})",
            self.lon.degrees(),
            self.lat.degrees()
        )
    }
}
