//! Equatorial coordinates: right ascension and declination.
//!
//! The equator-anchored frame star catalogues are published in. Right
//! ascension is the celestial analogue of longitude, measured eastward
//! from the vernal equinox and conventionally quoted in hours (24h = 360°);
//! declination is the analogue of latitude.
//!
//! ```
//! use skymap_coords::EquatorialCoordinates;
//!
//! // Sirius
//! let pos = EquatorialCoordinates::from_degrees(101.2875, -16.7161)?;
//! assert!((pos.ra_hours() - 6.7525).abs() < 1e-10);
//! # Ok::<(), skymap_coords::CoordError>(())
//! ```

use crate::errors::CoordResult;
use crate::validate::{check_full_turn, check_polar};
use skymap_core::Angle;
use std::fmt;

/// A validated (right ascension, declination) pair.
///
/// Invariants: ra in `[0, 2pi)`, dec in `[-pi/2, pi/2]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquatorialCoordinates {
    ra: Angle,
    dec: Angle,
}

impl EquatorialCoordinates {
    /// Creates equatorial coordinates from angular components.
    ///
    /// # Errors
    ///
    /// Fails when ra is outside `[0, 2pi)` or dec outside `[-pi/2, pi/2]`.
    pub fn new(ra: Angle, dec: Angle) -> CoordResult<Self> {
        check_full_turn("right ascension", ra)?;
        check_polar("declination", dec)?;
        Ok(Self { ra, dec })
    }

    /// Creates equatorial coordinates from degrees.
    pub fn from_degrees(ra_deg: f64, dec_deg: f64) -> CoordResult<Self> {
        Self::new(Angle::from_degrees(ra_deg), Angle::from_degrees(dec_deg))
    }

    /// Builds from components whose domains the caller has already
    /// established (conversion formula outputs).
    #[inline]
    pub(crate) fn from_radians_unchecked(ra: f64, dec: f64) -> Self {
        Self {
            ra: Angle::from_radians(ra),
            dec: Angle::from_radians(dec),
        }
    }

    /// Right ascension, in `[0, 2pi)`.
    #[inline]
    pub fn ra(&self) -> Angle {
        self.ra
    }

    /// Right ascension in decimal hours, in `[0, 24)`.
    #[inline]
    pub fn ra_hours(&self) -> f64 {
        self.ra.hours()
    }

    /// Declination, in `[-pi/2, pi/2]`.
    #[inline]
    pub fn dec(&self) -> Angle {
        self.dec
    }
}

impl fmt::Display for EquatorialCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(ra={:.4}h, dec={:.4}\u{b0})",
            self.ra_hours(),
            self.dec.degrees()
        )
    }
}
