//! Horizontal coordinates: azimuth and altitude.
//!
//! The observer-relative frame the renderer ultimately draws from.
//! Azimuth is the compass bearing, measured from north through east;
//! altitude is the angle above the horizon, negative below it.

use crate::errors::CoordResult;
use crate::validate::{check_full_turn, check_polar};
use skymap_core::math::angular_separation;
use skymap_core::Angle;
use std::fmt;

/// A validated (azimuth, altitude) pair.
///
/// Invariants: az in `[0, 2pi)`, alt in `[-pi/2, pi/2]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HorizontalCoordinates {
    az: Angle,
    alt: Angle,
}

impl HorizontalCoordinates {
    /// Creates horizontal coordinates from angular components.
    ///
    /// # Errors
    ///
    /// Fails when az is outside `[0, 2pi)` or alt outside `[-pi/2, pi/2]`.
    pub fn new(az: Angle, alt: Angle) -> CoordResult<Self> {
        check_full_turn("azimuth", az)?;
        check_polar("altitude", alt)?;
        Ok(Self { az, alt })
    }

    /// Creates horizontal coordinates from degrees.
    pub fn from_degrees(az_deg: f64, alt_deg: f64) -> CoordResult<Self> {
        Self::new(Angle::from_degrees(az_deg), Angle::from_degrees(alt_deg))
    }

    /// Builds from components whose domains the caller has already
    /// established (conversion formula outputs).
    #[inline]
    pub(crate) fn from_radians_unchecked(az: f64, alt: f64) -> Self {
        Self {
            az: Angle::from_radians(az),
            alt: Angle::from_radians(alt),
        }
    }

    /// Azimuth from north through east, in `[0, 2pi)`.
    #[inline]
    pub fn az(&self) -> Angle {
        self.az
    }

    /// Altitude above the horizon, in `[-pi/2, pi/2]`.
    #[inline]
    pub fn alt(&self) -> Angle {
        self.alt
    }

    /// Great-circle separation between two directions on the sky.
    ///
    /// Uses the Vincenty form, which stays accurate for both tiny
    /// separations and near-antipodal pairs.
    pub fn angular_distance_to(&self, other: &Self) -> Angle {
        let (sin_alt1, cos_alt1) = self.alt.sin_cos();
        let (sin_alt2, cos_alt2) = other.alt.sin_cos();
        let delta_az = (other.az - self.az).radians();

        Angle::from_radians(angular_separation(
            sin_alt1, cos_alt1, sin_alt2, cos_alt2, delta_az,
        ))
    }
}

impl fmt::Display for HorizontalCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(az={:.4}\u{b0}, alt={:.4}\u{b0})",
            self.az.degrees(),
            self.alt.degrees()
        )
    }
}
