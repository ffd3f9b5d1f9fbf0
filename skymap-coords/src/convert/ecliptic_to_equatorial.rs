//! Ecliptic to equatorial conversion.

use crate::ecliptic::EclipticCoordinates;
use crate::equatorial::EquatorialCoordinates;
use chrono::{DateTime, TimeZone};
use skymap_core::angle::wrap_0_2pi;
use skymap_core::constants::ARCSEC_TO_RAD;
use skymap_core::polynomial::horner;
use skymap_core::Angle;
use skymap_time::Epoch;
use std::fmt;

/// Mean obliquity of the ecliptic in arcseconds, as a polynomial in Julian
/// centuries since J2000 (highest degree first). Meeus, Astronomical
/// Algorithms, eq. 22.2.
const MEAN_OBLIQUITY_ARCSEC: [f64; 4] = [0.00181, -0.0006, -46.815, 84381.45];

/// Rotates ecliptic coordinates into the equatorial frame.
///
/// The rotation angle is the mean obliquity of the ecliptic at the
/// observation instant, evaluated once at construction; `apply` is then a
/// fixed rotation. The same converter instance is valid for every
/// coordinate at that instant.
#[derive(Debug, Clone, Copy)]
pub struct EclipticToEquatorial {
    obliquity: Angle,
    sin_obliquity: f64,
    cos_obliquity: f64,
}

impl EclipticToEquatorial {
    /// Creates the conversion for the given observation instant.
    pub fn new<Tz: TimeZone>(when: &DateTime<Tz>) -> Self {
        let t = Epoch::J2000.julian_centuries_until(when);
        let obliquity = Angle::from_radians(horner(&MEAN_OBLIQUITY_ARCSEC, t) * ARCSEC_TO_RAD);
        let (sin_obliquity, cos_obliquity) = obliquity.sin_cos();

        Self {
            obliquity,
            sin_obliquity,
            cos_obliquity,
        }
    }

    /// The mean obliquity of the ecliptic at the construction instant.
    pub fn obliquity(&self) -> Angle {
        self.obliquity
    }

    /// Transforms one ecliptic position into the equatorial frame.
    ///
    /// Total: the output right ascension is normalized into `[0, 2pi)` and
    /// the declination is an arcsine, so both factory invariants hold by
    /// construction.
    pub fn apply(&self, ecl: &EclipticCoordinates) -> EquatorialCoordinates {
        let (sin_lon, cos_lon) = ecl.lon().sin_cos();
        let sin_lat = ecl.lat().sin();

        let ra = wrap_0_2pi(f64::atan2(
            sin_lon * self.cos_obliquity - ecl.lat().tan() * self.sin_obliquity,
            cos_lon,
        ));
        // Guard against |sin(dec)| creeping past 1 by rounding; asin would
        // return NaN.
        let sin_dec = sin_lat * self.cos_obliquity
            + ecl.lat().cos() * self.sin_obliquity * sin_lon;
        let dec = sin_dec.clamp(-1.0, 1.0).asin();

        EquatorialCoordinates::from_radians_unchecked(ra, dec)
    }
}

impl fmt::Display for EclipticToEquatorial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EclipticToEquatorial(\u{3b5}={:.6}\u{b0})",
            self.obliquity.degrees()
        )
    }
}
