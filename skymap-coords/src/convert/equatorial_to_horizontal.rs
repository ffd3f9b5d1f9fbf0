//! Equatorial to horizontal conversion.

use crate::equatorial::EquatorialCoordinates;
use crate::horizontal::HorizontalCoordinates;
use chrono::{DateTime, TimeZone};
use skymap_core::angle::wrap_0_2pi;
use skymap_core::{Angle, GeographicCoordinates};
use skymap_time::sidereal;
use std::fmt;

/// Tilts equatorial coordinates into an observer's horizontal frame.
///
/// The context is the observation instant plus the observer's geographic
/// position. Construction computes the local sidereal angle and the
/// latitude trigonometry once; `apply` only evaluates the per-star terms.
#[derive(Debug, Clone, Copy)]
pub struct EquatorialToHorizontal {
    local_sidereal: Angle,
    sin_lat: f64,
    cos_lat: f64,
}

impl EquatorialToHorizontal {
    /// Creates the conversion for an observer at `observer` looking up at
    /// the instant `when`.
    pub fn new<Tz: TimeZone>(when: &DateTime<Tz>, observer: &GeographicCoordinates) -> Self {
        let local_sidereal = sidereal::local(when, observer);
        let (sin_lat, cos_lat) = observer.lat().sin_cos();

        Self {
            local_sidereal,
            sin_lat,
            cos_lat,
        }
    }

    /// The local sidereal angle at the construction context, in `[0, 2pi)`.
    pub fn local_sidereal(&self) -> Angle {
        self.local_sidereal
    }

    /// Transforms one equatorial position into the horizontal frame.
    ///
    /// Azimuth is measured from north, increasing toward east. Total: the
    /// azimuth is normalized into `[0, 2pi)` and the altitude is an
    /// arcsine, so both factory invariants hold by construction.
    pub fn apply(&self, equ: &EquatorialCoordinates) -> HorizontalCoordinates {
        let hour_angle = self.local_sidereal - equ.ra();
        let (sin_ha, cos_ha) = hour_angle.sin_cos();
        let (sin_dec, cos_dec) = equ.dec().sin_cos();

        let sin_alt = self.sin_lat * sin_dec + self.cos_lat * cos_dec * cos_ha;
        let alt = sin_alt.clamp(-1.0, 1.0).asin();

        let az = wrap_0_2pi(f64::atan2(
            -cos_dec * sin_ha,
            sin_dec * self.cos_lat - cos_dec * self.sin_lat * cos_ha,
        ));

        HorizontalCoordinates::from_radians_unchecked(az, alt)
    }
}

impl fmt::Display for EquatorialToHorizontal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EquatorialToHorizontal(\u{3b8}={:.6}h)",
            self.local_sidereal.hours()
        )
    }
}
