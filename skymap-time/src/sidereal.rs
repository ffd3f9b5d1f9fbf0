//! Greenwich and local sidereal angle.
//!
//! Sidereal time measures Earth's rotation against the stars rather than
//! the Sun: one sidereal day is about 23h56m of solar time. It is the
//! quantity that relates a star's right ascension to its local hour angle,
//! which makes it the hinge of the equatorial-to-horizontal conversion.
//!
//! The model here is the classical mean-sidereal fit: a quadratic in
//! Julian centuries for the value at 0h UT, plus a linear stretch of the
//! hours elapsed since 0h by the solar-to-sidereal rate.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use skymap_time::sidereal;
//!
//! let when = Utc.with_ymd_and_hms(2004, 9, 23, 11, 0, 0).unwrap();
//! let theta = sidereal::greenwich(&when);
//! assert!(theta.radians() >= 0.0 && theta.radians() < skymap_core::constants::TAU);
//! ```

use chrono::{DateTime, TimeZone};
use skymap_core::constants::{
    DAYS_PER_JULIAN_CENTURY, MILLIS_PER_DAY, MILLIS_PER_DAY_F64, MILLIS_PER_HOUR_F64,
};
use skymap_core::polynomial::horner;
use skymap_core::{Angle, GeographicCoordinates};

use crate::Epoch;

/// Mean sidereal time at 0h UT, in hours, as a polynomial in Julian
/// centuries since J2000 (highest degree first).
const MEAN_SIDEREAL_HOURS: [f64; 3] = [0.000025862, 2400.051336, 6.697374558];

/// Sidereal hours elapsed per solar hour.
const SOLAR_TO_SIDEREAL_RATE: f64 = 1.002737909;

/// Greenwich sidereal angle for the given instant, in `[0, 2pi)`.
///
/// The instant is split at the preceding UTC midnight: the polynomial term
/// is evaluated at the day start, and the hours since midnight are scaled
/// by the solar-to-sidereal rate. Works for instants before 1970 as well —
/// the day split uses euclidean division, which rounds toward negative
/// infinity.
pub fn greenwich<Tz: TimeZone>(when: &DateTime<Tz>) -> Angle {
    let millis = when.timestamp_millis();
    let day_start = millis.div_euclid(MILLIS_PER_DAY) * MILLIS_PER_DAY;

    let days_since_j2000 =
        (day_start - Epoch::J2000.reference_timestamp_millis()) as f64 / MILLIS_PER_DAY_F64;
    let t = days_since_j2000 / DAYS_PER_JULIAN_CENTURY;
    let hours_of_day = (millis - day_start) as f64 / MILLIS_PER_HOUR_F64;

    let s0 = horner(&MEAN_SIDEREAL_HOURS, t);
    let s1 = SOLAR_TO_SIDEREAL_RATE * hours_of_day;

    Angle::from_hours(s0 + s1).normalized_positive()
}

/// Local sidereal angle: Greenwich sidereal angle plus the observer's
/// east-positive longitude, in `[0, 2pi)`.
pub fn local<Tz: TimeZone>(when: &DateTime<Tz>, observer: &GeographicCoordinates) -> Angle {
    (greenwich(when) + observer.lon()).normalized_positive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use skymap_core::constants::TAU;

    #[test]
    fn test_greenwich_duffett_smith_reference() {
        // Practical Astronomy with your Calculator: 1980-04-22T14:36:51.67Z
        // has GST 4h 40m 5.23s.
        let when = Utc
            .with_ymd_and_hms(1980, 4, 22, 14, 36, 51)
            .unwrap()
            .checked_add_signed(chrono::Duration::milliseconds(670))
            .unwrap();
        let theta = greenwich(&when);
        assert!((theta.hours() - 4.668119327).abs() < 1e-8);
        assert!((theta.radians() - 1.2221107819499295).abs() < 1e-12);
    }

    #[test]
    fn test_greenwich_always_normalized() {
        for (y, m, d, h) in [(1899, 12, 31, 0), (1980, 4, 22, 14), (2020, 2, 28, 0), (2088, 6, 1, 23)] {
            let when = Utc.with_ymd_and_hms(y, m, d, h, 17, 3).unwrap();
            let theta = greenwich(&when);
            assert!(
                (0.0..TAU).contains(&theta.radians()),
                "greenwich({}) = {} not normalized",
                when,
                theta
            );
        }
    }

    #[test]
    fn test_greenwich_is_offset_invariant() {
        let utc = Utc.with_ymd_and_hms(1980, 4, 22, 14, 36, 51).unwrap();
        let shifted = utc.with_timezone(&FixedOffset::east_opt(5 * 3600 + 1800).unwrap());
        assert_eq!(greenwich(&utc).radians(), greenwich(&shifted).radians());
    }

    #[test]
    fn test_local_adds_longitude() {
        let when = Utc.with_ymd_and_hms(2004, 9, 23, 11, 0, 0).unwrap();
        let east = GeographicCoordinates::from_degrees(30.0, 45.0).unwrap();
        let west = GeographicCoordinates::from_degrees(-30.0, 45.0).unwrap();

        let g = greenwich(&when);
        let expected_east = (g + Angle::from_degrees(30.0)).normalized_positive();
        let expected_west = (g + Angle::from_degrees(-30.0)).normalized_positive();

        assert_eq!(local(&when, &east).radians(), expected_east.radians());
        assert_eq!(local(&when, &west).radians(), expected_west.radians());
    }

    #[test]
    fn test_local_at_greenwich_matches_greenwich() {
        let when = Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap();
        let greenwich_observatory = GeographicCoordinates::from_degrees(0.0, 51.48).unwrap();
        assert_eq!(
            local(&when, &greenwich_observatory).radians(),
            greenwich(&when).radians()
        );
    }
}
