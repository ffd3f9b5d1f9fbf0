//! Shared domain checks for the spherical coordinate factories.
//!
//! Every spherical pair in this crate is one wrapping coordinate on the
//! full turn `[0, 2pi)` and one polar coordinate on `[-pi/2, pi/2]`. The
//! checks are centralized here so the factories differ only in naming.

use crate::errors::{CoordError, CoordResult};
use skymap_core::{Angle, ClosedInterval, RightOpenInterval};

/// Requires `angle` to lie in `[0, 2pi)`.
pub(crate) fn check_full_turn(quantity: &str, angle: Angle) -> CoordResult<()> {
    if RightOpenInterval::FULL_TURN.contains(angle.radians()) {
        return Ok(());
    }
    Err(CoordError::invalid_coordinate(format!(
        "{} {:.6} rad outside [0, 2\u{3c0})",
        quantity,
        angle.radians()
    )))
}

/// Requires `angle` to lie in `[-pi/2, pi/2]`.
pub(crate) fn check_polar(quantity: &str, angle: Angle) -> CoordResult<()> {
    if ClosedInterval::POLAR.contains(angle.radians()) {
        return Ok(());
    }
    Err(CoordError::invalid_coordinate(format!(
        "{} {:.6}\u{b0} outside [-90\u{b0}, 90\u{b0}]",
        quantity,
        angle.degrees()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use skymap_core::constants::TAU;

    #[test]
    fn test_full_turn_bounds() {
        assert!(check_full_turn("ra", Angle::ZERO).is_ok());
        assert!(check_full_turn("ra", Angle::from_radians(TAU - 1e-12)).is_ok());
        assert!(check_full_turn("ra", Angle::from_radians(TAU)).is_err());
        assert!(check_full_turn("ra", Angle::from_radians(-1e-12)).is_err());
        assert!(check_full_turn("ra", Angle::from_radians(f64::NAN)).is_err());
    }

    #[test]
    fn test_polar_bounds() {
        assert!(check_polar("dec", Angle::HALF_PI).is_ok());
        assert!(check_polar("dec", -Angle::HALF_PI).is_ok());
        assert!(check_polar("dec", Angle::from_degrees(90.001)).is_err());
        assert!(check_polar("dec", Angle::from_radians(f64::NAN)).is_err());
    }
}
