//! The [`Angle`] type.
//!
//! Angles are stored as radians in an `f64` and constructed from whatever
//! unit the source data uses: degrees for catalogue positions, hours for
//! right ascension, arcseconds for polynomial model coefficients, and
//! degrees-minutes-seconds for sexagesimal reference values.
//!
//! # Quick Start
//!
//! ```
//! use skymap_core::Angle;
//!
//! let from_deg = Angle::from_degrees(45.0);
//! let from_hours = Angle::from_hours(3.0); // 3h = 45 deg
//! assert!((from_deg.radians() - from_hours.radians()).abs() < 1e-15);
//!
//! let (sin, cos) = from_deg.sin_cos();
//! assert!((sin - cos).abs() < 1e-15);
//! ```
//!
//! # Sexagesimal construction
//!
//! [`Angle::from_dms`] validates its components: minutes and seconds must
//! lie in `[0, 60)`. Degrees are non-negative by type.
//!
//! ```
//! use skymap_core::Angle;
//!
//! let a = Angle::from_dms(23, 26, 21.45)?;
//! assert!((a.degrees() - 23.439291666666667).abs() < 1e-12);
//!
//! assert!(Angle::from_dms(10, 60, 0.0).is_err());
//! assert!(Angle::from_dms(10, 0, 60.0).is_err());
//! # Ok::<(), skymap_core::CoreError>(())
//! ```

use crate::constants::{
    ARCSEC_PER_DEG, ARCSEC_TO_RAD, DEG_TO_RAD, HALF_PI, MINUTES_PER_UNIT, PI, RAD_PER_HOUR,
    RAD_TO_DEG, TAU,
};
use crate::errors::{CoreError, CoreResult};

/// An angular measurement stored as radians.
///
/// `Copy` and 8 bytes wide; compare with `PartialEq`/`PartialOrd` (no `Eq`
/// or `Ord` because `f64` can be NaN).
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    /// Zero angle.
    pub const ZERO: Self = Self { rad: 0.0 };

    /// Pi/2 radians (90 degrees).
    pub const HALF_PI: Self = Self { rad: HALF_PI };

    /// Pi radians (180 degrees).
    pub const PI: Self = Self { rad: PI };

    /// A full turn (360 degrees).
    pub const TAU: Self = Self { rad: TAU };

    /// Creates an angle from radians.
    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    /// Creates an angle from decimal degrees.
    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg * DEG_TO_RAD,
        }
    }

    /// Creates an angle from decimal hours (1 hour = 15 degrees).
    #[inline]
    pub fn from_hours(hours: f64) -> Self {
        Self {
            rad: hours * RAD_PER_HOUR,
        }
    }

    /// Creates an angle from arcseconds (3600 arcseconds = 1 degree).
    #[inline]
    pub fn from_arcseconds(arcsec: f64) -> Self {
        Self {
            rad: arcsec * ARCSEC_TO_RAD,
        }
    }

    /// Creates an angle from degrees, minutes and seconds of arc.
    ///
    /// # Errors
    ///
    /// Fails when `minutes >= 60`, or when `seconds` is not in `[0, 60)`.
    pub fn from_dms(degrees: u32, minutes: u32, seconds: f64) -> CoreResult<Self> {
        if minutes >= 60 {
            return Err(CoreError::invalid_sexagesimal(format!(
                "minutes {} outside [0, 60)",
                minutes
            )));
        }
        if !(0.0..60.0).contains(&seconds) {
            return Err(CoreError::invalid_sexagesimal(format!(
                "seconds {} outside [0, 60)",
                seconds
            )));
        }

        let deg = degrees as f64
            + minutes as f64 / MINUTES_PER_UNIT
            + seconds / ARCSEC_PER_DEG;
        Ok(Self::from_degrees(deg))
    }

    /// The angle in radians.
    #[inline]
    pub fn radians(&self) -> f64 {
        self.rad
    }

    /// The angle in decimal degrees.
    #[inline]
    pub fn degrees(&self) -> f64 {
        self.rad * RAD_TO_DEG
    }

    /// The angle in decimal hours.
    #[inline]
    pub fn hours(&self) -> f64 {
        self.rad / RAD_PER_HOUR
    }

    /// The angle in arcseconds.
    #[inline]
    pub fn arcseconds(&self) -> f64 {
        self.rad / ARCSEC_TO_RAD
    }

    /// The equivalent angle wrapped into `[0, 2pi)`.
    #[inline]
    pub fn normalized_positive(self) -> Self {
        Self {
            rad: super::normalize::wrap_0_2pi(self.rad),
        }
    }

    #[inline]
    pub fn sin(&self) -> f64 {
        self.rad.sin()
    }

    #[inline]
    pub fn cos(&self) -> f64 {
        self.rad.cos()
    }

    #[inline]
    pub fn tan(&self) -> f64 {
        self.rad.tan()
    }

    #[inline]
    pub fn sin_cos(&self) -> (f64, f64) {
        self.rad.sin_cos()
    }
}

impl std::fmt::Display for Angle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}\u{b0}", self.degrees())
    }
}
