//! Astronomical reference epochs.
//!
//! An epoch is a fixed instant used as the origin for time-since
//! calculations. The polynomial models in this workspace are expressed in
//! days or Julian centuries from one of two epochs:
//!
//! | Epoch | Reference instant |
//! |-------|-------------------|
//! | [`Epoch::J2000`] | 2000-01-01T12:00:00Z (noon) |
//! | [`Epoch::J2010`] | 2009-12-31T00:00:00Z (midnight) |
//!
//! A Julian century is exactly 36525 days.

use chrono::{DateTime, TimeZone};
use skymap_core::constants::{DAYS_PER_JULIAN_CENTURY, MILLIS_PER_DAY_F64};

/// Unix-millisecond timestamp of 2000-01-01T12:00:00Z.
const J2000_MILLIS: i64 = 946_728_000_000;

/// Unix-millisecond timestamp of 2009-12-31T00:00:00Z.
const J2010_MILLIS: i64 = 1_262_217_600_000;

/// A fixed astronomical reference instant.
///
/// Stateless: each variant carries nothing but its identity, and the
/// reference instant is a compile-time constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Epoch {
    /// Noon Terrestrial Time on 2000-01-01 (standard modern epoch).
    J2000,
    /// Midnight on 2009-12-31 (used by some almanac polynomial fits).
    J2010,
}

impl Epoch {
    /// The epoch's reference instant as a Unix-millisecond timestamp.
    pub const fn reference_timestamp_millis(self) -> i64 {
        match self {
            Epoch::J2000 => J2000_MILLIS,
            Epoch::J2010 => J2010_MILLIS,
        }
    }

    /// Fractional days from the epoch's reference instant to `when`.
    ///
    /// Negative for instants before the epoch. The input's time zone does
    /// not influence the result: the subtraction happens on UTC-anchored
    /// millisecond timestamps.
    pub fn days_until<Tz: TimeZone>(self, when: &DateTime<Tz>) -> f64 {
        let delta = when.timestamp_millis() - self.reference_timestamp_millis();
        delta as f64 / MILLIS_PER_DAY_F64
    }

    /// Fractional Julian centuries (36525 days) from the epoch to `when`.
    pub fn julian_centuries_until<Tz: TimeZone>(self, when: &DateTime<Tz>) -> f64 {
        self.days_until(when) / DAYS_PER_JULIAN_CENTURY
    }
}
