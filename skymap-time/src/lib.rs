//! Time primitives for the skymap coordinate engine.
//!
//! Two small pieces: [`Epoch`], the fixed reference instants astronomical
//! polynomial models count from, and [`sidereal`], the Earth-rotation-angle
//! functions relating right ascension to local hour angle.
//!
//! # Time scale
//!
//! Observation instants arrive as chrono `DateTime` values in any time
//! zone. All arithmetic goes through `timestamp_millis()`, which is
//! UTC-anchored, so two representations of the same instant always produce
//! the same day count — regardless of the offset they were expressed in.
//!
//! ```
//! use chrono::{FixedOffset, TimeZone, Utc};
//! use skymap_time::Epoch;
//!
//! let utc = Utc.with_ymd_and_hms(2000, 1, 3, 12, 0, 0).unwrap();
//! let offset = utc.with_timezone(&FixedOffset::east_opt(3600).unwrap());
//! assert_eq!(Epoch::J2000.days_until(&utc), 2.0);
//! assert_eq!(Epoch::J2000.days_until(&offset), 2.0);
//! ```

pub mod epoch;
pub mod sidereal;

pub use epoch::Epoch;
