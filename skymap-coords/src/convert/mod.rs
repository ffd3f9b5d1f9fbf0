//! Frame conversions, parameterized by observation context.
//!
//! Both conversions follow the same shape: the constructor fixes the
//! context (observation instant, and for the horizontal conversion the
//! observer's location), precomputes the trigonometric constants that
//! depend only on that context, and `apply` then transforms one coordinate
//! pair with no per-call setup. Build one converter per frame and run the
//! whole catalogue through it.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use skymap_coords::convert::EclipticToEquatorial;
//! use skymap_coords::EclipticCoordinates;
//!
//! let when = Utc.with_ymd_and_hms(2020, 2, 28, 0, 0, 0).unwrap();
//! let to_equatorial = EclipticToEquatorial::new(&when);
//!
//! let mars = EclipticCoordinates::from_degrees(45.0, 1.2)?;
//! let equatorial = to_equatorial.apply(&mars);
//! assert!(equatorial.dec().degrees() > 0.0);
//! # Ok::<(), skymap_coords::CoordError>(())
//! ```

mod ecliptic_to_equatorial;
mod equatorial_to_horizontal;

pub use ecliptic_to_equatorial::EclipticToEquatorial;
pub use equatorial_to_horizontal::EquatorialToHorizontal;
