//! Celestial coordinate value types and frame conversions.
//!
//! This crate is the middle of the skymap pipeline: catalogue positions
//! arrive as [`EquatorialCoordinates`], solar-system positions as
//! [`EclipticCoordinates`], and the [`convert`] module carries both into
//! the observer-relative [`HorizontalCoordinates`] that feed the
//! projection. [`CartesianCoordinates`] is the projection's plane output.
//!
//! # Pipeline
//!
//! ```text
//! catalogue (ra, dec) ──────────────────────┐
//!                                           ▼
//! ecliptic (λ, β) ──EclipticToEquatorial──▶ equatorial ──EquatorialToHorizontal──▶ horizontal ──▶ projection
//!                     (instant)                            (instant, location)
//! ```
//!
//! # Validation
//!
//! Every coordinate type is built through a validating factory returning
//! [`CoordResult`]; no instance ever exists with an out-of-domain
//! component. The conversions are total functions — their output domains
//! are guaranteed by the formulas, not by re-validation.

pub mod cartesian;
pub mod convert;
pub mod ecliptic;
pub mod equatorial;
pub mod errors;
pub mod horizontal;
mod validate;

pub use cartesian::CartesianCoordinates;
pub use convert::{EclipticToEquatorial, EquatorialToHorizontal};
pub use ecliptic::EclipticCoordinates;
pub use equatorial::EquatorialCoordinates;
pub use errors::{CoordError, CoordResult};
pub use horizontal::HorizontalCoordinates;

// The observer's position lives in skymap-core next to Angle; re-exported
// here so the coordinate vocabulary is importable from one place.
pub use skymap_core::GeographicCoordinates;
