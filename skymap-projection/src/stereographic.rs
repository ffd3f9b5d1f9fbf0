//! The stereographic projection proper.
//!
//! Projection from the point antipodal to the chosen center onto the plane
//! tangent at the center. Points near the center project with little
//! distortion; the antipode itself has no image, and quantities that
//! involve it diverge.
//!
//! # Singularity policy
//!
//! The parallel circle passing through the center's antipode projects to a
//! straight line. Its "circle" image is reported through IEEE-754
//! semantics: the radius and the center ordinate are `+inf`, produced by
//! ordinary division by an exactly-zero denominator. Callers render such a
//! circle as a line; nothing here raises an error for it.

use skymap_core::angle::wrap_0_2pi;
use skymap_core::Angle;
use skymap_coords::{CartesianCoordinates, CoordResult, HorizontalCoordinates};
use std::fmt;

/// Maps horizontal coordinates to and from the plane around a fixed center.
///
/// Immutable once built: construction fixes the center and its sine and
/// cosine, and every method is a pure function of its arguments. One
/// instance per rendering configuration, shared freely across calls.
#[derive(Debug, Clone, Copy)]
pub struct StereographicProjection {
    center: HorizontalCoordinates,
    sin_center_alt: f64,
    cos_center_alt: f64,
}

impl StereographicProjection {
    /// Creates a projection centered on the given direction.
    pub fn new(center: HorizontalCoordinates) -> Self {
        let (sin_center_alt, cos_center_alt) = center.alt().sin_cos();
        Self {
            center,
            sin_center_alt,
            cos_center_alt,
        }
    }

    /// The fixed projection center.
    pub fn center(&self) -> HorizontalCoordinates {
        self.center
    }

    /// Projects a direction onto the plane.
    ///
    /// The center maps to the origin. Directions approaching the center's
    /// antipode map arbitrarily far out; the antipode itself produces
    /// infinite components (1/0 in the scale factor), never an error.
    pub fn apply(&self, h: &HorizontalCoordinates) -> CartesianCoordinates {
        let delta_az = (h.az() - self.center.az()).radians();
        let (sin_delta_az, cos_delta_az) = delta_az.sin_cos();
        let (sin_alt, cos_alt) = h.alt().sin_cos();

        let d = 1.0
            / (1.0
                + sin_alt * self.sin_center_alt
                + cos_alt * self.cos_center_alt * cos_delta_az);

        let x = d * cos_alt * sin_delta_az;
        let y = d * (sin_alt * self.cos_center_alt - cos_alt * self.sin_center_alt * cos_delta_az);

        CartesianCoordinates::new(x, y)
    }

    /// Recovers the direction whose projection is `xy`.
    ///
    /// Exact inverse of [`apply`](Self::apply) for every point of the
    /// plane; the origin maps back to the center.
    ///
    /// # Errors
    ///
    /// Fails only when the recovered components are not representable as
    /// horizontal coordinates (non-finite plane input).
    pub fn inverse_apply(&self, xy: &CartesianCoordinates) -> CoordResult<HorizontalCoordinates> {
        let (x, y) = (xy.x(), xy.y());
        if x == 0.0 && y == 0.0 {
            return Ok(self.center);
        }

        let rho_squared = xy.norm_squared();
        let rho = rho_squared.sqrt();
        // sine/cosine of the angular distance from the center
        let sin_c = 2.0 * rho / (rho_squared + 1.0);
        let cos_c = (1.0 - rho_squared) / (rho_squared + 1.0);

        let az = wrap_0_2pi(
            f64::atan2(
                x * sin_c,
                rho * self.cos_center_alt * cos_c - y * self.sin_center_alt * sin_c,
            ) + self.center.az().radians(),
        );
        let sin_alt = cos_c * self.sin_center_alt + y * sin_c * self.cos_center_alt / rho;
        let alt = sin_alt.clamp(-1.0, 1.0).asin();

        HorizontalCoordinates::new(Angle::from_radians(az), Angle::from_radians(alt))
    }

    /// Projected diameter of a small circle of angular radius `rho`
    /// centered on the projection center.
    pub fn apply_to_angle(&self, rho: Angle) -> f64 {
        2.0 * (rho.radians() / 4.0).tan()
    }

    /// Center of the projected image of the parallel (constant-altitude
    /// circle) through `h`.
    ///
    /// The image of a parallel is a circle centered on the vertical axis.
    /// For the parallel through the center's antipode the image degenerates
    /// to a horizontal line and the ordinate is `+inf`.
    pub fn circle_center_for_parallel(&self, h: &HorizontalCoordinates) -> CartesianCoordinates {
        CartesianCoordinates::new(
            0.0,
            self.cos_center_alt / (h.alt().sin() + self.sin_center_alt),
        )
    }

    /// Radius of the projected image of the parallel through `h`.
    ///
    /// `+inf` for the degenerate antipodal parallel.
    pub fn circle_radius_for_parallel(&self, h: &HorizontalCoordinates) -> f64 {
        h.alt().cos() / (h.alt().sin() + self.sin_center_alt)
    }
}

impl fmt::Display for StereographicProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StereographicProjection(center={})", self.center)
    }
}
