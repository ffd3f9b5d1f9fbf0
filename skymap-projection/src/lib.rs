//! Stereographic sky-to-plane projection.
//!
//! The last stage of the skymap pipeline: horizontal coordinates from
//! `skymap-coords` become plane points the renderer can draw. The
//! stereographic projection is conformal — it preserves angles and maps
//! every circle on the sphere to a circle (or, in the degenerate antipodal
//! case, a line) on the plane, which is what makes it the classic choice
//! for planispheres and star charts.

mod stereographic;

pub use stereographic::StereographicProjection;
