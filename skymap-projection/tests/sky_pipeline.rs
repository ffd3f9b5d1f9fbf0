//! End-to-end pipeline test: catalogue positions through frame conversion
//! and projection, the way a rendering frame drives the engine.

use approx::assert_abs_diff_eq;
use chrono::{TimeZone, Utc};
use skymap_coords::{
    EclipticCoordinates, EclipticToEquatorial, EquatorialCoordinates, EquatorialToHorizontal,
    GeographicCoordinates,
};
use skymap_projection::StereographicProjection;

/// A fixed observation frame: EPFL campus, an autumn evening.
fn frame_context() -> (EquatorialToHorizontal, StereographicProjection) {
    let when = Utc.with_ymd_and_hms(2020, 2, 17, 20, 15, 0).unwrap();
    let observer = GeographicCoordinates::from_degrees(6.57, 46.52).unwrap();
    let to_horizontal = EquatorialToHorizontal::new(&when, &observer);

    let center = skymap_coords::HorizontalCoordinates::from_degrees(180.0, 45.0).unwrap();
    let projection = StereographicProjection::new(center);

    (to_horizontal, projection)
}

#[test]
fn catalogue_batch_projects_to_finite_plane_points() {
    let (to_horizontal, projection) = frame_context();

    // A handful of bright-star catalogue positions (ra, dec in degrees).
    let catalogue = [
        (101.2875, -16.7161), // Sirius
        (279.2347, 38.7837),  // Vega
        (213.9154, 19.1824),  // Arcturus
        (88.7929, 7.4071),    // Betelgeuse
        (37.9546, 89.2641),   // Polaris
    ];

    for (ra_deg, dec_deg) in catalogue {
        let equ = EquatorialCoordinates::from_degrees(ra_deg, dec_deg).unwrap();
        let hor = to_horizontal.apply(&equ);
        let xy = projection.apply(&hor);

        // Away from the projection antipode every image is finite.
        assert!(xy.x().is_finite() && xy.y().is_finite(), "{} projected to {}", equ, xy);

        // And the plane point maps back to the same direction on the sky.
        let back = projection.inverse_apply(&xy).unwrap();
        assert_abs_diff_eq!(hor.angular_distance_to(&back).degrees(), 0.0, epsilon = 1e-9);
    }
}

#[test]
fn ecliptic_source_joins_the_same_pipeline() {
    let (to_horizontal, projection) = frame_context();
    let when = Utc.with_ymd_and_hms(2020, 2, 17, 20, 15, 0).unwrap();
    let to_equatorial = EclipticToEquatorial::new(&when);

    // A solar-system object given in ecliptic coordinates.
    let ecl = EclipticCoordinates::from_degrees(320.5, 1.1).unwrap();
    let equ = to_equatorial.apply(&ecl);
    let hor = to_horizontal.apply(&equ);
    let xy = projection.apply(&hor);

    assert!(xy.x().is_finite() && xy.y().is_finite());
}

#[test]
fn converters_are_reusable_and_deterministic() {
    let (to_horizontal, projection) = frame_context();
    let equ = EquatorialCoordinates::from_degrees(213.9154, 19.1824).unwrap();

    let first = projection.apply(&to_horizontal.apply(&equ));
    let second = projection.apply(&to_horizontal.apply(&equ));
    assert_eq!(first.x(), second.x());
    assert_eq!(first.y(), second.y());
}

#[test]
fn polaris_stays_near_the_celestial_pole() {
    // Sanity anchor: from latitude 46.5 deg north, Polaris stands within
    // a degree of (az ~ 0, alt ~ latitude).
    let (to_horizontal, _) = frame_context();
    let polaris = EquatorialCoordinates::from_degrees(37.9546, 89.2641).unwrap();
    let hor = to_horizontal.apply(&polaris);

    assert!((hor.alt().degrees() - 46.52).abs() < 1.0);
    let az = hor.az().degrees();
    assert!(az < 2.0 || az > 358.0, "Polaris azimuth {}", az);
}
