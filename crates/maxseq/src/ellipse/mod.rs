//! Uncertainty ellipses around solver paths.
//!
//! The ellipse has the path endpoints as foci. Any detour whose length is at
//! most `shortest_path_distance * max_dist_factor` stays inside it.

use std::f64::consts::TAU;

use geo::HaversineDestination;
use geo_types::{Coord, LineString, Point, Polygon};
use log::debug;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::OverlayError, types::PathResult};

pub mod params;

pub use params::{Bearing, DEFAULT_MAX_DIST_FACTOR, EllipseParams};

/// Fill opacity of drawn ellipses.
pub const ELLIPSE_FILL_OPACITY: f64 = 0.0625;

/// Geometry of an uncertainty ellipse. Axis lengths are in the unit of the
/// shortest-path distance (meters).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipseSpec {
    /// (lon, lat)
    pub center: Point,
    /// Bearing of the major axis, clockwise from north.
    pub rotation_degrees: f64,
    pub semi_minor_axis: f64,
    pub semi_major_axis: f64,
}

impl EllipseSpec {
    /// Approximates the ellipse boundary by `segments` vertices placed with
    /// haversine destinations from the center.
    pub fn outline(&self, segments: usize) -> Polygon {
        let segments = segments.max(4);

        let ring: Vec<Coord> = (0..segments)
            .map(|i| {
                let t = TAU * i as f64 / segments as f64;
                let along = self.semi_major_axis * t.cos();
                let across = self.semi_minor_axis * t.sin();

                let bearing = self.rotation_degrees + across.atan2(along).to_degrees();
                self.center
                    .haversine_destination(bearing, along.hypot(across))
                    .into()
            })
            .collect();

        Polygon::new(LineString::new(ring), vec![])
    }
}

/// Computes the ellipse for a path given as (lon, lat) coordinates.
///
/// Only the first and last coordinate are used. The center is the planar
/// midpoint of the endpoints, which is only accurate for short spans.
pub fn compute_ellipse(
    path_coordinates: &[Coord],
    shortest_path_distance: f64,
    slack_factor: f64,
) -> Result<EllipseSpec, OverlayError> {
    compute_ellipse_with(
        path_coordinates,
        shortest_path_distance,
        &EllipseParams::new(slack_factor),
    )
}

#[instrument(level = "debug", skip(path_coordinates), fields(points = path_coordinates.len()))]
pub fn compute_ellipse_with(
    path_coordinates: &[Coord],
    shortest_path_distance: f64,
    params: &EllipseParams,
) -> Result<EllipseSpec, OverlayError> {
    params.validate()?;

    let (p_1, p_2) = match path_coordinates {
        [first, .., last] => (*first, *last),
        _ => {
            return Err(OverlayError::MalformedPath {
                points: path_coordinates.len(),
            });
        }
    };

    // TODO: replace with the geodesic midpoint once spans get long enough to matter.
    let center = Point::new((p_1.x + p_2.x) / 2., (p_1.y + p_2.y) / 2.);
    let rotation_degrees = params.bearing.between(p_1, p_2);

    let max_length = shortest_path_distance * params.max_dist_factor;
    let semi_major_axis = max_length / 2.;
    let semi_minor_axis = (max_length.powi(2) - shortest_path_distance.powi(2)).sqrt() / 2.;

    debug!(
        "Ellipse around {:?}: rotation {:.2}, axes {:.2} / {:.2}",
        center, rotation_degrees, semi_major_axis, semi_minor_axis
    );

    Ok(EllipseSpec {
        center,
        rotation_degrees,
        semi_minor_axis,
        semi_major_axis,
    })
}

/// Ellipse for a solver path, using its recorded shortest-path distance.
pub fn compute_ellipse_for(
    path: &PathResult,
    params: &EllipseParams,
) -> Result<EllipseSpec, OverlayError> {
    compute_ellipse_with(path.coordinates(), path.shortest_path_distance(), params)
}

/// Drawing options of an ellipse, derived from the color of its path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EllipseStyle {
    pub color: String,
    pub fill_color: String,
    pub fill_opacity: f64,
    pub interactive: bool,
}

impl EllipseStyle {
    pub fn for_path_color(color: &str) -> Self {
        Self {
            color: color.to_string(),
            fill_color: color.to_string(),
            fill_opacity: ELLIPSE_FILL_OPACITY,
            interactive: false,
        }
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use geo::HaversineDistance;
    use geo_types::coord;

    use crate::error::ConfigurationError;

    use super::*;

    fn east() -> Vec<Coord> {
        vec![coord! {x: 0., y: 0.}, coord! {x: 1., y: 0.}]
    }

    #[test]
    fn ellipse_along_equator() {
        let ellipse = compute_ellipse(&east(), 100., 1.5).unwrap();

        assert_relative_eq!(ellipse.center.x(), 0.5);
        assert_relative_eq!(ellipse.center.y(), 0.);
        assert_relative_eq!(ellipse.semi_major_axis, 75.);
        assert_relative_eq!(ellipse.semi_minor_axis, 12500f64.sqrt() / 2.);
        assert_relative_eq!(ellipse.semi_minor_axis, 55.9017, epsilon = 1e-4);
        assert_relative_eq!(ellipse.rotation_degrees, 90., epsilon = 1e-9);
    }

    #[test]
    fn due_west_is_negative() {
        let west = vec![coord! {x: 0., y: 0.}, coord! {x: -1., y: 0.}];
        let ellipse = compute_ellipse(&west, 100., 1.5).unwrap();

        assert_relative_eq!(ellipse.rotation_degrees, -90., epsilon = 1e-9);
    }

    #[test]
    fn due_south_is_minus_180() {
        let south = vec![coord! {x: 0., y: 0.}, coord! {x: 0., y: -1.}];
        let ellipse = compute_ellipse(&south, 100., 1.5).unwrap();

        assert_relative_eq!(ellipse.rotation_degrees, -180., epsilon = 1e-9);
    }

    #[test]
    fn only_endpoints_matter() {
        let detour = vec![
            coord! {x: 0., y: 0.},
            coord! {x: 0.3, y: 0.4},
            coord! {x: 0.8, y: -0.2},
            coord! {x: 1., y: 0.},
        ];

        assert_eq!(
            compute_ellipse(&detour, 100., 1.5).unwrap(),
            compute_ellipse(&east(), 100., 1.5).unwrap()
        );
    }

    #[test]
    fn degenerate_ellipse() {
        for distance in [0., 1., 100., 12345.678] {
            let ellipse = compute_ellipse(&east(), distance, 1.).unwrap();
            assert_eq!(ellipse.semi_minor_axis, 0.);
            assert_relative_eq!(ellipse.semi_major_axis, distance / 2.);
        }
    }

    #[test]
    fn nan_distance_on_both_axes() {
        let ellipse = compute_ellipse(&east(), f64::NAN, 1.5).unwrap();

        assert!(ellipse.semi_major_axis.is_nan());
        assert!(ellipse.semi_minor_axis.is_nan());
    }

    #[test]
    fn invalid_slack_factor() {
        let err = compute_ellipse(&east(), 100., 0.5).unwrap_err();
        assert!(matches!(
            err,
            OverlayError::Configuration(ConfigurationError::InvalidSlackFactor(f)) if f == 0.5
        ));

        // the factor is checked before the path
        let err = compute_ellipse(&[coord! {x: 0., y: 0.}], 100., 0.5).unwrap_err();
        assert!(matches!(err, OverlayError::Configuration(_)));
    }

    #[test]
    fn malformed_path() {
        let err = compute_ellipse(&[coord! {x: 0., y: 0.}], 100., 1.5).unwrap_err();
        assert!(matches!(err, OverlayError::MalformedPath { points: 1 }));

        let err = compute_ellipse(&[], 100., 1.5).unwrap_err();
        assert!(matches!(err, OverlayError::MalformedPath { points: 0 }));
    }

    #[test]
    fn planar_bearing_param() {
        let params = EllipseParams::new(1.5).with_bearing(Bearing::Planar);
        let ellipse = compute_ellipse_with(&east(), 100., &params).unwrap();

        assert_relative_eq!(ellipse.rotation_degrees, 90., epsilon = 1e-9);
    }

    #[test]
    fn path_result_ellipse() {
        let path = PathResult::new(LineString::new(east()), 3., 5., 120., 100.);
        let ellipse = compute_ellipse_for(&path, &EllipseParams::new(1.5)).unwrap();

        assert_eq!(ellipse, compute_ellipse(&east(), 100., 1.5).unwrap());
    }

    #[test]
    fn outline_within_major_axis() {
        let ellipse = compute_ellipse(
            &[coord! {x: 9.17, y: 47.66}, coord! {x: 9.18, y: 47.67}],
            1500.,
            1.25,
        )
        .unwrap();

        let outline = ellipse.outline(64);
        let ring = outline.exterior();

        assert!(ring.is_closed());
        assert_eq!(ring.0.len(), 65);

        for coord in ring.coords() {
            let distance = ellipse.center.haversine_distance(&Point::from(*coord));
            assert!(distance <= ellipse.semi_major_axis + 1e-3);
            assert!(distance >= ellipse.semi_minor_axis - 1e-3);
        }

        let tip = Point::from(ring.0[0]);
        assert_relative_eq!(
            ellipse.center.haversine_distance(&tip),
            ellipse.semi_major_axis,
            epsilon = 1e-3
        );
    }

    #[test]
    fn style_from_path_color() {
        let style = EllipseStyle::for_path_color("#3388ff");

        assert_eq!(style.color, "#3388ff");
        assert_eq!(style.fill_color, "#3388ff");
        assert_eq!(style.fill_opacity, 0.0625);
        assert!(!style.interactive);
    }
}
