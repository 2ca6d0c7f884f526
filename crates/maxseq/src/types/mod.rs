use geo_types::{Coord, LineString, Point};
use serde::{Deserialize, Serialize};

/// A tagged, located feature that is rendered as a map marker.
///
/// `location` follows the GeoJSON axis order: `x` is the longitude, `y` the latitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    name: String,
    id: i64,
    location: Point,
}

impl PointOfInterest {
    pub fn new(name: String, id: i64, location: Point) -> Self {
        Self { name, id, location }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn location(&self) -> Point {
        self.location
    }

    pub fn lat(&self) -> f64 {
        self.location.y()
    }

    pub fn lon(&self) -> f64 {
        self.location.x()
    }
}

/// A path computed by the solver, together with its scores.
///
/// Coordinates are stored as (lon, lat). `shortest_path_distance <= length` is
/// assumed and not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    coordinates: LineString,
    score: f64,
    upper_bound: f64,
    length: f64,
    shortest_path_distance: f64,
}

impl PathResult {
    pub fn new(
        coordinates: LineString,
        score: f64,
        upper_bound: f64,
        length: f64,
        shortest_path_distance: f64,
    ) -> Self {
        Self {
            coordinates,
            score,
            upper_bound,
            length,
            shortest_path_distance,
        }
    }

    pub fn coordinates(&self) -> &[Coord] {
        &self.coordinates.0
    }

    pub fn line_string(&self) -> &LineString {
        &self.coordinates
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn shortest_path_distance(&self) -> f64 {
        self.shortest_path_distance
    }

    /// First and last coordinate, `None` for paths with fewer than two points.
    pub fn endpoints(&self) -> Option<(Coord, Coord)> {
        match self.coordinates.0.as_slice() {
            [first, .., last] => Some((*first, *last)),
            _ => None,
        }
    }
}
