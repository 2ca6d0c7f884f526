use std::{collections::HashMap, io::Read, mem};

use geo_types::{Coord, Geometry, LineString, Point, coord};
use geozero::{
    ColumnValue, FeatureProcessor, GeomProcessor, PropertyProcessor, error::GeozeroError,
};
use log::{debug, info, warn};

use crate::{
    error::OverlayError,
    types::{PathResult, PointOfInterest},
};

use super::PropertyValue;

/// Turns the geometry and properties of one feature into a value.
///
/// Returning `Ok(None)` skips the feature.
pub trait FeatureBuilder {
    type Output;

    fn build(
        &self,
        idx: u64,
        geometry: Option<Geometry>,
        properties: &HashMap<String, PropertyValue>,
    ) -> geozero::error::Result<Option<Self::Output>>;
}

/// Collects features of a GeoJSON stream.
///
/// Only points and top level line strings are kept, coordinates of every other
/// geometry type are ignored.
pub struct FeatureReader<B: FeatureBuilder> {
    builder: B,
    coords: Option<Vec<Coord>>,
    geometry: Option<Geometry>,
    properties: HashMap<String, PropertyValue>,
    features: Vec<B::Output>,
}

pub type PoiReader = FeatureReader<PoiBuilder>;
pub type PathReader = FeatureReader<PathBuilder>;

impl<B: FeatureBuilder> FeatureReader<B> {
    pub fn new(builder: B) -> Self {
        Self {
            builder,
            coords: None,
            geometry: None,
            properties: HashMap::default(),
            features: Vec::default(),
        }
    }

    pub fn features(&self) -> &[B::Output] {
        &self.features
    }

    pub fn into_features(self) -> Vec<B::Output> {
        self.features
    }
}

impl<B: FeatureBuilder + Default> Default for FeatureReader<B> {
    fn default() -> Self {
        Self::new(B::default())
    }
}

impl<B: FeatureBuilder> FeatureProcessor for FeatureReader<B> {
    fn feature_begin(&mut self, _idx: u64) -> geozero::error::Result<()> {
        self.coords = None;
        self.geometry = None;
        self.properties.clear();
        Ok(())
    }

    fn feature_end(&mut self, idx: u64) -> geozero::error::Result<()> {
        let geometry = self.geometry.take();
        let properties = mem::take(&mut self.properties);

        if let Some(feature) = self.builder.build(idx, geometry, &properties)? {
            self.features.push(feature);
        }
        Ok(())
    }
}

impl<B: FeatureBuilder> PropertyProcessor for FeatureReader<B> {
    fn property(
        &mut self,
        _idx: usize,
        name: &str,
        value: &ColumnValue,
    ) -> geozero::error::Result<bool> {
        self.properties
            .insert(name.to_string(), PropertyValue::from(value));

        Ok(false) // don't abort
    }
}

impl<B: FeatureBuilder> GeomProcessor for FeatureReader<B> {
    fn xy(&mut self, x: f64, y: f64, _idx: usize) -> geozero::error::Result<()> {
        if let Some(coords) = self.coords.as_mut() {
            coords.push(coord! {x: x, y: y});
        }
        Ok(())
    }

    fn point_begin(&mut self, _idx: usize) -> geozero::error::Result<()> {
        self.coords = Some(Vec::with_capacity(1));
        Ok(())
    }

    fn point_end(&mut self, _idx: usize) -> geozero::error::Result<()> {
        let coords = self
            .coords
            .take()
            .ok_or(GeozeroError::Geometry("No coords for Point".to_string()))?;

        let coord = coords
            .first()
            .ok_or(GeozeroError::Geometry("Empty Point".to_string()))?;
        self.geometry = Some(Point(*coord).into());
        Ok(())
    }

    fn linestring_begin(
        &mut self,
        tagged: bool,
        size: usize,
        _idx: usize,
    ) -> geozero::error::Result<()> {
        if tagged {
            self.coords = Some(Vec::with_capacity(size));
        }
        Ok(())
    }

    fn linestring_end(&mut self, tagged: bool, _idx: usize) -> geozero::error::Result<()> {
        if !tagged {
            return Ok(());
        }
        let coords = self.coords.take().ok_or(GeozeroError::Geometry(
            "No coords for LineString".to_string(),
        ))?;
        self.geometry = Some(LineString::new(coords).into());
        Ok(())
    }
}

/// Reads `Point` features with a `name` and an optional `id` property.
///
/// Features without a name are skipped, a missing id is replaced by the
/// feature index.
#[derive(Debug, Clone, Copy, Default)]
pub struct PoiBuilder;

impl FeatureBuilder for PoiBuilder {
    type Output = PointOfInterest;

    fn build(
        &self,
        idx: u64,
        geometry: Option<Geometry>,
        properties: &HashMap<String, PropertyValue>,
    ) -> geozero::error::Result<Option<Self::Output>> {
        let Some(Geometry::Point(location)) = geometry else {
            debug!("Skipping feature {}: not a point", idx);
            return Ok(None);
        };

        let name = match properties.get("name").and_then(PropertyValue::as_str) {
            Some(name) if !name.is_empty() => name,
            _ => {
                debug!("Skipping feature {}: no name", idx);
                return Ok(None);
            }
        };

        let id = properties
            .get("id")
            .and_then(PropertyValue::as_i64)
            .unwrap_or(idx as i64);

        Ok(Some(PointOfInterest::new(name.to_string(), id, location)))
    }
}

/// Reads `LineString` features of computed paths.
///
/// Features without a shortest-path distance are skipped, score, upper bound
/// and length default to 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathBuilder;

impl PathBuilder {
    const SHORTEST_PATH_DISTANCE: [&str; 2] = ["shortestpathdist", "shortestPathDistance"];
    const UPPER_BOUND: [&str; 2] = ["uBound", "upperBound"];

    fn number(properties: &HashMap<String, PropertyValue>, keys: &[&str]) -> Option<f64> {
        keys.iter()
            .find_map(|key| properties.get(*key))
            .and_then(PropertyValue::as_f64)
    }
}

impl FeatureBuilder for PathBuilder {
    type Output = PathResult;

    fn build(
        &self,
        idx: u64,
        geometry: Option<Geometry>,
        properties: &HashMap<String, PropertyValue>,
    ) -> geozero::error::Result<Option<Self::Output>> {
        let Some(Geometry::LineString(line)) = geometry else {
            debug!("Skipping feature {}: not a line string", idx);
            return Ok(None);
        };

        let Some(shortest_path_distance) = Self::number(properties, &Self::SHORTEST_PATH_DISTANCE)
        else {
            warn!("Skipping path feature {}: no shortest path distance", idx);
            return Ok(None);
        };

        let score = Self::number(properties, &["score"]).unwrap_or_default();
        let upper_bound = Self::number(properties, &Self::UPPER_BOUND).unwrap_or_default();
        let length = Self::number(properties, &["length"]).unwrap_or_default();

        Ok(Some(PathResult::new(
            line,
            score,
            upper_bound,
            length,
            shortest_path_distance,
        )))
    }
}

pub fn read_pois<R: Read>(reader: R) -> Result<Vec<PointOfInterest>, OverlayError> {
    let mut poi_reader = PoiReader::default();
    geozero::geojson::read_geojson(reader, &mut poi_reader)?;

    info!("Read {} points of interest", poi_reader.features().len());
    Ok(poi_reader.into_features())
}

pub fn read_paths<R: Read>(reader: R) -> Result<Vec<PathResult>, OverlayError> {
    let mut path_reader = PathReader::default();
    geozero::geojson::read_geojson(reader, &mut path_reader)?;

    info!("Read {} paths", path_reader.features().len());
    Ok(path_reader.into_features())
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn read_poi_features() {
        let geojson = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [9.1732, 47.6779]},
            "properties": {"name": "DE:205", "id": 4711}
        }, {
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [9.18, 47.66]},
            "properties": {"name": "bakery"}
        }, {
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [9.19, 47.65]},
            "properties": {"name": ""}
        }, {
            "type": "Feature",
            "geometry": {"type": "LineString", "coordinates": [[9.1, 47.6], [9.2, 47.7]]},
            "properties": {"name": "road"}
        }]
        }"#;

        let pois = read_pois(geojson.as_bytes()).unwrap();

        assert_eq!(pois.len(), 2);
        assert_eq!(pois[0].name(), "DE:205");
        assert_eq!(pois[0].id(), 4711);
        assert_relative_eq!(pois[0].lon(), 9.1732);
        assert_relative_eq!(pois[0].lat(), 47.6779);

        assert_eq!(pois[1].name(), "bakery");
        assert_eq!(pois[1].id(), 1);
    }

    #[test]
    fn read_path_features() {
        let geojson = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": {
                "type": "LineString",
                "coordinates": [[9.17, 47.66], [9.175, 47.668], [9.18, 47.67]]
            },
            "properties": {"score": 4, "uBound": 6, "length": 1710.5, "shortestpathdist": 1500}
        }, {
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [9.18, 47.66]},
            "properties": {"name": "A"}
        }]
        }"#;

        let paths = read_paths(geojson.as_bytes()).unwrap();

        assert_eq!(paths.len(), 1);
        let path = &paths[0];
        assert_eq!(path.coordinates().len(), 3);
        assert_eq!(path.score(), 4.);
        assert_eq!(path.upper_bound(), 6.);
        assert_eq!(path.length(), 1710.5);
        assert_eq!(path.shortest_path_distance(), 1500.);
        assert_eq!(
            path.endpoints(),
            Some((coord! {x: 9.17, y: 47.66}, coord! {x: 9.18, y: 47.67}))
        );
    }

    #[test]
    fn path_without_distance_is_skipped() {
        let geojson = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": {"type": "LineString", "coordinates": [[9.17, 47.66], [9.18, 47.67]]},
            "properties": {"score": 2, "shortestpathdist": 100}
        }, {
            "type": "Feature",
            "geometry": {"type": "LineString", "coordinates": [[9.17, 47.66], [9.19, 47.68]]},
            "properties": {"score": 4}
        }]
        }"#;

        let paths = read_paths(geojson.as_bytes()).unwrap();

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].score(), 2.);
        assert_eq!(paths[0].shortest_path_distance(), 100.);
    }

    #[test]
    fn polygons_are_ignored() {
        let geojson = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[9.1, 47.6], [9.2, 47.6], [9.2, 47.7], [9.1, 47.6]]]
            },
            "properties": {"shortestpathdist": 10}
        }]
        }"#;

        assert!(read_paths(geojson.as_bytes()).unwrap().is_empty());
    }
}
