use crate::error::GroundScaleError;
use crate::geom::bbox::BoundingBox;
use crate::geom::parse::{boundary_rect, read_geojson};
use crate::io::overpass::{
    DEFAULT_OVERPASS_URL, LatLon, OverpassElement, OverpassResponse, fetch_overpass,
};
use geo::Contains;
use geo_types::{Coord, LineString, Point, Polygon, Rect};
use geojson::{Feature, FeatureCollection, GeoJson, feature::Id};
use rayon::prelude::*;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Configuration for fetching building footprints and clipping them to a boundary.
#[derive(Debug, Clone)]
pub struct BuildingsConfig {
    pub bbox: BoundingBox,
    pub endpoint: String,
    pub boundary_path: PathBuf,
    pub output_path: PathBuf,
}

impl BuildingsConfig {
    /// Config for the Mizoram extraction box and the public Overpass endpoint.
    ///
    /// # Example
    /// ```
    /// use groundscale_rs::{BoundingBox, BuildingsConfig};
    ///
    /// let config = BuildingsConfig::new("public/export.geojson", "public/buildings.geojson")
    ///     .bbox(BoundingBox::new(23.6, 92.6, 23.8, 92.8).unwrap());
    /// ```
    pub fn new(boundary_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            bbox: BoundingBox::default(),
            endpoint: DEFAULT_OVERPASS_URL.to_string(),
            boundary_path: boundary_path.into(),
            output_path: output_path.into(),
        }
    }

    pub fn bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = bbox;
        self
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl Default for BuildingsConfig {
    fn default() -> Self {
        Self::new("public/export.geojson", "public/buildings.geojson")
    }
}

/// A closed building outline taken from an OSM way.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingFootprint {
    pub way_id: i64,
    pub polygon: Polygon<f64>,
    pub tags: Map<String, Value>,
}

impl BuildingFootprint {
    /// Builds a footprint from `out geom` positions, if they form a closed ring.
    pub fn from_way(
        way_id: i64,
        geometry: &[Option<LatLon>],
        tags: &Map<String, Value>,
    ) -> Option<Self> {
        let coords = geometry
            .iter()
            .map(|p| p.map(|p| Coord { x: p.lon, y: p.lat }))
            .collect::<Option<Vec<_>>>()?;

        if coords.len() < 4 || coords.first() != coords.last() {
            return None;
        }

        Some(Self {
            way_id,
            polygon: Polygon::new(LineString::from(coords), vec![]),
            tags: tags.clone(),
        })
    }

    /// Mean of the ring vertices, each closing vertex counted once.
    ///
    /// This is the vertex average, not the area-weighted centroid, so outlines
    /// with dense vertices along one side lean toward that side.
    pub fn centroid(&self) -> Option<Point<f64>> {
        let rings = std::iter::once(self.polygon.exterior()).chain(self.polygon.interiors());

        let (mut sum_x, mut sum_y, mut count) = (0.0, 0.0, 0usize);
        for ring in rings {
            let open = if ring.is_closed() {
                ring.0.len().saturating_sub(1)
            } else {
                ring.0.len()
            };
            for c in &ring.0[..open] {
                sum_x += c.x;
                sum_y += c.y;
                count += 1;
            }
        }

        (count > 0).then(|| Point::new(sum_x / count as f64, sum_y / count as f64))
    }

    pub fn osm_id(&self) -> String {
        format!("way/{}", self.way_id)
    }

    pub fn to_feature(&self) -> Feature {
        let mut properties = self.tags.clone();
        properties.insert("id".to_string(), Value::String(self.osm_id()));

        Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::new(geojson::Value::from(&self.polygon))),
            id: Some(Id::String(self.osm_id())),
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

/// Closed ways in `response` as footprints; open or incomplete ways are skipped.
pub fn footprints_from_osm(response: &OverpassResponse) -> Vec<BuildingFootprint> {
    let mut skipped = 0usize;
    let footprints: Vec<_> = response
        .elements
        .iter()
        .filter_map(|element| match element {
            OverpassElement::Way {
                id, geometry, tags, ..
            } => {
                let footprint = BuildingFootprint::from_way(*id, geometry, tags);
                if footprint.is_none() {
                    skipped += 1;
                }
                footprint
            }
            _ => None,
        })
        .collect();

    if skipped > 0 {
        tracing::warn!(skipped, "skipped ways that are not closed polygons");
    }
    footprints
}

/// Keeps footprints whose vertex centroid lies strictly inside `rect`, in input order.
pub fn clip_to_rect(
    footprints: Vec<BuildingFootprint>,
    rect: &Rect<f64>,
) -> Vec<BuildingFootprint> {
    footprints
        .into_par_iter()
        .filter(|footprint| {
            footprint
                .centroid()
                .is_some_and(|centroid| rect.contains(&centroid))
        })
        .collect()
}

/// Footprints from `response` clipped to the bounding box of `boundary`.
pub fn clip_buildings(
    response: &OverpassResponse,
    boundary: &GeoJson,
) -> Result<FeatureCollection, GroundScaleError> {
    let rect = boundary_rect(boundary)?;
    let footprints = footprints_from_osm(response);
    let total = footprints.len();

    let kept = clip_to_rect(footprints, &rect);
    tracing::info!(total, kept = kept.len(), "clipped buildings to boundary");

    Ok(FeatureCollection {
        bbox: None,
        features: kept.iter().map(BuildingFootprint::to_feature).collect(),
        foreign_members: None,
    })
}

/// Writes `collection` as indented GeoJSON.
pub fn write_feature_collection(
    collection: &FeatureCollection,
    path: impl AsRef<Path>,
) -> Result<(), GroundScaleError> {
    let json = serde_json::to_string_pretty(collection)
        .map_err(|e| GroundScaleError::IoError(e.to_string()))?;
    std::fs::write(path, json).map_err(|e| GroundScaleError::IoError(e.to_string()))
}

/// Fetches buildings for `config.bbox`, clips them to the boundary file and saves them.
///
/// Returns the number of buildings written.
pub fn fetch_and_save_buildings(config: &BuildingsConfig) -> Result<usize, GroundScaleError> {
    let boundary = read_geojson(&config.boundary_path)?;
    let response = fetch_overpass(&config.endpoint, &config.bbox)?;

    let collection = clip_buildings(&response, &boundary)?;
    write_feature_collection(&collection, &config.output_path)?;

    tracing::info!(path = %config.output_path.display(), "building data saved");
    Ok(collection.features.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::parse::parse_geojson;
    use crate::io::overpass::parse_overpass;
    use geo_types::coord;
    use tempfile::tempdir;

    const BOUNDARY: &str = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {"name": "Mizoram"},
            "geometry": {"type": "Polygon", "coordinates": [[[92.0,22.0],[93.0,22.0],[93.0,24.0],[92.0,24.0],[92.0,22.0]]]}
        }]
    }"#;

    const OVERPASS: &str = r#"{
        "elements": [
            {"type": "way", "id": 1, "nodes": [10, 11, 12, 13, 10],
             "geometry": [{"lat":23.0,"lon":92.5},{"lat":23.0,"lon":92.501},{"lat":23.001,"lon":92.501},{"lat":23.001,"lon":92.5},{"lat":23.0,"lon":92.5}],
             "tags": {"building": "yes", "name": "Inside"}},
            {"type": "way", "id": 2, "nodes": [20, 21, 22, 23, 20],
             "geometry": [{"lat":23.0,"lon":93.5},{"lat":23.0,"lon":93.501},{"lat":23.001,"lon":93.501},{"lat":23.001,"lon":93.5},{"lat":23.0,"lon":93.5}],
             "tags": {"building": "house"}},
            {"type": "way", "id": 3, "nodes": [30, 31, 32],
             "geometry": [{"lat":23.0,"lon":92.6},{"lat":23.0,"lon":92.601},{"lat":23.001,"lon":92.601}],
             "tags": {"building": "yes"}},
            {"type": "way", "id": 4, "nodes": [40, 41, 42, 40],
             "geometry": [{"lat":23.0,"lon":92.7},null,{"lat":23.001,"lon":92.701},{"lat":23.0,"lon":92.7}],
             "tags": {"building": "yes"}},
            {"type": "node", "id": 5, "lat": 23.5, "lon": 92.5, "tags": {"amenity": "hospital"}}
        ]
    }"#;

    #[test]
    fn test_footprints_skip_open_and_incomplete_ways() -> Result<(), GroundScaleError> {
        let response = parse_overpass(OVERPASS)?;
        let footprints = footprints_from_osm(&response);

        let ids: Vec<i64> = footprints.iter().map(|f| f.way_id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(footprints[0].polygon.exterior().coords().count(), 5);
        Ok(())
    }

    #[test]
    fn test_clip_keeps_buildings_inside_boundary() -> Result<(), GroundScaleError> {
        let response = parse_overpass(OVERPASS)?;
        let boundary = parse_geojson(BOUNDARY)?;

        let collection = clip_buildings(&response, &boundary)?;

        assert_eq!(collection.features.len(), 1);
        let feature = &collection.features[0];
        assert_eq!(feature.id, Some(Id::String("way/1".to_string())));
        let props = feature.properties.as_ref().unwrap();
        assert_eq!(props["name"], "Inside");
        assert_eq!(props["id"], "way/1");
        assert!(matches!(
            feature.geometry.as_ref().map(|g| &g.value),
            Some(geojson::Value::Polygon(_))
        ));
        Ok(())
    }

    #[test]
    fn test_centroid_on_edge_is_dropped() {
        let ring = vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)];
        let footprint = BuildingFootprint {
            way_id: 9,
            polygon: Polygon::new(LineString::from(ring), vec![]),
            tags: Map::new(),
        };
        let c = footprint.centroid().unwrap();
        let rect = Rect::new(
            coord! { x: c.x(), y: c.y() - 1.0 },
            coord! { x: c.x() + 1.0, y: c.y() + 1.0 },
        );

        assert!(clip_to_rect(vec![footprint], &rect).is_empty());
    }

    #[test]
    fn test_centroid_averages_vertices() {
        let ring = vec![
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.9, 1.0),
            (0.8, 1.0),
            (0.7, 1.0),
            (0.0, 1.0),
            (0.0, 0.0),
        ];
        let footprint = BuildingFootprint {
            way_id: 11,
            polygon: Polygon::new(LineString::from(ring), vec![]),
            tags: Map::new(),
        };

        let c = footprint.centroid().unwrap();
        assert!((c.x() - 4.4 / 7.0).abs() < 1e-12);
        assert!((c.y() - 5.0 / 7.0).abs() < 1e-12);

        // area-weighted centroid would sit at x = 0.5, left of this box
        let rect = Rect::new(coord! { x: 0.55, y: 0.0 }, coord! { x: 2.0, y: 2.0 });
        assert_eq!(clip_to_rect(vec![footprint], &rect).len(), 1);
    }

    #[test]
    fn test_clip_preserves_order() {
        let rect = BoundingBox::new(0.0, 0.0, 10.0, 10.0).unwrap().to_rect();
        let footprints: Vec<_> = (0..50)
            .map(|i| {
                let x = 1.0 + (i % 8) as f64;
                let ring = vec![(x, 1.0), (x + 0.1, 1.0), (x + 0.1, 1.1), (x, 1.1), (x, 1.0)];
                BuildingFootprint {
                    way_id: i,
                    polygon: Polygon::new(LineString::from(ring), vec![]),
                    tags: Map::new(),
                }
            })
            .collect();

        let kept = clip_to_rect(footprints, &rect);
        let ids: Vec<i64> = kept.iter().map(|f| f.way_id).collect();
        assert_eq!(ids, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_write_feature_collection() -> Result<(), GroundScaleError> {
        let response = parse_overpass(OVERPASS)?;
        let boundary = parse_geojson(BOUNDARY)?;
        let collection = clip_buildings(&response, &boundary)?;

        let dir = tempdir().map_err(|e| GroundScaleError::IoError(e.to_string()))?;
        let path = dir.path().join("buildings.geojson");
        write_feature_collection(&collection, &path)?;

        let text = std::fs::read_to_string(&path)
            .map_err(|e| GroundScaleError::IoError(e.to_string()))?;
        assert!(text.contains("\n  \"features\": ["));
        match parse_geojson(&text)? {
            GeoJson::FeatureCollection(fc) => assert_eq!(fc.features.len(), 1),
            other => panic!("Expected FeatureCollection, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_config_builder() {
        let bbox = BoundingBox::new(23.6, 92.6, 23.8, 92.8).unwrap();
        let config = BuildingsConfig::new("in.geojson", "out.geojson")
            .bbox(bbox)
            .endpoint("http://localhost:12345/api/interpreter");

        assert_eq!(config.bbox, bbox);
        assert_eq!(config.endpoint, "http://localhost:12345/api/interpreter");
        assert_eq!(config.boundary_path, PathBuf::from("in.geojson"));
        assert_eq!(BuildingsConfig::default().endpoint, DEFAULT_OVERPASS_URL);
    }

    #[test]
    fn test_missing_boundary_fails_before_fetch() {
        let config = BuildingsConfig::new("/no/such/boundary.geojson", "/tmp/unused.geojson")
            .endpoint("http://127.0.0.1:9/never");

        assert!(matches!(
            fetch_and_save_buildings(&config),
            Err(GroundScaleError::IoError(_))
        ));
    }
}
