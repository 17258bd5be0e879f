use crate::error::GroundScaleError;
use geo::BoundingRect;
use geo_types::{GeometryCollection, Rect};
use geojson::GeoJson;
use std::path::Path;

/// Parses a GeoJSON document (Geometry, Feature or FeatureCollection).
pub fn parse_geojson(s: &str) -> Result<GeoJson, GroundScaleError> {
    s.trim()
        .parse()
        .map_err(|e: geojson::Error| GroundScaleError::GeometryParseError(e.to_string()))
}

/// Reads and parses a GeoJSON file.
pub fn read_geojson(path: impl AsRef<Path>) -> Result<GeoJson, GroundScaleError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| GroundScaleError::IoError(format!("{}: {}", path.display(), e)))?;
    parse_geojson(&text)
}

/// Bounding rectangle over every coordinate in `boundary`.
pub fn boundary_rect(boundary: &GeoJson) -> Result<Rect<f64>, GroundScaleError> {
    let collection = GeometryCollection::<f64>::try_from(boundary)
        .map_err(|e| GroundScaleError::GeometryParseError(e.to_string()))?;

    collection
        .bounding_rect()
        .ok_or(GroundScaleError::EmptyBoundary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_rect_feature_collection() -> Result<(), GroundScaleError> {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"name": "a"},
                 "geometry": {"type": "Polygon", "coordinates": [[[92.2,21.9],[93.4,21.9],[93.4,24.5],[92.2,24.5],[92.2,21.9]]]}},
                {"type": "Feature", "properties": {},
                 "geometry": {"type": "Point", "coordinates": [93.9, 23.0]}}
            ]
        }"#;
        let rect = boundary_rect(&parse_geojson(json)?)?;

        assert!((rect.min().x - 92.2).abs() < 1e-9);
        assert!((rect.min().y - 21.9).abs() < 1e-9);
        assert!((rect.max().x - 93.9).abs() < 1e-9);
        assert!((rect.max().y - 24.5).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_boundary_rect_bare_geometry() -> Result<(), GroundScaleError> {
        let json = r#"{"type":"LineString","coordinates":[[1.0,2.0],[3.0,-4.0]]}"#;
        let rect = boundary_rect(&parse_geojson(json)?)?;

        assert_eq!(rect.min().x, 1.0);
        assert_eq!(rect.min().y, -4.0);
        assert_eq!(rect.max().x, 3.0);
        assert_eq!(rect.max().y, 2.0);
        Ok(())
    }

    #[test]
    fn test_empty_boundary() -> Result<(), GroundScaleError> {
        let json = r#"{"type":"FeatureCollection","features":[]}"#;
        assert_eq!(
            boundary_rect(&parse_geojson(json)?),
            Err(GroundScaleError::EmptyBoundary)
        );
        Ok(())
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            parse_geojson("{not json"),
            Err(GroundScaleError::GeometryParseError(_))
        ));
    }

    #[test]
    fn test_read_missing_file() {
        assert!(matches!(
            read_geojson("/definitely/not/here.geojson"),
            Err(GroundScaleError::IoError(_))
        ));
    }
}
