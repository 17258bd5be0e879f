use crate::error::GroundScaleError;
use geo_types::{Rect, coord};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// WGS84 bounding box in Overpass order: south, west, north, east.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

/// Extraction box covering Mizoram.
pub const MIZORAM_BBOX: BoundingBox = BoundingBox {
    south: 21.58,
    west: 92.15,
    north: 24.52,
    east: 94.00,
};

impl BoundingBox {
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Result<Self, GroundScaleError> {
        let bbox = Self {
            south,
            west,
            north,
            east,
        };
        bbox.validate()?;
        Ok(bbox)
    }

    fn validate(&self) -> Result<(), GroundScaleError> {
        let values = [self.south, self.west, self.north, self.east];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(GroundScaleError::InvalidBoundingBox(
                "coordinates must be finite".to_string(),
            ));
        }
        if self.south > self.north {
            return Err(GroundScaleError::InvalidBoundingBox(format!(
                "south {} is above north {}",
                self.south, self.north
            )));
        }
        if self.west > self.east {
            return Err(GroundScaleError::InvalidBoundingBox(format!(
                "west {} is east of {}",
                self.west, self.east
            )));
        }
        if self.south < -90.0 || self.north > 90.0 {
            return Err(GroundScaleError::InvalidBoundingBox(
                "latitude outside -90..90".to_string(),
            ));
        }
        Ok(())
    }

    /// Rectangle with x as longitude and y as latitude.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.west, y: self.south },
            coord! { x: self.east, y: self.north },
        )
    }

    pub fn from_rect(rect: &Rect<f64>) -> Self {
        Self {
            south: rect.min().y,
            west: rect.min().x,
            north: rect.max().y,
            east: rect.max().x,
        }
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        MIZORAM_BBOX
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{},{}", self.south, self.west, self.north, self.east)
    }
}

impl FromStr for BoundingBox {
    type Err = GroundScaleError;

    /// Parses `"south,west,north,east"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| GroundScaleError::InvalidBoundingBox(format!("{}: {}", s, e)))?;

        match parts.as_slice() {
            [south, west, north, east] => Self::new(*south, *west, *north, *east),
            _ => Err(GroundScaleError::InvalidBoundingBox(format!(
                "expected south,west,north,east, got '{}'",
                s
            ))),
        }
    }
}
