pub mod bbox;
pub mod parse;

pub use bbox::{BoundingBox, MIZORAM_BBOX};
pub use parse::{boundary_rect, parse_geojson, read_geojson};
