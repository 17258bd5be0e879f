//! # groundscale-rs
//!
//! Scale bars for Web Mercator map viewports, plus the offline tooling that
//! prepares building footprints for the viewer.
//!
//! ### 1. `ScaleResult` - Scale Bar for a Viewport
//!
//! ```
//! use groundscale_rs::{ScaleResult, ViewportSample};
//!
//! let scale = ScaleResult::from_viewport(&ViewportSample::new(10.0, 23.1645));
//! if let Some(label) = scale.label() {
//!     println!("{:.1}px = {}", scale.pixel_width, label);
//! }
//! ```
//!
//! Unusable viewports (poles, zoom outside 0-22, NaN) never produce NaN or
//! infinity; they come back hidden. Use `try_compute_scale` to see why:
//!
//! ```
//! use groundscale_rs::{GroundScaleError, ViewportSample, try_compute_scale};
//!
//! let err = try_compute_scale(&ViewportSample::new(10.0, 90.0)).unwrap_err();
//! assert_eq!(err, GroundScaleError::DegenerateLatitude(90.0));
//! ```
//!
//! ### 2. Building Footprints from Overpass
//!
//! Fetch building ways, keep those whose centroid falls inside the bounding box
//! of a boundary file, and save them as GeoJSON:
//!
//! ```no_run
//! use groundscale_rs::{BuildingsConfig, fetch_and_save_buildings};
//!
//! let config = BuildingsConfig::new("public/export.geojson", "public/buildings.geojson");
//! let count = fetch_and_save_buildings(&config).unwrap();
//! println!("{} buildings", count);
//! ```
//!

pub mod api;
pub mod core;
pub mod error;
pub mod geom;
pub mod io;

pub use api::{ScaleResult, ViewState, Viewport, ViewportSample, compute_scale, try_compute_scale};
pub use crate::core::{
    EQUATOR_RESOLUTION_M, MAX_ZOOM, METERS_PER_KM, MIN_VISIBLE_ZOOM, MIN_ZOOM, NICE_DIGITS,
    NiceNumber, TARGET_WIDTH_PX, compute_ground_resolution, km_per_pixel, select_nice_number,
};
pub use error::GroundScaleError;
pub use geom::{BoundingBox, MIZORAM_BBOX, boundary_rect, parse_geojson, read_geojson};
pub use io::{
    BuildingFootprint, BuildingsConfig, DEFAULT_OVERPASS_URL, OverpassResponse, building_query,
    clip_buildings, fetch_and_save_buildings, fetch_overpass, parse_overpass,
    write_feature_collection,
};

pub use geo_types;
pub use geojson;
