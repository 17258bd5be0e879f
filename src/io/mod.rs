pub mod buildings;
pub mod overpass;

pub use buildings::{
    BuildingFootprint, BuildingsConfig, clip_buildings, clip_to_rect, fetch_and_save_buildings,
    footprints_from_osm, write_feature_collection,
};
pub use overpass::{
    DEFAULT_OVERPASS_URL, LatLon, OverpassElement, OverpassResponse, building_query,
    fetch_overpass, fetch_overpass_raw, parse_overpass,
};
