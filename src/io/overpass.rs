use crate::error::GroundScaleError;
use crate::geom::bbox::BoundingBox;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Public Overpass API interpreter endpoint.
pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Overpass QL query returning every building way in `bbox` with inline geometry.
pub fn building_query(bbox: &BoundingBox) -> String {
    format!("[out:json];way[building]({});out geom;", bbox)
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OverpassElement {
    Node {
        id: i64,
        lat: f64,
        lon: f64,
        #[serde(default)]
        tags: Map<String, Value>,
    },
    Way {
        id: i64,
        #[serde(default)]
        nodes: Vec<i64>,
        /// `out geom` positions; entries are null for nodes the server left out
        #[serde(default)]
        geometry: Vec<Option<LatLon>>,
        #[serde(default)]
        tags: Map<String, Value>,
    },
    /// Relations, areas and anything else the query did not ask for.
    #[serde(other)]
    Other,
}

/// Parses an Overpass `[out:json]` response body.
pub fn parse_overpass(body: &str) -> Result<OverpassResponse, GroundScaleError> {
    serde_json::from_str(body).map_err(|e| GroundScaleError::OverpassParseError(e.to_string()))
}

/// Runs `query` against `endpoint` and returns the raw response body.
pub fn fetch_overpass_raw(endpoint: &str, query: &str) -> Result<String, GroundScaleError> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| GroundScaleError::HttpError(e.to_string()))?;

    tracing::info!(endpoint, "fetching building data");
    let response = client
        .get(endpoint)
        .query(&[("data", query)])
        .send()
        .map_err(|e| GroundScaleError::HttpError(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(GroundScaleError::HttpError(format!(
            "Failed to fetch: {}",
            status
        )));
    }

    response
        .text()
        .map_err(|e| GroundScaleError::HttpError(e.to_string()))
}

/// Fetches building ways in `bbox` from `endpoint`.
pub fn fetch_overpass(
    endpoint: &str,
    bbox: &BoundingBox,
) -> Result<OverpassResponse, GroundScaleError> {
    let body = fetch_overpass_raw(endpoint, &building_query(bbox))?;
    parse_overpass(&body)
}
