/// Error type for groundscale-rs operations.
#[derive(Debug, PartialEq)]
pub enum GroundScaleError {
    /// Latitude at or beyond the poles, where ground resolution collapses to zero.
    DegenerateLatitude(f64),
    /// Nice-number selection needs a strictly positive input.
    NonPositiveTarget(f64),
    /// Zoom is outside the supported 0-22 range.
    OutOfRangeZoom(f64),
    /// A value was NaN or infinite, or a result would overflow.
    NonFiniteInput(&'static str),
    /// The boundary GeoJSON has no coordinates to take a bounding box from.
    EmptyBoundary,
    /// A bounding box string or value is malformed.
    InvalidBoundingBox(String),
    /// Failed to parse GeoJSON.
    GeometryParseError(String),
    /// Failed to parse an Overpass API response.
    OverpassParseError(String),
    /// HTTP request to the Overpass endpoint failed.
    HttpError(String),
    /// File I/O or serialization error.
    IoError(String),
}

impl std::fmt::Display for GroundScaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroundScaleError::DegenerateLatitude(lat) => {
                write!(f, "Degenerate latitude: {}", lat)
            }
            GroundScaleError::NonPositiveTarget(v) => write!(f, "Non-positive target: {}", v),
            GroundScaleError::OutOfRangeZoom(z) => write!(f, "Zoom out of range: {}", z),
            GroundScaleError::NonFiniteInput(what) => write!(f, "Non-finite value: {}", what),
            GroundScaleError::EmptyBoundary => write!(f, "Boundary has no coordinates"),
            GroundScaleError::InvalidBoundingBox(msg) => write!(f, "Invalid bounding box: {}", msg),
            GroundScaleError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
            GroundScaleError::OverpassParseError(msg) => {
                write!(f, "Overpass parse error: {}", msg)
            }
            GroundScaleError::HttpError(msg) => write!(f, "HTTP error: {}", msg),
            GroundScaleError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for GroundScaleError {}
