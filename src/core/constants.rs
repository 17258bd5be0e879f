/// Web Mercator ground resolution at the equator for zoom 0 (meters per pixel, 256px tiles)
pub const EQUATOR_RESOLUTION_M: f64 = 156543.03392;

/// Meters in a kilometer
pub const METERS_PER_KM: f64 = 1000.0;

/// On-screen width the scale bar aims for, in pixels
pub const TARGET_WIDTH_PX: f64 = 150.0;

/// Below this zoom the scale bar is not shown
pub const MIN_VISIBLE_ZOOM: f64 = 9.0;

/// Lowest supported zoom level
pub const MIN_ZOOM: f64 = 0.0;

/// Highest supported zoom level
pub const MAX_ZOOM: f64 = 22.0;

/// Leading digits a scale distance may start with
pub const NICE_DIGITS: [u8; 4] = [1, 2, 5, 10];
