use serde::{Deserialize, Serialize};

/// Trait for types that carry the zoom and latitude a scale bar depends on.
///
/// Implemented for [`ViewportSample`], [`ViewState`] and `(zoom, latitude)` tuples.
pub trait Viewport {
    /// Web-map zoom level, practically 0-22.
    fn zoom(&self) -> f64;
    /// Latitude of the viewport center in degrees.
    fn latitude(&self) -> f64;
}

/// The two viewport values the scale bar is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSample {
    pub zoom: f64,
    pub latitude: f64,
}

impl ViewportSample {
    pub fn new(zoom: f64, latitude: f64) -> Self {
        Self { zoom, latitude }
    }
}

/// Full camera state as reported by the map viewer on pan and zoom.
///
/// Field names serialize as camelCase to match the viewer's view-state payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
    #[serde(default)]
    pub pitch: f64,
    #[serde(default)]
    pub bearing: f64,
}

impl ViewState {
    /// Initial view centered on Mizoram.
    pub fn mizoram() -> Self {
        Self {
            longitude: 92.9376,
            latitude: 23.1645,
            zoom: 7.0,
            pitch: 0.0,
            bearing: 0.0,
        }
    }

    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn sample(&self) -> ViewportSample {
        ViewportSample::new(self.zoom, self.latitude)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::mizoram()
    }
}

impl From<ViewState> for ViewportSample {
    fn from(state: ViewState) -> Self {
        state.sample()
    }
}

impl Viewport for ViewportSample {
    fn zoom(&self) -> f64 {
        self.zoom
    }
    fn latitude(&self) -> f64 {
        self.latitude
    }
}

impl Viewport for ViewState {
    fn zoom(&self) -> f64 {
        self.zoom
    }
    fn latitude(&self) -> f64 {
        self.latitude
    }
}

impl Viewport for (f64, f64) {
    fn zoom(&self) -> f64 {
        self.0
    }
    fn latitude(&self) -> f64 {
        self.1
    }
}
