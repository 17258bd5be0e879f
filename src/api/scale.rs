use crate::api::viewport::Viewport;
use crate::core::constants::{MIN_VISIBLE_ZOOM, TARGET_WIDTH_PX};
use crate::core::nice::select_nice_number;
use crate::core::resolution::km_per_pixel;
use crate::error::GroundScaleError;
use serde::Serialize;

/// A scale bar for one viewport: a round ground distance and its width on screen.
///
/// # Example
///
/// ```
/// use groundscale_rs::{ScaleResult, ViewportSample};
///
/// let scale = ScaleResult::from_viewport(&ViewportSample::new(10.0, 23.1645));
/// assert!(scale.visible);
/// assert_eq!(scale.ground_distance, 50.0);
/// assert_eq!(scale.label().as_deref(), Some("50 km"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleResult {
    /// Width of the bar in screen pixels
    pub pixel_width: f64,
    /// Distance the bar stands for, in kilometers
    pub ground_distance: f64,
    /// Whether the bar should be drawn at all
    pub visible: bool,
}

impl ScaleResult {
    /// A result that tells the caller not to draw anything.
    pub fn hidden() -> Self {
        Self {
            pixel_width: 0.0,
            ground_distance: 0.0,
            visible: false,
        }
    }

    /// Computes the scale bar, reporting why a viewport cannot have one.
    ///
    /// Viewports below [`MIN_VISIBLE_ZOOM`] still get a consistent width and
    /// distance, only with `visible` set to false.
    pub fn try_from_viewport<V: Viewport>(viewport: &V) -> Result<Self, GroundScaleError> {
        let zoom = viewport.zoom();
        let km_per_px = km_per_pixel(zoom, viewport.latitude())?;

        let target_km = km_per_px * TARGET_WIDTH_PX;
        let ground_distance = select_nice_number(target_km)?.value();
        let pixel_width = ground_distance / km_per_px;
        if !pixel_width.is_finite() {
            return Err(GroundScaleError::NonFiniteInput("pixel width"));
        }

        Ok(Self {
            pixel_width,
            ground_distance,
            visible: zoom >= MIN_VISIBLE_ZOOM,
        })
    }

    /// Computes the scale bar, hiding it when the viewport is unusable.
    pub fn from_viewport<V: Viewport>(viewport: &V) -> Self {
        match Self::try_from_viewport(viewport) {
            Ok(scale) => scale,
            Err(e) => {
                tracing::debug!(
                    zoom = viewport.zoom(),
                    latitude = viewport.latitude(),
                    "hiding scale bar: {}",
                    e
                );
                Self::hidden()
            }
        }
    }

    /// Text shown under the bar, e.g. `"50 km"`.
    pub fn label(&self) -> Option<String> {
        self.visible.then(|| format!("{} km", self.ground_distance))
    }
}

/// Scale bar for `viewport`; unusable viewports give [`ScaleResult::hidden`].
pub fn compute_scale<V: Viewport>(viewport: &V) -> ScaleResult {
    ScaleResult::from_viewport(viewport)
}

/// Scale bar for `viewport`, or the validation error that prevents one.
pub fn try_compute_scale<V: Viewport>(viewport: &V) -> Result<ScaleResult, GroundScaleError> {
    ScaleResult::try_from_viewport(viewport)
}
