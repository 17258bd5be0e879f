use crate::core::constants::{EQUATOR_RESOLUTION_M, MAX_ZOOM, METERS_PER_KM, MIN_ZOOM};
use crate::error::GroundScaleError;

/// Web Mercator ground resolution in meters per pixel.
///
/// `156543.03392 * cos(latitude) / 2^zoom`, with `latitude` in degrees. The
/// cosine is taken of `|latitude|`, so mirrored latitudes give bit-identical
/// results. At the poles the result is (numerically) zero.
pub fn compute_ground_resolution(zoom: f64, latitude: f64) -> f64 {
    EQUATOR_RESOLUTION_M * latitude.abs().to_radians().cos() / 2.0_f64.powf(zoom)
}

/// Kilometers per pixel after checking that `zoom` and `latitude` give a usable resolution.
pub fn km_per_pixel(zoom: f64, latitude: f64) -> Result<f64, GroundScaleError> {
    validate_viewport(zoom, latitude)?;

    let km = compute_ground_resolution(zoom, latitude) / METERS_PER_KM;
    if !km.is_finite() {
        return Err(GroundScaleError::NonFiniteInput("ground resolution"));
    }
    if km <= 0.0 {
        return Err(GroundScaleError::DegenerateLatitude(latitude));
    }
    Ok(km)
}

pub(crate) fn validate_viewport(zoom: f64, latitude: f64) -> Result<(), GroundScaleError> {
    if !zoom.is_finite() {
        return Err(GroundScaleError::NonFiniteInput("zoom"));
    }
    if !latitude.is_finite() {
        return Err(GroundScaleError::NonFiniteInput("latitude"));
    }
    if !(MIN_ZOOM..=MAX_ZOOM).contains(&zoom) {
        return Err(GroundScaleError::OutOfRangeZoom(zoom));
    }
    if latitude.abs() >= 90.0 {
        return Err(GroundScaleError::DegenerateLatitude(latitude));
    }
    Ok(())
}
