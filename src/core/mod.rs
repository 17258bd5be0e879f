pub mod constants;
pub mod nice;
pub mod resolution;

pub use constants::{
    EQUATOR_RESOLUTION_M, MAX_ZOOM, METERS_PER_KM, MIN_VISIBLE_ZOOM, MIN_ZOOM, NICE_DIGITS,
    TARGET_WIDTH_PX,
};
pub use nice::{NiceNumber, select_nice_number};
pub use resolution::{compute_ground_resolution, km_per_pixel};
