pub mod scale;
pub mod viewport;

pub use scale::{ScaleResult, compute_scale, try_compute_scale};
pub use viewport::{ViewState, Viewport, ViewportSample};
