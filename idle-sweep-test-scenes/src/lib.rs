pub mod expectations;
pub mod scene;

pub use expectations::{check_pixels, PixelExpectation};
pub use scene::{
    distinct_expectations, distinct_state, fixed_state, gray_state, reference_expectations,
    seeded_state, CANVAS_HEIGHT, CANVAS_WIDTH, DISTINCT_TRACKS,
};
