use super::constants::{DEGREES_PER_RADIAN, PIXELS_PER_METER, RADIANS_PER_DEGREE};

/// The Heavyside window function.
/// Returns 1 if `t` lies within `[a, b]` (inclusive on both ends), 0 otherwise.
/// Used to switch piecewise motion curves on and off.
pub fn heavyside(t: f32, a: f32, b: f32) -> i32 {
    if t < a || t > b {
        0
    } else {
        1
    }
}

/// Convert a length in screen pixels to physics meters
pub fn pixels_to_meters(pixels: f32) -> f32 {
    pixels / PIXELS_PER_METER
}

/// Convert a length in physics meters to screen pixels
pub fn meters_to_pixels(meters: f32) -> f32 {
    meters * PIXELS_PER_METER
}

pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * RADIANS_PER_DEGREE
}

pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * DEGREES_PER_RADIAN
}
