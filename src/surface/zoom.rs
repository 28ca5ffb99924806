//! Zoom levels
//!
//! A zoom factor is a signed step away from the neutral level in
//! [`ZOOM_LEVELS`]. Factor 0 is 100%.

/// Display percentages, smallest to largest
pub const ZOOM_LEVELS: [u16; 15] = [
    30, 40, 50, 67, 80, 90, 100, 110, 120, 133, 150, 170, 200, 240, 300,
];

const NEUTRAL_INDEX: usize = 6;

/// Smallest zoom factor (30%)
pub const ZOOM_MIN: i32 = -(NEUTRAL_INDEX as i32);
/// Largest zoom factor (300%)
pub const ZOOM_MAX: i32 = (ZOOM_LEVELS.len() - 1 - NEUTRAL_INDEX) as i32;

pub fn clamp_zoom(factor: i32) -> i32 {
    factor.clamp(ZOOM_MIN, ZOOM_MAX)
}

/// Display percentage for a factor; out-of-range factors are clamped
pub fn zoom_percent(factor: i32) -> u16 {
    let index = (NEUTRAL_INDEX as i32 + clamp_zoom(factor)) as usize;
    ZOOM_LEVELS[index]
}

/// Scale handed to the engine, 1.0 being the neutral size
pub fn zoom_scale(factor: i32) -> f64 {
    f64::from(zoom_percent(factor)) / 100.0
}
