use super::domain::ItemDimensions;

pub const CUBIC_FEET_PER_CUBIC_YARD: f64 = 27.0;

const FALLBACK_LENGTH: f64 = 3.0;
const FALLBACK_WIDTH: f64 = 2.0;
const FALLBACK_HEIGHT: f64 = 2.0;

/// Disposal volume in cubic yards for `quantity` units.
///
/// Dimensions that are missing (non-finite or not positive) fall back to the generic
/// 3 x 2 x 2 ft footprint one field at a time.
pub fn volume_cubic_yards(dimensions: &ItemDimensions, quantity: u32) -> f64 {
    let length = usable(dimensions.length, FALLBACK_LENGTH);
    let width = usable(dimensions.width, FALLBACK_WIDTH);
    let height = usable(dimensions.height, FALLBACK_HEIGHT);

    length * width * height * f64::from(quantity) / CUBIC_FEET_PER_CUBIC_YARD
}

fn usable(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}
