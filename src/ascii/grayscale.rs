//! RGB to greyscale conversion.

/// Red weight of the luminance formula.
pub const LUMA_R: f64 = 0.30;
/// Green weight of the luminance formula.
pub const LUMA_G: f64 = 0.59;
/// Blue weight of the luminance formula.
pub const LUMA_B: f64 = 0.11;

/// Perceptual luminance of an averaged RGB color.
///
/// The formula is: Y = 0.30*R + 0.59*G + 0.11*B
///
/// The weights sum to 1.0, so channel values in [0, 255] give a luminance
/// in [0, 255]. Floating-point rounding can leave pure white a hair above or
/// below 255.0; the glyph mapper clamps its index for that reason.
#[inline]
pub fn luminance(r: f64, g: f64, b: f64) -> f64 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}
