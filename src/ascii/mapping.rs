//! Brightness to character mapping.

use super::grid::{AsciiGrid, AveragedGrid};
use crate::error::ConvertError;

/// Ramp index for a luminance value.
///
/// Computes `floor(luminance / 256 * levels)` and clamps the result to
/// `[0, levels - 1]`. Without the clamp a luminance of 255.0 or slightly
/// above (from floating-point rounding) can land one past the end.
/// Negative and NaN inputs map to 0.
///
/// Returns `None` when `levels` is 0.
#[inline]
pub fn glyph_index(luminance: f64, levels: usize) -> Option<usize> {
    let last = levels.checked_sub(1)?;
    let scaled = (luminance / 256.0 * levels as f64).floor();
    // `as` saturates: NaN and negatives become 0
    Some((scaled as usize).min(last))
}

/// Map an averaged color grid to glyphs from a ramp.
///
/// Each cell's luminance (`0.30*R + 0.59*G + 0.11*B`) selects a glyph via
/// [`glyph_index`]. Lower luminance maps to earlier glyphs. The output has
/// the same dimensions and row-major order as the input.
///
/// # Arguments
/// * `grid` - Averaged block colors from [`downsize`](super::downsize)
/// * `ramp` - Glyphs ordered from lowest to highest luminance
///
/// # Errors
/// Returns [`ConvertError::InvalidArgument`] if `ramp` is empty.
///
/// # Example
/// ```
/// use asciify::ascii::{downsize, to_ascii, CLASSIC_CHARSET};
/// use asciify::tensor::PixelTensor;
///
/// let white = PixelTensor::filled(4, 4, [255, 255, 255]).unwrap();
/// let grid = downsize(&white, 2, 1.0).unwrap();
/// let ascii = to_ascii(&grid, CLASSIC_CHARSET).unwrap();
/// assert_eq!(ascii.to_text(), "  \n  \n");
/// ```
pub fn to_ascii(grid: &AveragedGrid, ramp: &[char]) -> Result<AsciiGrid, ConvertError> {
    let empty = || ConvertError::invalid("Character ramp must not be empty");
    if ramp.is_empty() {
        return Err(empty());
    }

    let levels = ramp.len();
    let chars = grid
        .cells()
        .iter()
        .map(|cell| {
            glyph_index(cell.luminance(), levels)
                .map(|i| ramp[i])
                .ok_or_else(empty)
        })
        .collect::<Result<Vec<char>, _>>()?;

    Ok(AsciiGrid::from_chars(grid.rows(), grid.cols(), chars))
}
