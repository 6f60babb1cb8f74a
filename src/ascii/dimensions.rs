//! Block and grid size calculation for aspect-ratio-corrected output.

/// Default terminal character aspect ratio.
/// Text cells are roughly twice as tall as they are wide, so each block
/// covers twice as many source rows as columns.
pub const DEFAULT_CHAR_ASPECT_RATIO: f64 = 2.0;

/// Ratio that disables aspect correction (square blocks).
pub const NO_ASPECT_CORRECTION: f64 = 1.0;

/// Height of a block in source pixels for a given block width and ratio.
///
/// Computes `floor(block_w * ratio)`, clamped to at least 1 so that a small
/// ratio never produces a zero-height block.
///
/// # Example
/// ```
/// use asciify::ascii::block_height;
/// assert_eq!(block_height(4, 2.0), 8);
/// assert_eq!(block_height(3, 0.1), 1);
/// ```
pub fn block_height(block_w: usize, ratio: f64) -> usize {
    let scaled = (block_w as f64 * ratio).floor();
    if scaled < 1.0 {
        1
    } else {
        scaled as usize
    }
}

/// Number of complete blocks that fit in an image, as `(rows, cols)`.
///
/// Trailing source rows and columns that do not fill a whole block are
/// dropped. Zero block sizes yield `(0, 0)`.
pub fn grid_dimensions(
    img_width: usize,
    img_height: usize,
    block_w: usize,
    block_h: usize,
) -> (usize, usize) {
    if block_w == 0 || block_h == 0 {
        return (0, 0);
    }
    (img_height / block_h, img_width / block_w)
}
