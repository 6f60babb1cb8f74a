//! Block averaging of pixel data into a coarser color grid.

use rayon::prelude::*;

use super::dimensions::{block_height, grid_dimensions};
use super::grid::{AveragedGrid, CellColor};
use crate::error::ConvertError;
use crate::tensor::PixelTensor;

/// Downsize a pixel tensor by averaging non-overlapping blocks.
///
/// Each output cell is the per-channel mean of a `block_h × block_w` block of
/// source pixels, where `block_h = max(1, floor(block_w * ratio))`. The ratio
/// compensates for text cells being taller than wide; pass
/// [`NO_ASPECT_CORRECTION`](super::NO_ASPECT_CORRECTION) for square blocks.
///
/// Source rows and columns past the last complete block are ignored. Any
/// alpha channel is ignored. Output rows are computed in parallel and stored
/// in row-major order.
///
/// # Arguments
/// * `tensor` - Source pixels
/// * `block_w` - Block width in pixels (the "interval"), at least 1
/// * `ratio` - Block height / width factor, finite and positive
///
/// # Errors
/// * [`ConvertError::InvalidArgument`] if `block_w < 1` or `ratio` is not a
///   finite positive number
/// * [`ConvertError::EmptyResult`] if the image is smaller than one block in
///   either dimension
///
/// # Example
/// ```
/// use asciify::ascii::downsize;
/// use asciify::tensor::PixelTensor;
///
/// let tensor = PixelTensor::filled(8, 8, [10, 20, 30]).unwrap();
/// let grid = downsize(&tensor, 2, 2.0).unwrap();
/// assert_eq!(grid.dimensions(), (2, 4));
/// ```
pub fn downsize(
    tensor: &PixelTensor,
    block_w: usize,
    ratio: f64,
) -> Result<AveragedGrid, ConvertError> {
    if block_w < 1 {
        return Err(ConvertError::invalid("Interval must be at least 1."));
    }
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(ConvertError::invalid(format!(
            "Aspect ratio must be a positive number, got {}",
            ratio
        )));
    }

    let block_h = block_height(block_w, ratio);
    let (rows, cols) = grid_dimensions(tensor.width(), tensor.height(), block_w, block_h);

    if rows == 0 || cols == 0 {
        return Err(ConvertError::EmptyResult {
            width: tensor.width(),
            height: tensor.height(),
            block_w,
            block_h,
        });
    }

    log::debug!(
        "Downsizing {}x{} image with {}x{} blocks into {}x{} cells",
        tensor.width(),
        tensor.height(),
        block_w,
        block_h,
        cols,
        rows
    );

    let pixel_count = (block_w * block_h) as f64;
    let mut cells = vec![CellColor::default(); rows * cols];

    cells
        .par_chunks_mut(cols)
        .enumerate()
        .for_each(|(cy, row)| {
            let top = cy * block_h;
            for (cx, cell) in row.iter_mut().enumerate() {
                let [sum_r, sum_g, sum_b] = block_sum(tensor, cx * block_w, top, block_w, block_h);
                *cell = CellColor {
                    r: sum_r as f64 / pixel_count,
                    g: sum_g as f64 / pixel_count,
                    b: sum_b as f64 / pixel_count,
                };
            }
        });

    Ok(AveragedGrid::from_cells(rows, cols, cells))
}

/// Sum the RGB channels of every pixel in one block.
///
/// Accumulates in `u64` so large blocks cannot overflow.
#[inline]
fn block_sum(
    tensor: &PixelTensor,
    left: usize,
    top: usize,
    block_w: usize,
    block_h: usize,
) -> [u64; 3] {
    let channels = tensor.channels();
    let mut sum = [0u64; 3];

    for y in top..top + block_h {
        let row = tensor.row(y);
        let span = &row[left * channels..(left + block_w) * channels];
        for px in span.chunks_exact(channels) {
            sum[0] += u64::from(px[0]);
            sum[1] += u64::from(px[1]);
            sum[2] += u64::from(px[2]);
        }
    }

    sum
}
