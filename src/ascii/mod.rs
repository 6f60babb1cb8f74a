//! Image to ASCII conversion pipeline.
//!
//! The pipeline has two stages:
//!
//! 1. **Downsampling** - average fixed-size pixel blocks into a color grid
//!    ([`downsize`])
//! 2. **Character mapping** - convert each averaged color to luminance and
//!    pick a glyph from a ramp ([`to_ascii`])
//!
//! # Character Sets
//!
//! Ramps are passed in by the caller. Presets are available via [`CharSet`]:
//! - `Classic` - 13-level ramp, densest glyph first (default)
//! - `Standard` - 10-level ASCII density ramp
//! - `Blocks` - Unicode shade characters
//! - `Minimal` - 4-level clean look

mod charset;
mod dimensions;
mod downsample;
mod grayscale;
mod grid;
mod mapping;

pub use charset::{
    CharSet, Ramp, BLOCKS_CHARSET, CLASSIC_CHARSET, MINIMAL_CHARSET, STANDARD_CHARSET,
};
pub use dimensions::{
    block_height, grid_dimensions, DEFAULT_CHAR_ASPECT_RATIO, NO_ASPECT_CORRECTION,
};
pub use downsample::downsize;
pub use grayscale::{luminance, LUMA_B, LUMA_G, LUMA_R};
pub use grid::{AsciiGrid, AveragedGrid, CellColor};
pub use mapping::{glyph_index, to_ascii};
