//! End-to-end conversion from pixels (or an image file) to an ASCII grid.

use std::path::Path;

use crate::ascii::{downsize, to_ascii, AsciiGrid, Ramp, DEFAULT_CHAR_ASPECT_RATIO};
use crate::error::ConvertError;
use crate::loader::load_image;
use crate::tensor::PixelTensor;

/// Settings for one conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Block width in source pixels, at least 1.
    pub interval: usize,
    /// Block height / width factor. 1.0 disables aspect correction.
    pub ratio: f64,
    pub ramp: Ramp,
}

impl ConvertOptions {
    /// Options with the default ratio and ramp.
    pub fn new(interval: usize) -> Self {
        Self {
            interval,
            ..Self::default()
        }
    }

    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    pub fn with_ramp(mut self, ramp: Ramp) -> Self {
        self.ramp = ramp;
        self
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            interval: 1,
            ratio: DEFAULT_CHAR_ASPECT_RATIO,
            ramp: Ramp::default(),
        }
    }
}

/// Downsize a tensor and map it to glyphs.
pub fn convert(tensor: &PixelTensor, options: &ConvertOptions) -> Result<AsciiGrid, ConvertError> {
    let averaged = downsize(tensor, options.interval, options.ratio)?;
    to_ascii(&averaged, &options.ramp)
}

/// Load an image file and convert it.
pub fn convert_file(path: &Path, options: &ConvertOptions) -> Result<AsciiGrid, ConvertError> {
    let tensor = load_image(path)?;
    convert(&tensor, options)
}
