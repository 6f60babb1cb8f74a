//! Raw pixel storage handed to the ASCII pipeline.

use crate::error::ConvertError;

/// An immutable (height × width × channels) array of 8-bit pixel values.
///
/// Pixels are stored row-major with interleaved channels. Three channels are
/// read as RGB; a fourth (alpha) channel is accepted but ignored by the
/// downsampler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelTensor {
    data: Vec<u8>,
    width: usize,
    height: usize,
    channels: usize,
}

impl PixelTensor {
    /// Wrap raw interleaved pixel data.
    ///
    /// # Errors
    /// Returns [`ConvertError::InvalidArgument`] if `channels` is not 3 or 4,
    /// or if `data.len()` does not equal `width * height * channels`.
    pub fn new(
        data: Vec<u8>,
        width: usize,
        height: usize,
        channels: usize,
    ) -> Result<Self, ConvertError> {
        if channels != 3 && channels != 4 {
            return Err(ConvertError::invalid(format!(
                "Pixel data must have 3 or 4 channels, got {}",
                channels
            )));
        }
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(channels))
            .ok_or_else(|| ConvertError::invalid("Image dimensions overflow"))?;
        if data.len() != expected {
            return Err(ConvertError::invalid(format!(
                "Pixel data has {} bytes, expected {} for {}x{}x{}",
                data.len(),
                expected,
                width,
                height,
                channels
            )));
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    /// Build an RGB tensor where every pixel has the same color.
    ///
    /// # Errors
    /// Returns [`ConvertError::InvalidArgument`] if `width * height * 3`
    /// overflows.
    pub fn filled(width: usize, height: usize, rgb: [u8; 3]) -> Result<Self, ConvertError> {
        let pixels = width
            .checked_mul(height)
            .filter(|n| n.checked_mul(3).is_some())
            .ok_or_else(|| ConvertError::invalid("Image dimensions overflow"))?;
        Ok(Self {
            data: rgb.repeat(pixels),
            width,
            height,
            channels: 3,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The interleaved bytes of row `y`.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let stride = self.width * self.channels;
        &self.data[y * stride..(y + 1) * stride]
    }

    /// RGB of the pixel at `(x, y)`. Panics if out of bounds.
    #[inline]
    pub fn rgb(&self, x: usize, y: usize) -> [u8; 3] {
        let idx = (y * self.width + x) * self.channels;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }
}
