//! asciify library crate.
//!
//! Converts raster images to ASCII art by averaging pixel blocks and mapping
//! their luminance onto a character ramp.
//!
//! ```
//! use asciify::convert::{convert, ConvertOptions};
//! use asciify::tensor::PixelTensor;
//!
//! let tensor = PixelTensor::filled(8, 8, [0, 0, 0]).unwrap();
//! let grid = convert(&tensor, &ConvertOptions::new(4)).unwrap();
//! assert_eq!(grid.to_text(), "@@\n");
//! ```

pub mod ascii;
pub mod config;
pub mod convert;
pub mod error;
pub mod loader;
pub mod output;
pub mod tensor;

pub use error::ConvertError;
