//! Image file validation and decoding.
//!
//! Only JPEG and PNG files are accepted. Checks run in the order the CLI
//! needs them: extension first, then existence, then decoding.

use std::path::Path;

use image::{ImageFormat, ImageReader};

use crate::error::ConvertError;
use crate::tensor::PixelTensor;

/// File extensions accepted by [`load_image`], including the leading dot.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[".jpg", ".png", ".jpeg"];

/// The supported suffix the file name ends with, lowercased.
fn matched_extension(path: &Path) -> Option<&'static str> {
    let name = path.file_name()?.to_str()?.to_ascii_lowercase();
    SUPPORTED_EXTENSIONS
        .iter()
        .copied()
        .find(|ext| name.ends_with(ext))
}

/// Check whether a file name ends in one of [`SUPPORTED_EXTENSIONS`].
/// The comparison ignores ASCII case, and a bare dotfile such as `.png`
/// counts.
pub fn is_supported(path: &Path) -> bool {
    matched_extension(path).is_some()
}

/// Reject paths without a supported image extension.
///
/// # Errors
/// Returns [`ConvertError::InvalidArgument`] listing the supported types.
pub fn check_extension(path: &Path) -> Result<(), ConvertError> {
    if is_supported(path) {
        Ok(())
    } else {
        Err(ConvertError::invalid(format!(
            "Only the following filetypes are supported: {}.",
            SUPPORTED_EXTENSIONS.join(", ")
        )))
    }
}

/// Fail with [`ConvertError::FileNotFound`] if `path` is not an existing file.
pub fn ensure_exists(path: &Path) -> Result<(), ConvertError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ConvertError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Load a JPEG or PNG file into an RGB [`PixelTensor`].
///
/// The format is determined from the extension; content that does not match
/// it fails to decode. Alpha is discarded.
///
/// # Errors
/// * [`ConvertError::InvalidArgument`] for unsupported extensions
/// * [`ConvertError::FileNotFound`] if the file does not exist
/// * [`ConvertError::Decode`] if the contents cannot be decoded
pub fn load_image(path: &Path) -> Result<PixelTensor, ConvertError> {
    check_extension(path)?;
    ensure_exists(path)?;

    let format = matched_extension(path)
        .and_then(|ext| ImageFormat::from_extension(&ext[1..]))
        .ok_or_else(|| ConvertError::invalid("Unrecognised image extension."))?;

    let mut reader = ImageReader::open(path).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    reader.set_format(format);
    let img = reader.decode().map_err(|source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();

    log::info!("Loaded {} ({}x{})", path.display(), width, height);

    PixelTensor::new(rgb.into_raw(), width as usize, height as usize, 3)
}
