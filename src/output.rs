//! Writing rendered ASCII grids.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::ascii::AsciiGrid;
use crate::error::ConvertError;

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "output.txt";

/// Where the rendered text goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `-` selects stdout; anything else is a file path.
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(arg.to_path_buf())
        }
    }

    fn display_path(&self) -> PathBuf {
        match self {
            OutputTarget::Stdout => PathBuf::from("<stdout>"),
            OutputTarget::File(path) => path.clone(),
        }
    }
}

impl Default for OutputTarget {
    fn default() -> Self {
        OutputTarget::File(PathBuf::from(DEFAULT_OUTPUT_PATH))
    }
}

/// Write a grid as newline-terminated rows.
///
/// The full text is rendered before anything is written. Files are written
/// to a temporary sibling and renamed into place, so a failed write leaves
/// any previous file untouched.
pub fn write_grid(grid: &AsciiGrid, target: &OutputTarget) -> Result<(), ConvertError> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write_grid_to(grid, target, &mut lock)
}

/// Same as [`write_grid`], with [`OutputTarget::Stdout`] going to `stdout`.
pub fn write_grid_to<W: Write>(
    grid: &AsciiGrid,
    target: &OutputTarget,
    stdout: &mut W,
) -> Result<(), ConvertError> {
    let text = grid.to_text();
    let io_err = |source| ConvertError::Io {
        path: target.display_path(),
        source,
    };

    match target {
        OutputTarget::Stdout => {
            stdout.write_all(text.as_bytes()).map_err(io_err)?;
            stdout.flush().map_err(io_err)?;
        }
        OutputTarget::File(path) => {
            replace_file(path, text.as_bytes()).map_err(io_err)?;
        }
    }

    log::info!(
        "Wrote {}x{} grid to {}",
        grid.cols(),
        grid.rows(),
        target.display_path().display()
    );
    Ok(())
}

fn replace_file(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
