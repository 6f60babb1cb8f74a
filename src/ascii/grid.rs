//! Grid types produced by the downsampler and the glyph mapper.

use std::fmt;

use super::grayscale::luminance;

/// Mean RGB color of one downsampled block.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CellColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl CellColor {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Perceptual luminance of this cell, in [0, 255].
    #[inline]
    pub fn luminance(&self) -> f64 {
        luminance(self.r, self.g, self.b)
    }
}

/// Row-major grid of averaged block colors.
#[derive(Debug, Clone, PartialEq)]
pub struct AveragedGrid {
    rows: usize,
    cols: usize,
    cells: Vec<CellColor>,
}

impl AveragedGrid {
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<CellColor>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn cells(&self) -> &[CellColor] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&CellColor> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Iterate over rows of cells, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellColor]> {
        self.cells.chunks(self.cols.max(1))
    }
}

/// Row-major grid of output glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiGrid {
    rows: usize,
    cols: usize,
    chars: Vec<char>,
}

impl AsciiGrid {
    pub(crate) fn from_chars(rows: usize, cols: usize, chars: Vec<char>) -> Self {
        debug_assert_eq!(chars.len(), rows * cols);
        Self { rows, cols, chars }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row < self.rows && col < self.cols {
            self.chars.get(row * self.cols + col).copied()
        } else {
            None
        }
    }

    /// Iterate over rows of glyphs, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[char]> {
        self.chars.chunks(self.cols.max(1))
    }

    /// Render as text, each row terminated by `'\n'`.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AsciiGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for &ch in row {
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
