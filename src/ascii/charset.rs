//! Character ramps for ASCII rendering.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::error::ConvertError;

/// Classic 13-level ramp.
/// Ordered from densest glyph (@) to blank, which reads dark-to-light when
/// the text is viewed as dark ink on a light background.
pub const CLASSIC_CHARSET: &[char] = &[
    '@', '$', '#', '*', '!', '=', ';', ':', '~', '-', ',', '.', ' ',
];

/// Standard ASCII density ramp (10 levels).
/// Characters ordered from blank to densest (@).
/// Works well on dark terminals.
pub const STANDARD_CHARSET: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Block character set (5 levels) using Unicode shade characters.
pub const BLOCKS_CHARSET: &[char] = &[' ', '░', '▒', '▓', '█'];

/// Minimal character set (4 levels).
pub const MINIMAL_CHARSET: &[char] = &[' ', '.', ':', '#'];

/// Built-in ramp presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Classic 13-level ramp, densest glyph first
    #[default]
    Classic,
    /// Standard 10-level ramp, blank first
    Standard,
    /// Unicode shade blocks
    Blocks,
    /// 4-level ramp
    Minimal,
}

impl CharSet {
    /// Get the character slice for this preset.
    pub fn chars(&self) -> &'static [char] {
        match self {
            CharSet::Classic => CLASSIC_CHARSET,
            CharSet::Standard => STANDARD_CHARSET,
            CharSet::Blocks => BLOCKS_CHARSET,
            CharSet::Minimal => MINIMAL_CHARSET,
        }
    }

    /// Get a human-readable name for the preset.
    pub fn name(&self) -> &'static str {
        match self {
            CharSet::Classic => "classic",
            CharSet::Standard => "standard",
            CharSet::Blocks => "blocks",
            CharSet::Minimal => "minimal",
        }
    }

    /// Look a preset up by name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "classic" => Some(CharSet::Classic),
            "standard" => Some(CharSet::Standard),
            "blocks" => Some(CharSet::Blocks),
            "minimal" => Some(CharSet::Minimal),
            _ => None,
        }
    }
}

/// An ordered, non-empty brightness-to-glyph lookup table.
///
/// Index 0 is used for the lowest luminance and the last glyph for the
/// highest. The glyphs should be ordered monotonically in perceived density
/// for the output to look consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ramp {
    chars: Vec<char>,
}

impl Ramp {
    /// Build a ramp from an ordered glyph sequence.
    ///
    /// # Errors
    /// Returns [`ConvertError::InvalidArgument`] if `chars` is empty.
    pub fn new(chars: impl Into<Vec<char>>) -> Result<Self, ConvertError> {
        let chars = chars.into();
        if chars.is_empty() {
            return Err(ConvertError::invalid("Character ramp must not be empty"));
        }
        Ok(Self { chars })
    }

    /// The same glyphs in reverse order.
    pub fn reversed(&self) -> Self {
        Self {
            chars: self.chars.iter().rev().copied().collect(),
        }
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }
}

impl Default for Ramp {
    fn default() -> Self {
        Ramp::from(CharSet::default())
    }
}

impl From<CharSet> for Ramp {
    fn from(set: CharSet) -> Self {
        Self {
            chars: set.chars().to_vec(),
        }
    }
}

impl FromStr for Ramp {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ramp::new(s.chars().collect::<Vec<_>>())
    }
}

impl Deref for Ramp {
    type Target = [char];

    fn deref(&self) -> &[char] {
        &self.chars
    }
}

impl fmt::Display for Ramp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.chars {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}
