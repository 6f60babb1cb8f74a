//! Interactive block-size prompt.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use asciify::ConvertError;

/// Parse and validate an interval (block width, at least 1).
pub fn parse_interval(s: &str) -> Result<usize, String> {
    let s = s.trim();
    let interval: i64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid interval", s))?;
    if interval < 1 {
        return Err("Interval must be at least 1.".to_string());
    }
    usize::try_from(interval).map_err(|_| format!("Interval {} is too large", interval))
}

/// Ask for the interval on `output` and read one line from `input`.
///
/// # Errors
/// Returns [`ConvertError::InvalidArgument`] for non-numeric, non-positive,
/// or missing input, and [`ConvertError::Io`] if the streams fail.
pub fn prompt_interval<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<usize, ConvertError> {
    let io_err = |source| ConvertError::Io {
        path: PathBuf::from("<stdin>"),
        source,
    };

    write!(output, "Interval: ").map_err(io_err)?;
    output.flush().map_err(io_err)?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(io_err)?;
    if read == 0 {
        return Err(ConvertError::InvalidArgument(
            "No interval given.".to_string(),
        ));
    }

    parse_interval(&line).map_err(ConvertError::InvalidArgument)
}
