//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

use super::enums::CharacterSet;
use super::prompt::parse_interval;

/// Parse and validate the block aspect ratio (finite, > 0)
fn parse_ratio(s: &str) -> Result<f64, String> {
    let ratio: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(format!("Ratio must be a positive number, got {}", s));
    }
    Ok(ratio)
}

/// Convert a JPEG or PNG image to ASCII art
#[derive(Parser, Debug)]
#[command(name = "asciify")]
#[command(version, about = "Convert a JPEG or PNG image to ASCII art", long_about = None)]
#[command(arg_required_else_help = true)]
#[command(after_help = "EXAMPLES:
    # Prompt for the interval, write output.txt
    asciify photo.jpg

    # 4-pixel blocks, print to the terminal
    asciify photo.png -i 4 -o -

    # Square blocks with a light-on-dark ramp
    asciify photo.png -i 6 --no-aspect --charset standard")]
pub struct Args {
    /// Image file to convert (.jpg, .jpeg or .png)
    pub image: PathBuf,

    /// Block width in pixels (prompted for when omitted)
    #[arg(short, long, value_parser = parse_interval)]
    pub interval: Option<usize>,

    /// Block height to width ratio (default: 2.0)
    #[arg(short, long, value_parser = parse_ratio, conflicts_with = "no_aspect")]
    pub ratio: Option<f64>,

    /// Use square blocks (ratio 1.0)
    #[arg(long)]
    pub no_aspect: bool,

    /// ASCII character set
    #[arg(long)]
    pub charset: Option<CharacterSet>,

    /// Custom ramp, lowest luminance first
    #[arg(long, conflicts_with = "charset")]
    pub ramp: Option<String>,

    /// Reverse the ramp (for light-on-dark viewing)
    #[arg(long)]
    pub invert: bool,

    /// Output file, or '-' for stdout (default: output.txt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// The requested log filter, falling back to `warn` for unknown names.
    pub fn log_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Warn)
    }
}
