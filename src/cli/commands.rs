//! The conversion command run by the binary.

use std::io::{BufRead, Write};

use asciify::ascii::{CharSet, Ramp, DEFAULT_CHAR_ASPECT_RATIO, NO_ASPECT_CORRECTION};
use asciify::config::Config;
use asciify::convert::{convert, ConvertOptions};
use asciify::loader;
use asciify::output::{write_grid_to, OutputTarget};
use asciify::ConvertError;

use super::args::Args;
use super::prompt::prompt_interval;

/// Run a conversion on the process's standard streams.
pub fn run(args: &Args, config: &Config) -> Result<(), ConvertError> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    run_with_io(args, config, &mut input, &mut stdout, &mut stderr)
}

/// Run a conversion, prompting for the interval on the given streams.
///
/// Checks run in this order: file extension, file existence, interval,
/// decoding. Nothing is written unless the whole grid was produced. The
/// prompt goes to `stdout`, or to `stderr` when the grid itself is
/// printed to `stdout`.
pub fn run_with_io<R: BufRead, W: Write, E: Write>(
    args: &Args,
    config: &Config,
    input: &mut R,
    stdout: &mut W,
    stderr: &mut E,
) -> Result<(), ConvertError> {
    loader::check_extension(&args.image)?;
    loader::ensure_exists(&args.image)?;

    let target = args
        .output
        .as_deref()
        .or(config.output.path.as_deref())
        .map(OutputTarget::from_arg)
        .unwrap_or_default();

    let interval = match args.interval.or(config.ascii.interval) {
        Some(0) => {
            return Err(ConvertError::InvalidArgument(
                "Interval must be at least 1.".to_string(),
            ))
        }
        Some(interval) => interval,
        None if target == OutputTarget::Stdout => prompt_interval(input, stderr)?,
        None => prompt_interval(input, stdout)?,
    };

    let options = resolve_options(args, config, interval)?;
    log::debug!(
        "Converting {} with interval {}, ratio {}, ramp {:?}",
        args.image.display(),
        options.interval,
        options.ratio,
        options.ramp.to_string()
    );

    let tensor = loader::load_image(&args.image)?;
    let grid = convert(&tensor, &options)?;
    write_grid_to(&grid, &target, stdout)
}

/// Merge CLI flags over config values over built-in defaults.
pub fn resolve_options(
    args: &Args,
    config: &Config,
    interval: usize,
) -> Result<ConvertOptions, ConvertError> {
    let ratio = if args.no_aspect {
        NO_ASPECT_CORRECTION
    } else {
        args.ratio
            .or(config.ascii.ratio)
            .unwrap_or(DEFAULT_CHAR_ASPECT_RATIO)
    };

    let ramp = if let Some(custom) = &args.ramp {
        custom.parse::<Ramp>()?
    } else if let Some(set) = args.charset {
        Ramp::from(CharSet::from(set))
    } else {
        config.ascii.resolve_ramp()?.unwrap_or_default()
    };
    let ramp = if args.invert || config.ascii.invert {
        ramp.reversed()
    } else {
        ramp
    };

    Ok(ConvertOptions::new(interval).with_ratio(ratio).with_ramp(ramp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::enums::CharacterSet;
    use asciify::ascii::{MINIMAL_CHARSET, STANDARD_CHARSET};
    use clap::Parser;
    use std::io::Cursor;
    use std::path::{Path, PathBuf};

    fn write_png(path: &Path, width: u32, height: u32, rgb: [u8; 3]) {
        image::RgbImage::from_pixel(width, height, image::Rgb(rgb))
            .save(path)
            .unwrap();
    }

    fn args_for(image: &Path, output: &Path, extra: &[&str]) -> Args {
        let mut argv = vec![
            "asciify".to_string(),
            image.display().to_string(),
            "-o".to_string(),
            output.display().to_string(),
        ];
        argv.extend(extra.iter().map(|s| s.to_string()));
        Args::parse_from(argv)
    }

    #[test]
    fn test_resolve_defaults() {
        let args = Args::parse_from(["asciify", "a.png"]);
        let opts = resolve_options(&args, &Config::default(), 3).unwrap();
        assert_eq!(opts.interval, 3);
        assert_eq!(opts.ratio, DEFAULT_CHAR_ASPECT_RATIO);
        assert_eq!(opts.ramp, Ramp::default());
    }

    #[test]
    fn test_resolve_no_aspect_beats_config_ratio() {
        let args = Args::parse_from(["asciify", "a.png", "--no-aspect"]);
        let mut config = Config::default();
        config.ascii.ratio = Some(3.0);
        let opts = resolve_options(&args, &config, 1).unwrap();
        assert_eq!(opts.ratio, NO_ASPECT_CORRECTION);
    }

    #[test]
    fn test_resolve_config_ratio_used_without_flag() {
        let args = Args::parse_from(["asciify", "a.png"]);
        let mut config = Config::default();
        config.ascii.ratio = Some(1.5);
        let opts = resolve_options(&args, &config, 1).unwrap();
        assert_eq!(opts.ratio, 1.5);
    }

    #[test]
    fn test_resolve_cli_charset_beats_config_ramp() {
        let mut args = Args::parse_from(["asciify", "a.png"]);
        args.charset = Some(CharacterSet::Standard);
        let mut config = Config::default();
        config.ascii.ramp = Some("xy".to_string());
        let opts = resolve_options(&args, &config, 1).unwrap();
        assert_eq!(opts.ramp.as_chars(), STANDARD_CHARSET);
    }

    #[test]
    fn test_resolve_invert_from_config() {
        let args = Args::parse_from(["asciify", "a.png", "--charset", "minimal"]);
        let mut config = Config::default();
        config.ascii.invert = true;
        let opts = resolve_options(&args, &config, 1).unwrap();
        let expected: Vec<char> = MINIMAL_CHARSET.iter().rev().copied().collect();
        assert_eq!(opts.ramp.as_chars(), expected.as_slice());
    }

    #[test]
    fn test_resolve_empty_custom_ramp_rejected() {
        let args = Args::parse_from(["asciify", "a.png", "--ramp", ""]);
        let err = resolve_options(&args, &Config::default(), 1).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidArgument(_)));
    }

    #[test]
    fn test_run_prompts_and_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("white.png");
        let out = dir.path().join("out.txt");
        write_png(&image, 4, 8, [255, 255, 255]);

        let args = args_for(&image, &out, &[]);
        let mut input = Cursor::new("2\n");
        let mut prompt = Vec::new();
        run_with_io(
            &args,
            &Config::default(),
            &mut input,
            &mut prompt,
            &mut std::io::sink(),
        )
        .unwrap();

        assert_eq!(String::from_utf8(prompt).unwrap(), "Interval: ");
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "  \n  \n");
    }

    #[test]
    fn test_run_to_stdout_prompts_on_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("white.png");
        write_png(&image, 4, 4, [255, 255, 255]);

        let args = args_for(&image, Path::new("-"), &[]);
        let mut input = Cursor::new("2\n");
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        run_with_io(
            &args,
            &Config::default(),
            &mut input,
            &mut stdout,
            &mut stderr,
        )
        .unwrap();

        assert_eq!(String::from_utf8(stdout).unwrap(), "  \n");
        assert_eq!(String::from_utf8(stderr).unwrap(), "Interval: ");
    }

    #[test]
    fn test_run_uses_interval_flag_without_prompting() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("black.png");
        let out = dir.path().join("out.txt");
        write_png(&image, 4, 4, [0, 0, 0]);

        let args = args_for(&image, &out, &["-i", "1", "--no-aspect"]);
        let mut input = Cursor::new("");
        let mut prompt = Vec::new();
        run_with_io(
            &args,
            &Config::default(),
            &mut input,
            &mut prompt,
            &mut std::io::sink(),
        )
        .unwrap();

        assert!(prompt.is_empty());
        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "@@@@\n@@@@\n@@@@\n@@@@\n"
        );
    }

    #[test]
    fn test_run_rejects_bad_extension_before_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");
        let args = args_for(&PathBuf::from("picture.gif"), &out, &[]);
        let mut input = Cursor::new("2\n");
        let mut prompt = Vec::new();
        let err = run_with_io(
            &args,
            &Config::default(),
            &mut input,
            &mut prompt,
            &mut std::io::sink(),
        )
        .unwrap_err();

        assert!(matches!(err, ConvertError::InvalidArgument(_)));
        assert!(prompt.is_empty());
        assert!(!out.exists());
    }

    #[test]
    fn test_run_reports_missing_file_before_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("missing.jpg");
        let out = dir.path().join("out.txt");
        let args = args_for(&image, &out, &[]);
        let mut input = Cursor::new("2\n");
        let mut prompt = Vec::new();
        let err = run_with_io(
            &args,
            &Config::default(),
            &mut input,
            &mut prompt,
            &mut std::io::sink(),
        )
        .unwrap_err();

        assert!(matches!(err, ConvertError::FileNotFound { .. }));
        assert!(prompt.is_empty());
    }

    #[test]
    fn test_run_invalid_interval_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("img.png");
        let out = dir.path().join("out.txt");
        write_png(&image, 4, 4, [0, 0, 0]);

        let args = args_for(&image, &out, &[]);
        let mut input = Cursor::new("0\n");
        let mut prompt = Vec::new();
        let err = run_with_io(
            &args,
            &Config::default(),
            &mut input,
            &mut prompt,
            &mut std::io::sink(),
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "Interval must be at least 1.");
        assert!(!out.exists());
    }

    #[test]
    fn test_run_config_interval_zero_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("img.png");
        let out = dir.path().join("out.txt");
        write_png(&image, 4, 4, [0, 0, 0]);

        let args = args_for(&image, &out, &[]);
        let mut config = Config::default();
        config.ascii.interval = Some(0);
        let mut input = Cursor::new("");
        let mut prompt = Vec::new();
        let err = run_with_io(
            &args,
            &config,
            &mut input,
            &mut prompt,
            &mut std::io::sink(),
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::InvalidArgument(_)));
    }

    #[test]
    fn test_run_image_smaller_than_block() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("tiny.png");
        let out = dir.path().join("out.txt");
        write_png(&image, 2, 2, [0, 0, 0]);

        let args = args_for(&image, &out, &["-i", "3"]);
        let mut input = Cursor::new("");
        let mut prompt = Vec::new();
        let err = run_with_io(
            &args,
            &Config::default(),
            &mut input,
            &mut prompt,
            &mut std::io::sink(),
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::EmptyResult { .. }));
        assert!(!out.exists());
    }
}
