//! Configuration file handling for asciify.
//!
//! Loads configuration from `<config dir>/asciify/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{CharSet, Ramp};
use crate::error::ConvertError;

/// Configuration file structure for asciify.
/// Loaded from `<config dir>/asciify/config.toml` (or custom path via --config).
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub ascii: AsciiConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct AsciiConfig {
    /// Preset name: classic, standard, blocks, minimal
    #[serde(default)]
    pub charset: Option<String>,
    /// Custom ramp; takes precedence over `charset`
    #[serde(default)]
    pub ramp: Option<String>,
    #[serde(default)]
    pub invert: bool,
    #[serde(default)]
    pub ratio: Option<f64>,
    /// Block width; when set the interactive prompt is skipped
    #[serde(default)]
    pub interval: Option<usize>,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }
}

impl AsciiConfig {
    /// Resolve the configured ramp, if any.
    ///
    /// A custom `ramp` wins over a `charset` preset name. `invert` is not
    /// applied here.
    pub fn resolve_ramp(&self) -> Result<Option<Ramp>, ConvertError> {
        if let Some(ramp) = &self.ramp {
            return ramp.parse::<Ramp>().map(Some);
        }
        match &self.charset {
            Some(name) => CharSet::from_name(name)
                .map(|set| Some(Ramp::from(set)))
                .ok_or_else(|| {
                    ConvertError::InvalidArgument(format!(
                        "Unknown charset '{}'. Available: classic, standard, blocks, minimal",
                        name
                    ))
                }),
            None => Ok(None),
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("asciify").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/asciify/config.toml")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            [ascii]
            charset = "blocks"
            invert = true
            ratio = 1.5
            interval = 4

            [output]
            path = "art.txt"
            "#,
        )
        .unwrap();
        assert_eq!(config.ascii.charset.as_deref(), Some("blocks"));
        assert!(config.ascii.invert);
        assert_eq!(config.ascii.ratio, Some(1.5));
        assert_eq!(config.ascii.interval, Some(4));
        assert_eq!(config.output.path, Some(PathBuf::from("art.txt")));
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_missing_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("nope.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[ascii\ninvert = maybe").unwrap();
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_resolve_ramp_prefers_custom() {
        let ascii = AsciiConfig {
            charset: Some("minimal".to_string()),
            ramp: Some("xyz".to_string()),
            ..Default::default()
        };
        let ramp = ascii.resolve_ramp().unwrap().unwrap();
        assert_eq!(ramp.as_chars(), &['x', 'y', 'z']);
    }

    #[test]
    fn test_resolve_ramp_from_charset() {
        let ascii = AsciiConfig {
            charset: Some("minimal".to_string()),
            ..Default::default()
        };
        let ramp = ascii.resolve_ramp().unwrap().unwrap();
        assert_eq!(ramp, Ramp::from(CharSet::Minimal));
    }

    #[test]
    fn test_resolve_ramp_unknown_charset() {
        let ascii = AsciiConfig {
            charset: Some("braille".to_string()),
            ..Default::default()
        };
        assert!(ascii.resolve_ramp().is_err());
    }

    #[test]
    fn test_resolve_ramp_none() {
        assert_eq!(AsciiConfig::default().resolve_ramp().unwrap(), None);
    }

    #[test]
    fn test_default_path_ends_with_config_toml() {
        let path = default_path();
        assert!(path.ends_with("asciify/config.toml"));
    }
}
