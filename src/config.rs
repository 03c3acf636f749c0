use crate::consts;
use serde::Deserialize;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// The wall-clock pacing of the cycle loop
    pub(crate) timing: TimingConfig,

    /// How the occupancy grid is drawn
    pub(crate) display: DisplayConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not
    /// exist and `allow_missing` is true, a default `Config` value is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's
    /// contents could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct TimingConfig {
    /// Rate of the clock driving the controller, in cycles per second.
    /// The in-core tick divisor is fixed, so raising this speeds up the
    /// whole game rather than just the display.
    pub(crate) cycles_per_second: NonZeroU32,
}

impl Default for TimingConfig {
    fn default() -> TimingConfig {
        TimingConfig {
            cycles_per_second: NonZeroU32::new(consts::CYCLES_PER_SECOND)
                .expect("nominal cycle rate should be non-zero"),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct DisplayConfig {
    /// Style for occupied grid cells
    pub(crate) cell: parse_style::Style,
}

impl Default for DisplayConfig {
    fn default() -> DisplayConfig {
        DisplayConfig {
            cell: consts::DEFAULT_CELL_STYLE
                .parse()
                .expect("default cell style should parse"),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn load_missing_allowed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config::load(&path, true).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_missing_denied() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let e = Config::load(&path, false).unwrap_err();
        assert!(matches!(e, ConfigError::Read(_)));
    }

    #[test]
    fn load_custom() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs_err::write(
            &path,
            concat!(
                "[timing]\n",
                "cycles-per-second = 120\n",
                "\n",
                "[display]\n",
                "cell = \"bold blue\"\n",
            ),
        )
        .unwrap();
        let config = Config::load(&path, true).unwrap();
        assert_eq!(
            config.timing.cycles_per_second,
            NonZeroU32::new(120).unwrap()
        );
        assert_eq!(config.display.cell, "bold blue".parse().unwrap());
    }

    #[test]
    fn load_partial() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs_err::write(&path, "[timing]\ncycles-per-second = 30\n").unwrap();
        let config = Config::load(&path, true).unwrap();
        assert_eq!(
            config.timing.cycles_per_second,
            NonZeroU32::new(30).unwrap()
        );
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn load_invalid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs_err::write(&path, "[timing]\ncycles-per-second = \"fast\"\n").unwrap();
        let e = Config::load(&path, true).unwrap_err();
        assert!(matches!(e, ConfigError::Parse(_)));
    }
}
