//! User configuration loaded from `config.toml`.

use crate::bumpy::BumpySettings;
use crate::constants;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Failure while reading or parsing the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid configuration in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Tracing filter used when neither `RUST_LOG` nor `--verbose` is given.
    pub log_level: Option<String>,
    /// Explicit bumpy executable instead of a `PATH` lookup.
    pub tool_path: Option<PathBuf>,
    /// Directory bumpy is started in.
    pub working_directory: Option<PathBuf>,
    /// Option defaults that command-line flags override.
    pub defaults: DefaultOptions,
}

/// The `[defaults]` table.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultOptions {
    pub directory: Option<PathBuf>,
    pub configuration: Option<PathBuf>,
    pub profile: Option<String>,
    pub no_operation: bool,
}

impl From<DefaultOptions> for BumpySettings {
    fn from(defaults: DefaultOptions) -> Self {
        Self {
            directory: defaults.directory,
            configuration: defaults.configuration,
            profile: defaults.profile,
            no_operation: defaults.no_operation,
        }
    }
}

/// Where the configuration came from, for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from this file.
    File(PathBuf),
    /// No file found; built-in defaults.
    Defaults,
}

/// Default location: `<config dir>/bumpy-runner/config.toml`.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| {
        dir.join(constants::CONFIG_DIR_NAME)
            .join(constants::CONFIG_FILE_NAME)
    })
}

/// Loads the configuration.
///
/// An explicit path must exist. Without one, the default location is used if
/// the file is there, and built-in defaults otherwise.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be read or is not valid TOML.
pub fn load(explicit: Option<&Path>) -> Result<(Config, ConfigSource), ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.is_file() => path,
            _ => return Ok((Config::default(), ConfigSource::Defaults)),
        },
    };

    let config = load_file(&path)?;
    Ok((config, ConfigSource::File(path)))
}

/// Reads and parses one configuration file.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be read or is not valid TOML.
pub fn load_file(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}
