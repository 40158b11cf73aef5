use std::fmt;
use std::path::PathBuf;

use crate::calendar::{BlockMetrics, HourRange, WorkingHours};

/// Calendar configuration. Every section has a default, so an empty file
/// (or `Config::default()`) yields the reference UI's settings.
#[derive(Clone, Copy, Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub visible_hours: HourRange,
    pub working_hours: WorkingHours,
    pub block: BlockMetrics,
}

#[derive(Debug)]
pub enum ConfigError {
    Read(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(err) => write!(f, "could not read the configuration file: {err}"),
            Self::Parse(err) => write!(f, "could not parse the configuration file: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn init(path: PathBuf) -> Result<Config, ConfigError> {
    let string = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
    let config = toml::from_str(&string).map_err(ConfigError::Parse)?;

    Ok(config)
}
