//src/config.rs
use comfy_table::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

use crate::sets::{SetBounds, DEFAULT_MAX_SETS, DEFAULT_MIN_SETS};

const CONFIG_FILE_NAME: &str = "config.toml";
const APP_CONFIG_DIR: &str = "krakenballs";
const CONFIG_ENV_VAR: &str = "KRAKENBALLS_CONFIG_DIR"; // Environment variable name

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not determine configuration directory.")]
    CannotDetermineConfigDir,
    #[error("I/O error accessing config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file (TOML): {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Failed to serialize config data (TOML): {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("Invalid color name: {0}")]
    InvalidColor(String),
    #[error("Invalid set bounds: need 1 <= min ({min}) <= max ({max}).")]
    InvalidSetBounds { min: usize, max: usize },
}

// Define standard colors using strum for easy iteration/parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum StandardColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    DarkGrey,
    Grey,
}

impl From<StandardColor> for Color {
    fn from(value: StandardColor) -> Self {
        match value {
            StandardColor::Black => Self::Black,
            StandardColor::Red => Self::Red,
            StandardColor::Green => Self::Green,
            StandardColor::Yellow => Self::Yellow,
            StandardColor::Blue => Self::Blue,
            StandardColor::Magenta => Self::Magenta,
            StandardColor::Cyan => Self::Cyan,
            StandardColor::White => Self::White,
            StandardColor::DarkGrey => Self::DarkGrey,
            StandardColor::Grey => Self::Grey,
        }
    }
}

pub fn parse_color(color_str: &str) -> Result<StandardColor, Error> {
    StandardColor::iter()
        .find(|color| format!("{color:?}").eq_ignore_ascii_case(color_str.trim()))
        .ok_or_else(|| Error::InvalidColor(color_str.to_string()))
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)] // Ensure defaults are used if fields are missing
pub struct Config {
    /// Fewest sets a placement can be trimmed down to.
    pub min_sets: usize,
    /// Most sets a placement can grow to.
    pub max_sets: usize,
    /// Seed a starter exercise catalog on first run.
    pub auto_seed: bool,
    /// Table header color used by the CLI.
    pub header_color: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_sets: DEFAULT_MIN_SETS,
            max_sets: DEFAULT_MAX_SETS,
            auto_seed: true,
            header_color: "Green".to_string(),
        }
    }
}

impl Config {
    /// Set bounds, falling back to the defaults unless `1 <= min_sets <= max_sets`.
    #[must_use]
    pub fn set_bounds(&self) -> SetBounds {
        validate_set_bounds(self.min_sets, self.max_sets).unwrap_or_default()
    }

    /// Header color, falling back to green when the configured name is unknown.
    #[must_use]
    pub fn header_color(&self) -> Color {
        parse_color(&self.header_color)
            .unwrap_or(StandardColor::Green)
            .into()
    }
}

pub fn validate_set_bounds(min: usize, max: usize) -> Result<SetBounds, Error> {
    if min == 0 || min > max {
        return Err(Error::InvalidSetBounds { min, max });
    }
    Ok(SetBounds {
        min_sets: min,
        max_sets: max,
    })
}

/// Determines the path to the configuration file.
/// `KRAKENBALLS_CONFIG_DIR` overrides the platform config directory.
pub fn get_config_path() -> Result<PathBuf, Error> {
    let config_dir_override = std::env::var(CONFIG_ENV_VAR).ok();

    let config_dir_path = if let Some(path_str) = config_dir_override {
        let path = PathBuf::from(path_str);
        if !path.is_dir() {
            tracing::warn!(
                "{} points to '{}', which is not a directory. Trying to create it.",
                CONFIG_ENV_VAR,
                path.display()
            );
            fs::create_dir_all(&path)?;
        }
        path
    } else {
        let base_config_dir = dirs::config_dir().ok_or(Error::CannotDetermineConfigDir)?;
        base_config_dir.join(APP_CONFIG_DIR)
    };

    if !config_dir_path.exists() {
        fs::create_dir_all(&config_dir_path)?;
    }

    Ok(config_dir_path.join(CONFIG_FILE_NAME))
}

/// Loads the configuration, writing the defaults out on first run.
pub fn load(config_path: &Path) -> Result<Config, Error> {
    if config_path.exists() {
        let config_content = fs::read_to_string(config_path)?;
        let mut config: Config = toml::from_str(&config_content).map_err(Error::TomlParse)?;
        if let Err(e) = validate_set_bounds(config.min_sets, config.max_sets) {
            tracing::warn!(
                "Ignoring set bounds in '{}': {e} Using {DEFAULT_MIN_SETS}-{DEFAULT_MAX_SETS}.",
                config_path.display()
            );
            config.min_sets = DEFAULT_MIN_SETS;
            config.max_sets = DEFAULT_MAX_SETS;
        }
        Ok(config)
    } else {
        let default_config = Config::default();
        save(config_path, &default_config)?;
        Ok(default_config)
    }
}

pub fn save(config_path: &Path, config: &Config) -> Result<(), Error> {
    if let Some(parent_dir) = config_path.parent() {
        if !parent_dir.exists() {
            fs::create_dir_all(parent_dir)?;
        }
    }
    let config_content = toml::to_string_pretty(config).map_err(Error::TomlSerialize)?;
    fs::write(config_path, config_content)?;
    Ok(())
}
