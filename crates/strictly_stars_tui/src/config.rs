//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use strictly_stars::NumberStatus;
use tracing::{debug, info, instrument};

/// Configuration for the terminal game.
///
/// Every field has a default, so an empty file (or none at all) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct StarsConfig {
    /// File the game logs to while the terminal UI is up.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Default `tracing` filter; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Fixed seed for target generation (random when absent).
    #[serde(default)]
    seed: Option<u64>,

    /// Colours per number status.
    #[serde(default)]
    theme: Theme,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_stars.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for StarsConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            seed: None,
            theme: Theme::default(),
        }
    }
}

impl StarsConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.theme.palette()?;
        info!(seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("No config file, using defaults");
            Ok(Self::default())
        }
    }
}

/// Colour names per number status, as written in the config file.
///
/// Accepts anything [`ratatui::style::Color`] parses: names such as
/// `lightgreen`, indexed colours, or `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Theme {
    /// Numbers still in play.
    #[serde(default = "default_available")]
    available: String,
    /// Numbers already matched.
    #[serde(default = "default_used")]
    used: String,
    /// Selected numbers that overshoot the target.
    #[serde(default = "default_wrong")]
    wrong: String,
    /// Selected numbers within the target.
    #[serde(default = "default_candidate")]
    candidate: String,
}

fn default_available() -> String {
    "#d3d3d3".to_string()
}

fn default_used() -> String {
    "#90ee90".to_string()
}

fn default_wrong() -> String {
    "#f08080".to_string()
}

fn default_candidate() -> String {
    "#00bfff".to_string()
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            available: default_available(),
            used: default_used(),
            wrong: default_wrong(),
            candidate: default_candidate(),
        }
    }
}

impl Theme {
    /// Parses every colour name.
    #[instrument(skip(self))]
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            available: parse_color("available", &self.available)?,
            used: parse_color("used", &self.used)?,
            wrong: parse_color("wrong", &self.wrong)?,
            candidate: parse_color("candidate", &self.candidate)?,
        })
    }
}

#[track_caller]
fn parse_color(slot: &str, name: &str) -> Result<Color, ConfigError> {
    match Color::from_str(name) {
        Ok(color) => Ok(color),
        Err(_) => Err(ConfigError::new(format!(
            "Invalid {} colour: {:?}",
            slot, name
        ))),
    }
}

/// Parsed theme colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    available: Color,
    used: Color,
    wrong: Color,
    candidate: Color,
}

impl Palette {
    /// Returns the colour for a status.
    pub fn color(&self, status: NumberStatus) -> Color {
        match status {
            NumberStatus::Available => self.available,
            NumberStatus::Used => self.used,
            NumberStatus::Wrong => self.wrong,
            NumberStatus::Candidate => self.candidate,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: StarsConfig = toml::from_str("").unwrap();
        assert_eq!(config, StarsConfig::default());
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_default_palette_parses() {
        let palette = Theme::default().palette().unwrap();
        assert_eq!(
            palette.color(NumberStatus::Candidate),
            Color::Rgb(0x00, 0xbf, 0xff)
        );
    }

    #[test]
    fn test_partial_theme_keeps_other_defaults() {
        let config: StarsConfig = toml::from_str("[theme]\nwrong = \"red\"\n").unwrap();
        let palette = config.theme().palette().unwrap();
        assert_eq!(palette.color(NumberStatus::Wrong), Color::Red);
        assert_eq!(config.theme().used(), &default_used());
    }

    #[test]
    fn test_setters_override() {
        let config = StarsConfig::default().with_seed(Some(12));
        assert_eq!(config.seed(), &Some(12));
    }

    #[test]
    fn test_bad_colour_is_rejected() {
        let theme = Theme {
            used: "not-a-colour".to_string(),
            ..Theme::default()
        };
        let err = theme.palette().unwrap_err();
        assert!(err.message.contains("used"));
    }

    #[test]
    fn test_colour_error_points_at_caller() {
        let (err, line) = (parse_color("wrong", "blurple").unwrap_err(), line!());
        assert_eq!(err.line, line);
        assert!(err.file.ends_with("config.rs"));
    }
}
