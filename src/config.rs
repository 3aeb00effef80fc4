// src/config.rs

//! Defines the configuration structures for `colorpack`.
//!
//! The configuration is read from a JSON file and describes the color scheme
//! to pack along with the output pixel layout. Every field has a default, so
//! an empty object (or no file at all) yields a usable configuration.
//!
//! Colors are written as hex strings (`"RRGGBB"` or `"RRGGBBAA"`). A single
//! leading `#` is tolerated here and stripped before the string reaches the
//! codec, which itself only accepts bare hex digits.

use anyhow::Context;
use log::{debug, warn};
use once_cell::sync::Lazy;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::color::{Color, ColorParseError};
use crate::pixel::PixelFormat;

/// Environment variable naming the configuration file used by [`CONFIG`].
pub const CONFIG_ENV_VAR: &str = "COLORPACK_CONFIG";

/// Process-wide configuration, loaded on first access.
pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    let path = std::env::var_os(CONFIG_ENV_VAR);
    Config::load_or_default(path.as_deref().map(Path::new))
});

// --- Top-Level Configuration Structure ---

/// Represents the complete configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)] // Missing fields fall back to their defaults.
pub struct Config {
    /// Colors to pack.
    pub colors: ColorScheme,
    /// Byte order of packed output.
    pub pixel_format: PixelFormat,
    /// If true, colors are premultiplied by their alpha before packing.
    pub premultiply: bool,
}

impl Config {
    /// Parses a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> anyhow::Result<Config> {
        serde_json::from_str(json).context("Failed to parse configuration JSON")
    }

    /// Reads and parses the configuration file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Config::from_json_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Loads the configuration at `path`, falling back to defaults when no
    /// path is given or loading fails.
    pub fn load_or_default(path: Option<&Path>) -> Config {
        match path {
            Some(path) => Config::load(path).unwrap_or_else(|e| {
                warn!("{:#}. Using default configuration.", e);
                Config::default()
            }),
            None => {
                debug!("No config file given, using default configuration.");
                Config::default()
            }
        }
    }
}

// --- Color Scheme Configuration ---

/// The set of colors packed by default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    /// Fill behind everything else.
    pub background: Color,
    /// Frame around the bar.
    pub border: Color,
    /// Foreground bar.
    pub bar: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            background: Color::BLACK,
            border: Color::WHITE,
            bar: Color::WHITE,
        }
    }
}

impl ColorScheme {
    /// Returns every scheme entry packed in `format`, premultiplied first
    /// when `premultiply` is set.
    pub fn packed(&self, format: PixelFormat, premultiply: bool) -> [(&'static str, u32); 3] {
        let pack = |color: Color| {
            let color = if premultiply {
                color.premultiply_alpha()
            } else {
                color
            };
            format.pack(color)
        };
        [
            ("background", pack(self.background)),
            ("border", pack(self.border)),
            ("bar", pack(self.bar)),
        ]
    }
}

// --- Serde support for colors ---

/// Parses a user-supplied color setting, allowing one leading `#`.
pub fn parse_color_setting(value: &str) -> Result<Color, ColorParseError> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    hex.parse()
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        parse_color_setting(&value)
            .map_err(|e| de::Error::custom(format!("color {:?}: {}", value, e)))
    }
}
