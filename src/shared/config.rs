//! Application Configuration
//!
//! Loaded from `mldr.toml`. Every section and field is optional; anything
//! missing falls back to the stock resources.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::value_objects::Insets;
use crate::theme::resources::{DisplayMetrics, Resources, Typeface};
use crate::theme::types::{Color, ParseError};
use crate::widget::counter::CounterStyle;
use crate::widget::list_item::WidthPadding;

/// Config file name searched for in the standard locations
pub const CONFIG_FILE_NAME: &str = "mldr.toml";

/// Top-level configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Screen density
    #[serde(default)]
    pub display: DisplayMetrics,

    /// Attributes for the attributed counter
    #[serde(default)]
    pub counter: CounterAttributes,

    /// Composite list row appearance
    #[serde(default)]
    pub list_item: ListItemConfig,
}

/// Counter attributes; colors are hex strings
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterAttributes {
    pub background_color: Option<String>,
    pub baseline_color: Option<String>,
    pub baseline_width: Option<f32>,
    pub text_color: Option<String>,
    pub text_size: Option<f32>,
    pub corner_radius: Option<f32>,
    pub typeface: Option<Typeface>,
    pub padding: Insets,
}

impl CounterAttributes {
    /// Apply these attributes over the stock counter style
    ///
    /// The attributed counter uses HK Grotesk unless told otherwise.
    pub fn resolve(&self, resources: &Resources) -> Result<CounterStyle, ConfigError> {
        let stock = CounterStyle::from_resources(resources);
        Ok(CounterStyle {
            background_color: parse_color(&self.background_color, stock.background_color)?,
            baseline_color: parse_color(&self.baseline_color, stock.baseline_color)?,
            baseline_width: self.baseline_width.unwrap_or(stock.baseline_width),
            text_color: parse_color(&self.text_color, stock.text_color)?,
            text_size: self.text_size.unwrap_or(stock.text_size),
            corner_radius: self.corner_radius.unwrap_or(stock.corner_radius),
            typeface: self.typeface.unwrap_or(Typeface::HkGrotesk),
            padding: self.padding,
        })
    }
}

fn parse_color(value: &Option<String>, fallback: Color) -> Result<Color, ConfigError> {
    match value {
        Some(hex) => Ok(Color::from_hex(hex)?),
        None => Ok(fallback),
    }
}

/// Composite list row settings, in pixels
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListItemConfig {
    pub padding: Insets,
    pub width_padding: WidthPadding,
    pub icon_size: f32,
    pub icon_margins: Insets,
    pub title_margins: Insets,
    pub subtitle_margins: Insets,
    pub title_text_size: f32,
    pub subtitle_text_size: f32,
}

impl Default for ListItemConfig {
    fn default() -> Self {
        Self {
            padding: Insets::symmetric(8.0, 16.0),
            width_padding: WidthPadding::default(),
            icon_size: 48.0,
            icon_margins: Insets::new(0.0, 0.0, 16.0, 0.0),
            title_margins: Insets::ZERO,
            subtitle_margins: Insets::new(0.0, 4.0, 0.0, 0.0),
            title_text_size: 16.0,
            subtitle_text_size: 14.0,
        }
    }
}

impl AppConfig {
    /// Find mldr.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // Check in order: user config dir, exe dir, cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join("mldr").join(CONFIG_FILE_NAME)),
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|d| d.join(CONFIG_FILE_NAME))),
            Some(PathBuf::from(CONFIG_FILE_NAME)),
        ];

        candidates.into_iter().flatten().find(|candidate| candidate.exists())
    }

    /// Load configuration from the first file found, or defaults if none
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_path() {
            Some(path) => Self::load_from_path(&path),
            None => {
                crate::log!("No {} found, using defaults", CONFIG_FILE_NAME);
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        crate::log!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Resource table for the configured display
    pub fn resources(&self) -> Resources {
        Resources::new(self.display)
    }
}

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid color: {0}")]
    InvalidColor(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_is_default() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.display.density, 1.0);
        assert_eq!(config.list_item.icon_size, 48.0);
    }

    #[test]
    fn test_load_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            r##"
            [display]
            density = 2.0
            scaled_density = 2.0

            [counter]
            background_color = "#000"
            text_size = 48.0
            typeface = "blackout-midnight"

            [list_item]
            width_padding = "horizontal"
            padding = { left = 4.0, right = 4.0 }
            "##,
        )
        .unwrap();

        let config = AppConfig::load_from_path(&path).unwrap();
        assert_eq!(config.display.density, 2.0);
        assert_eq!(config.counter.text_size, Some(48.0));
        assert_eq!(config.list_item.width_padding, WidthPadding::Horizontal);
        assert_eq!(config.list_item.padding, Insets::new(4.0, 0.0, 4.0, 0.0));
        // Untouched fields keep their defaults
        assert_eq!(config.list_item.icon_size, 48.0);

        let style = config.counter.resolve(&config.resources()).unwrap();
        assert_eq!(style.background_color, Color::BLACK);
        assert_eq!(style.text_size, 48.0);
        assert_eq!(style.typeface, Typeface::BlackoutMidnight);
        // Stock values scale with density
        assert_eq!(style.corner_radius, 4.0);
    }

    #[test]
    fn test_attributes_default_to_hk_grotesk() {
        let style = CounterAttributes::default()
            .resolve(&Resources::default())
            .unwrap();
        assert_eq!(style.typeface, Typeface::HkGrotesk);
        assert_eq!(style.text_size, 64.0);
    }

    #[test]
    fn test_bad_color_is_reported() {
        let attrs = CounterAttributes {
            text_color: Some("#nothex".to_string()),
            ..Default::default()
        };
        let err = attrs.resolve(&Resources::default()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = AppConfig::load_from_path(&temp_dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = AppConfig::parse("[display\ndensity = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
