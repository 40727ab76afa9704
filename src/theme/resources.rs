//! Named resources: palette colors, display density and font assets
//!
//! Widgets never hold a global resource table; a `Resources` value is passed
//! to whatever constructs them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::types::Color;

pub const COLOR_PRIMARY: &str = "colorPrimary";
pub const COLOR_PRIMARY_DARK: &str = "colorPrimaryDark";
pub const COLOR_ACCENT: &str = "colorAccent";
pub const COLOR_WHITE: &str = "white";

/// Screen density factors used to turn dp/sp values into pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayMetrics {
    /// Pixels per dp
    pub density: f32,
    /// Pixels per sp (density times the user's font scale)
    pub scaled_density: f32,
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self {
            density: 1.0,
            scaled_density: 1.0,
        }
    }
}

impl DisplayMetrics {
    pub fn dp(&self, value: f32) -> f32 {
        value * self.density
    }

    pub fn sp(&self, value: f32) -> f32 {
        value * self.scaled_density
    }
}

/// Bundled font assets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Typeface {
    /// Platform default sans-serif
    #[default]
    Default,
    BlackoutTwoAm,
    BlackoutMidnight,
    HkGrotesk,
}

impl Typeface {
    /// Asset file name, or None for the platform default
    pub fn file_name(&self) -> Option<&'static str> {
        match self {
            Typeface::Default => None,
            Typeface::BlackoutTwoAm => Some("BlackoutTwoAM.ttf"),
            Typeface::BlackoutMidnight => Some("BlackoutMidnight.ttf"),
            Typeface::HkGrotesk => Some("HKGroteskMedium.otf"),
        }
    }

    /// Path of the font inside the asset bundle
    pub fn asset_path(&self) -> Option<String> {
        self.file_name().map(|name| format!("fonts/{}", name))
    }

    /// Average glyph advance as a fraction of the text size
    ///
    /// Stands in for real glyph metrics; digits are what the counters draw.
    pub fn advance_ratio(&self) -> f32 {
        match self {
            Typeface::Default => 0.5,
            Typeface::BlackoutTwoAm | Typeface::BlackoutMidnight => 0.4375,
            Typeface::HkGrotesk => 0.625,
        }
    }
}

/// Resource table handed to widgets at construction
#[derive(Clone, Debug)]
pub struct Resources {
    colors: HashMap<String, Color>,
    metrics: DisplayMetrics,
}

impl Default for Resources {
    fn default() -> Self {
        Self::new(DisplayMetrics::default())
    }
}

impl Resources {
    /// Create with the stock palette
    pub fn new(metrics: DisplayMetrics) -> Self {
        let mut colors = HashMap::new();
        colors.insert(COLOR_PRIMARY.to_string(), Color::rgb(0x3F, 0x51, 0xB5));
        colors.insert(COLOR_PRIMARY_DARK.to_string(), Color::rgb(0x30, 0x3F, 0x9F));
        colors.insert(COLOR_ACCENT.to_string(), Color::rgb(0xFF, 0x40, 0x81));
        colors.insert(COLOR_WHITE.to_string(), Color::WHITE);
        Self { colors, metrics }
    }

    /// Look up a named color, falling back to black for unknown names
    pub fn color(&self, name: &str) -> Color {
        match self.colors.get(name) {
            Some(color) => *color,
            None => {
                crate::log!("Unknown color resource '{}', using black", name);
                Color::BLACK
            }
        }
    }

    pub fn metrics(&self) -> &DisplayMetrics {
        &self.metrics
    }
}
