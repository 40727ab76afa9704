//! Text paint and font metrics
//!
//! Metrics are derived from the text size with fixed ratios so layout is
//! deterministic without a font rasterizer.

use serde::Serialize;

use crate::theme::resources::Typeface;
use crate::theme::types::Color;

/// Vertical font metrics relative to the baseline (negative is up)
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FontMetrics {
    /// Highest a glyph may reach
    pub top: f32,
    /// Recommended distance above the baseline
    pub ascent: f32,
    /// Recommended distance below the baseline
    pub descent: f32,
    /// Lowest a glyph may reach
    pub bottom: f32,
}

impl FontMetrics {
    /// Full line height from top to bottom
    pub fn height(&self) -> f32 {
        -self.top + self.bottom
    }
}

const TOP_RATIO: f32 = -1.0;
const ASCENT_RATIO: f32 = -0.875;
const DESCENT_RATIO: f32 = 0.25;
const BOTTOM_RATIO: f32 = 0.25;

/// Paint used to measure and draw text
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TextPaint {
    pub color: Color,
    pub text_size: f32,
    pub typeface: Typeface,
}

impl Default for TextPaint {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            text_size: 16.0,
            typeface: Typeface::Default,
        }
    }
}

impl TextPaint {
    pub fn new(color: Color, text_size: f32) -> Self {
        Self {
            color,
            text_size,
            typeface: Typeface::Default,
        }
    }

    pub fn with_typeface(mut self, typeface: Typeface) -> Self {
        self.typeface = typeface;
        self
    }

    /// Advance width of a run of text
    pub fn measure_text(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.text_size * self.typeface.advance_ratio()
    }

    pub fn font_metrics(&self) -> FontMetrics {
        FontMetrics {
            top: self.text_size * TOP_RATIO,
            ascent: self.text_size * ASCENT_RATIO,
            descent: self.text_size * DESCENT_RATIO,
            bottom: self.text_size * BOTTOM_RATIO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_text_scales_with_length() {
        let paint = TextPaint::new(Color::WHITE, 20.0);
        assert_eq!(paint.measure_text(""), 0.0);
        assert_eq!(paint.measure_text("0000"), 40.0);
        assert_eq!(paint.measure_text("9999"), paint.measure_text("0000"));
    }

    #[test]
    fn test_font_metrics_ordering() {
        let metrics = TextPaint::new(Color::WHITE, 64.0).font_metrics();
        assert!(metrics.top < metrics.ascent);
        assert!(metrics.ascent < 0.0);
        assert!(metrics.descent > 0.0);
        assert!(metrics.bottom >= metrics.descent);
        assert_eq!(metrics.height(), 80.0);
    }

    #[test]
    fn test_typeface_changes_advance() {
        let plain = TextPaint::new(Color::WHITE, 10.0);
        let grotesk = plain.with_typeface(Typeface::HkGrotesk);
        assert!(grotesk.measure_text("1234") > plain.measure_text("1234"));
    }
}
