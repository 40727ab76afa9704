//! TextView widget - a single line of text

use crate::domain::value_objects::{Insets, Rect, Size};

use super::base::{resolve_size, MeasureSpec, MeasuredSize};
use super::canvas::Canvas;
use super::text::TextPaint;
use super::Widget;

/// Single-line label; wider text is clipped by the parent, not wrapped
#[derive(Clone, Debug)]
pub struct TextView {
    text: String,
    paint: TextPaint,
    padding: Insets,
    measured: MeasuredSize,
    frame: Rect,
}

impl TextView {
    pub fn new(text: impl Into<String>, paint: TextPaint) -> Self {
        Self {
            text: text.into(),
            paint,
            padding: Insets::ZERO,
            measured: MeasuredSize::default(),
            frame: Rect::zero(),
        }
    }

    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Replace the text (row rebinding); takes effect on the next measure
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn paint(&self) -> &TextPaint {
        &self.paint
    }

    /// Distance from the top edge to the text baseline
    fn baseline(&self) -> f32 {
        self.padding.top - self.paint.font_metrics().top
    }

    /// Size of the text itself, before padding and constraints
    pub fn content_size(&self) -> Size {
        Size::new(
            self.paint.measure_text(&self.text),
            self.paint.font_metrics().height(),
        )
    }
}

impl Widget for TextView {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> MeasuredSize {
        let desired = self.content_size().outset(&self.padding);
        let size = resolve_size(desired, width, height);
        self.measured = MeasuredSize::new(size.width, size.height);
        self.measured
    }

    fn measured_size(&self) -> Size {
        self.measured.size
    }

    fn position(&mut self, bounds: Rect) {
        self.frame = bounds;
    }

    fn frame(&self) -> Rect {
        self.frame
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_text(&self.text, self.padding.left, self.baseline(), &self.paint);
    }

    fn widget_name(&self) -> &str {
        "text"
    }
}
