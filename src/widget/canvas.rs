//! Drawing surface capability and a canvas that records what was drawn

use serde::Serialize;

use crate::domain::value_objects::Rect;
use crate::theme::types::Color;

use super::text::TextPaint;

/// Fill or stroke settings for shapes
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Paint {
    pub color: Color,
    pub stroke_width: f32,
}

impl Paint {
    pub fn fill(color: Color) -> Self {
        Self {
            color,
            stroke_width: 0.0,
        }
    }

    pub fn stroke(color: Color, stroke_width: f32) -> Self {
        Self {
            color,
            stroke_width,
        }
    }
}

/// Drawing calls a widget may issue during its draw pass
pub trait Canvas {
    /// Fill a rectangle with rounded corners
    fn draw_round_rect(&mut self, rect: Rect, radius_x: f32, radius_y: f32, paint: &Paint);

    /// Stroke a straight line
    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, paint: &Paint);

    /// Draw text with its baseline starting at (x, y)
    fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: &TextPaint);

    /// Draw a named image resource into a rectangle
    fn draw_image(&mut self, resource: &str, rect: Rect);

    /// Shift the origin for subsequent calls
    fn translate(&mut self, dx: f32, dy: f32);
}

/// One recorded drawing call, in canvas coordinates at the time of the call
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    RoundRect {
        rect: Rect,
        radius: f32,
        color: Color,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        color: Color,
        width: f32,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        color: Color,
        size: f32,
        /// Bundled font asset, absent for the platform default
        #[serde(skip_serializing_if = "Option::is_none")]
        font: Option<String>,
    },
    Image {
        resource: String,
        rect: Rect,
    },
}

/// Canvas that stores every call as a [`DrawOp`]
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<DrawOp>,
    origin: (f32, f32),
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    /// Lines recorded so far, as (y0, y1) pairs; handy for guide checks
    #[cfg(test)]
    pub fn line_ys(&self) -> Vec<(f32, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { from, to, .. } => Some((from.1, to.1)),
                _ => None,
            })
            .collect()
    }

    fn offset(&self, x: f32, y: f32) -> (f32, f32) {
        (x + self.origin.0, y + self.origin.1)
    }
}

impl Canvas for RecordingCanvas {
    fn draw_round_rect(&mut self, rect: Rect, radius_x: f32, _radius_y: f32, paint: &Paint) {
        self.ops.push(DrawOp::RoundRect {
            rect: rect.translate(self.origin.0, self.origin.1),
            radius: radius_x,
            color: paint.color,
        });
    }

    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, paint: &Paint) {
        self.ops.push(DrawOp::Line {
            from: self.offset(x0, y0),
            to: self.offset(x1, y1),
            color: paint.color,
            width: paint.stroke_width,
        });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: &TextPaint) {
        let (x, y) = self.offset(x, y);
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            color: paint.color,
            size: paint.text_size,
            font: paint.typeface.asset_path(),
        });
    }

    fn draw_image(&mut self, resource: &str, rect: Rect) {
        self.ops.push(DrawOp::Image {
            resource: resource.to_string(),
            rect: rect.translate(self.origin.0, self.origin.1),
        });
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.origin.0 += dx;
        self.origin.1 += dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::resources::Typeface;

    #[test]
    fn test_recording_applies_translation() {
        let mut canvas = RecordingCanvas::new();
        canvas.translate(10.0, 20.0);
        canvas.draw_line(0.0, 5.0, 30.0, 5.0, &Paint::stroke(Color::WHITE, 1.0));
        canvas.draw_image("ic_spa", Rect::new(0.0, 0.0, 4.0, 4.0));

        assert_eq!(
            canvas.ops()[0],
            DrawOp::Line {
                from: (10.0, 25.0),
                to: (40.0, 25.0),
                color: Color::WHITE,
                width: 1.0,
            }
        );
        assert_eq!(
            canvas.ops()[1],
            DrawOp::Image {
                resource: "ic_spa".to_string(),
                rect: Rect::new(10.0, 20.0, 14.0, 24.0),
            }
        );
    }

    #[test]
    fn test_draw_op_json_is_tagged() {
        let op = DrawOp::Image {
            resource: "ic".to_string(),
            rect: Rect::zero(),
        };
        let json = serde_json::to_value(&op).unwrap();
        assert_eq!(json["op"], "image");
        assert_eq!(json["resource"], "ic");
    }

    #[test]
    fn test_text_records_bundled_font() {
        let mut canvas = RecordingCanvas::new();
        let plain = TextPaint::new(Color::WHITE, 12.0);
        canvas.draw_text("a", 0.0, 0.0, &plain);
        canvas.draw_text("b", 0.0, 0.0, &plain.with_typeface(Typeface::BlackoutMidnight));

        let json = serde_json::to_value(canvas.ops()).unwrap();
        assert!(json[0].get("font").is_none());
        assert_eq!(json[1]["font"], "fonts/BlackoutMidnight.ttf");
    }
}
