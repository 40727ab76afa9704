//! Widget system for mldr
//!
//! Every widget goes through the same three passes:
//! - `measure` reconciles the size it wants with the parent's per-axis specs
//! - `position` receives the box the parent assigned and places any children
//! - `draw` paints into a canvas whose origin is the widget's own top-left

pub mod base;
pub mod canvas;
pub mod counter;
pub mod image_view;
pub mod list_item;
pub mod text;
pub mod text_view;

use crate::domain::value_objects::{Rect, Size};

pub use base::{
    resolve_size, round_px, ChildDimension, LayoutBox, LayoutParams, MeasureSpec, MeasuredSize,
};
pub use canvas::{Canvas, DrawOp, Paint, RecordingCanvas};
pub use counter::{CounterState, CounterStyle, CounterVariant, TallyCounter, TallyCounterView};
pub use image_view::ImageView;
pub use list_item::{SimpleListItem, WidthPadding};
pub use text::{FontMetrics, TextPaint};
pub use text_view::TextView;

/// Result from dispatching a click
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventResult {
    /// Widget wants to be repainted
    pub needs_repaint: bool,
    /// Event was consumed (don't propagate)
    pub consumed: bool,
}

impl EventResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn repaint() -> Self {
        Self {
            needs_repaint: true,
            consumed: true,
        }
    }
}

/// Capability shared by all widgets: measure, position, draw
pub trait Widget {
    /// Measure the widget against the parent's width and height specs
    ///
    /// The result is also stored and available from [`Widget::measured_size`].
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> MeasuredSize;

    /// Size from the most recent measure pass
    fn measured_size(&self) -> Size;

    /// Accept the box assigned by the parent, in the parent's coordinates
    fn position(&mut self, bounds: Rect);

    /// Box from the most recent position pass
    fn frame(&self) -> Rect;

    /// Paint the widget with the canvas origin at its own top-left corner
    fn draw(&self, canvas: &mut dyn Canvas);

    /// Handle a click at a point in the widget's own coordinates
    fn handle_click(&mut self, _x: f32, _y: f32) -> EventResult {
        EventResult::none()
    }

    /// Get the widget's name (for logging)
    fn widget_name(&self) -> &str {
        ""
    }
}

/// Draw a child widget at its frame inside the parent's canvas
pub fn draw_child(child: &dyn Widget, canvas: &mut dyn Canvas) {
    let frame = child.frame();
    canvas.translate(frame.left, frame.top);
    child.draw(canvas);
    canvas.translate(-frame.left, -frame.top);
}
