//! ImageView widget - a square icon drawn from a named image resource

use crate::domain::value_objects::{Insets, Rect, Size};

use super::base::{resolve_size, MeasureSpec, MeasuredSize};
use super::canvas::Canvas;
use super::Widget;

/// Default icon edge in pixels
pub const DEFAULT_ICON_SIZE: f32 = 48.0;

/// Displays an icon at its intrinsic size
#[derive(Clone, Debug)]
pub struct ImageView {
    resource: String,
    intrinsic: Size,
    padding: Insets,
    measured: MeasuredSize,
    frame: Rect,
}

impl ImageView {
    /// Create an image view for a resource with a square intrinsic size
    pub fn new(resource: impl Into<String>, icon_size: f32) -> Self {
        Self::with_intrinsic_size(resource, Size::new(icon_size, icon_size))
    }

    /// Create an image view whose content has an arbitrary size
    pub fn with_intrinsic_size(resource: impl Into<String>, intrinsic: Size) -> Self {
        Self {
            resource: resource.into(),
            intrinsic,
            padding: Insets::ZERO,
            measured: MeasuredSize::default(),
            frame: Rect::zero(),
        }
    }

    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Swap the displayed image (row rebinding)
    pub fn set_image(&mut self, resource: impl Into<String>) {
        self.resource = resource.into();
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }
}

impl Widget for ImageView {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> MeasuredSize {
        let desired = self.intrinsic.outset(&self.padding);
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
        let content = Rect::new(
            self.padding.left,
            self.padding.top,
            self.frame.width() - self.padding.right,
            self.frame.height() - self.padding.bottom,
        );
        canvas.draw_image(&self.resource, content);
    }

    fn widget_name(&self) -> &str {
        "image"
    }
}
