//! Rect value object - Rectangle representation
//!
//! Child boxes are stored as edges, the way a position pass hands them out.

use serde::{Deserialize, Serialize};

use super::dimensions::Size;

/// A rectangle defined by its bounds
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    /// Create a new rectangle from bounds
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from position and size
    pub fn from_pos_size(x: f32, y: f32, size: Size) -> Self {
        Self {
            left: x,
            top: y,
            right: x + size.width,
            bottom: y + size.height,
        }
    }

    /// Create a zero rectangle at origin
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Check if a point is inside this rectangle
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Translate rectangle by offset
    pub fn translate(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(
            self.left + dx,
            self.top + dy,
            self.right + dx,
            self.bottom + dy,
        )
    }

    /// Same size, moved so the top-left corner sits at the origin
    pub fn at_origin(&self) -> Rect {
        Rect::from_pos_size(0.0, 0.0, self.size())
    }
}
