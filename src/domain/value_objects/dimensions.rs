//! Sizes and four-sided insets (padding and margins)

use serde::{Deserialize, Serialize};

/// A width/height pair in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Grow this size by the given insets on every side
    pub fn outset(&self, insets: &Insets) -> Size {
        Size {
            width: self.width + insets.horizontal(),
            height: self.height + insets.vertical(),
        }
    }
}

/// Four-sided insets used for both padding and margins
///
/// Missing edges in config default to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Insets {
    pub const ZERO: Insets = Insets {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same inset on all four edges
    pub fn uniform(amount: f32) -> Self {
        Self::new(amount, amount, amount, amount)
    }

    /// `vertical` on top/bottom, `horizontal` on left/right
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// left + right
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// top + bottom
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}
