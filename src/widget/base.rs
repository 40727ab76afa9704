//! Base layout types: per-axis measure specs, child layout params and
//! size reconciliation

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Insets, Rect, Size};

/// Constraint a parent imposes on one axis of a child's measurement
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MeasureSpec {
    /// The child must be exactly this size
    Exactly(f32),
    /// The child may be at most this size
    AtMost(f32),
    /// The parent imposes nothing
    Unspecified,
}

impl MeasureSpec {
    /// Size carried by the spec (0 for unspecified)
    pub fn size(&self) -> f32 {
        match self {
            MeasureSpec::Exactly(size) | MeasureSpec::AtMost(size) => *size,
            MeasureSpec::Unspecified => 0.0,
        }
    }

    /// Reconcile a desired size with this constraint
    pub fn resolve(&self, desired: f32) -> f32 {
        match *self {
            MeasureSpec::Exactly(size) => size,
            MeasureSpec::AtMost(size) => desired.min(size),
            MeasureSpec::Unspecified => desired,
        }
    }

    /// Size a view with no content of its own would take
    ///
    /// Unspecified yields `minimum`; bounded specs hand over their whole size.
    pub fn default_size(&self, minimum: f32) -> f32 {
        match *self {
            MeasureSpec::Unspecified => minimum,
            MeasureSpec::Exactly(size) | MeasureSpec::AtMost(size) => size,
        }
    }

    /// Spec for a child given how much of this axis is already spoken for
    ///
    /// `used` covers parent padding, child margins and any space consumed by
    /// siblings measured earlier.
    pub fn for_child(&self, used: f32, dimension: ChildDimension) -> MeasureSpec {
        let available = (self.size() - used).max(0.0);

        match (dimension, *self) {
            (ChildDimension::Exact(size), _) => MeasureSpec::Exactly(size),
            (ChildDimension::MatchParent, MeasureSpec::Exactly(_)) => {
                MeasureSpec::Exactly(available)
            }
            (ChildDimension::MatchParent, MeasureSpec::AtMost(_))
            | (ChildDimension::WrapContent, MeasureSpec::Exactly(_))
            | (ChildDimension::WrapContent, MeasureSpec::AtMost(_)) => {
                MeasureSpec::AtMost(available)
            }
            (_, MeasureSpec::Unspecified) => MeasureSpec::Unspecified,
        }
    }
}

/// Resolve both axes of a desired size against their specs
pub fn resolve_size(desired: Size, width: MeasureSpec, height: MeasureSpec) -> Size {
    Size::new(width.resolve(desired.width), height.resolve(desired.height))
}

/// Round half up, matching how pixel positions snap on the host
pub fn round_px(value: f32) -> f32 {
    (value + 0.5).floor()
}

/// What size a child asks its parent for along one axis
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChildDimension {
    /// A fixed pixel size
    Exact(f32),
    /// As large as the parent allows
    MatchParent,
    /// Just large enough for the content
    #[default]
    WrapContent,
}

/// Margin-aware layout parameters attached to a child slot
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    pub width: ChildDimension,
    pub height: ChildDimension,
    pub margins: Insets,
}

impl LayoutParams {
    /// Wrap content on both axes with the given margins
    pub fn with_margins(margins: Insets) -> Self {
        Self {
            margins,
            ..Default::default()
        }
    }
}

/// Measured size from a widget
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeasuredSize {
    /// Final size after reconciling with the parent's specs
    pub size: Size,
}

impl MeasuredSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }
}

/// Result of the measure and position passes for one child slot
///
/// Recomputed on every layout cycle; never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutBox {
    /// Box assigned by the position pass
    pub frame: Rect,
    /// Margins from the slot's layout params
    pub margins: Insets,
    /// Size reported by the measure pass
    pub measured: Size,
}

impl LayoutBox {
    /// Measured size plus margins on both axes
    pub fn footprint(&self) -> Size {
        self.measured.outset(&self.margins)
    }
}
