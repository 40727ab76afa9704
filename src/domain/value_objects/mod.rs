//! Domain Value Objects - Immutable values that describe characteristics
//!
//! Value objects have no identity and are compared by their values.

pub mod dimensions;
pub mod rect;

pub use dimensions::{Insets, Size};
pub use rect::Rect;
