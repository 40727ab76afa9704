//! Theme module - colors, typefaces and named resources

pub mod resources;
pub mod types;

pub use resources::{DisplayMetrics, Resources, Typeface};
pub use types::{Color, ParseError};
