//! mldr - measure/layout/draw demos
//!
//! A composite list row layout and a bounded tally counter, rendered
//! headlessly into recorded draw operations.

// Include the log module so the log! macro works
#[macro_use]
pub mod log;

pub mod demo;
pub mod domain;
pub mod shared;
pub mod theme;
pub mod widget;
