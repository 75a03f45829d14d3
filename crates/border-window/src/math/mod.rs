//! Core geometry types for the window widget
//!
//! Positions, deltas and dimensions are all expressed in CSS pixels
//! relative to the container.

mod vec2;
mod size;
mod rect;

pub use vec2::Vec2;
pub use size::Size;
pub use rect::Rect;
