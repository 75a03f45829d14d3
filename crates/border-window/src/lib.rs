//! Border-resizable window widget for browser documents
//!
//! A window is a positioned `div` framed by four border strips and four
//! corner handles around a content area. Dragging a strip or corner resizes
//! the window; the window never moves by its body.
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Rect`)
//! - [`window`]: Resize handles, creation options and the shared stylesheet
//! - [`input`]: Resize state machine and boundary clamping
//! - `wasm` (feature `wasm`): DOM construction, event wiring and the
//!   `createWindow` JS export
//!
//! Everything outside the `wasm` module is plain Rust and runs in native
//! tests without a browser.
//!
//! ## Example
//!
//! ```rust
//! use border_window::{ResizeHandle, ResizeRouter, Rect, Size, Vec2};
//!
//! let mut router = ResizeRouter::default();
//! router.begin(ResizeHandle::SE, Vec2::new(500.0, 500.0), Rect::new(100.0, 100.0, 400.0, 400.0));
//!
//! let rect = router.update(Vec2::new(560.0, 470.0), Size::new(1280.0, 720.0)).unwrap();
//! assert_eq!(rect, Rect::new(100.0, 100.0, 460.0, 370.0));
//!
//! router.end();
//! ```

pub mod error;
pub mod input;
pub mod math;
pub mod window;

// DOM layer (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

pub use error::{Result, WindowError};
pub use input::{calculate_resize, clamp_to_bounds, DragSession, ResizeRouter, MIN_SIZE};
pub use math::{Rect, Size, Vec2};
pub use window::{ResizeHandle, WindowConfig, FRAME_STYLE, STYLE_ELEMENT_ID};
