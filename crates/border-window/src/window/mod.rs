//! Window frame module
//!
//! Resize handles, creation options and the shared stylesheet.

mod config;
mod handle;
mod style;

pub use config::WindowConfig;
pub use handle::ResizeHandle;
pub use style::{
    parse_px, px, stylesheet, FrameStyle, BACKGROUND_COLOR_VAR, BORDER_COLOR_VAR, CONTENT_CLASS,
    FRAME_STYLE, STYLE_ELEMENT_ID, WINDOW_CLASS,
};
