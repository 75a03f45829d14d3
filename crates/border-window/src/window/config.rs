//! Window configuration for creation

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::math::{Rect, Size};

/// Configuration for creating a window
///
/// Deserializes from a camelCase options object in which every field is
/// optional, e.g. `{"width": 640, "borderColor": "#336"}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WindowConfig {
    /// Initial outer width in pixels
    pub width: f32,
    /// Initial outer height in pixels
    pub height: f32,
    /// Initial left offset inside the container
    pub left: f32,
    /// Initial top offset inside the container
    pub top: f32,
    /// CSS color of the content area
    pub background_color: String,
    /// CSS color of the border strips
    pub border_color: String,
    /// Width the window cannot be resized below
    pub min_width: f32,
    /// Height the window cannot be resized below
    pub min_height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 400.0,
            left: 100.0,
            top: 100.0,
            background_color: "#fff".to_string(),
            border_color: "#000".to_string(),
            min_width: crate::input::MIN_SIZE.width,
            min_height: crate::input::MIN_SIZE.height,
        }
    }
}

impl WindowConfig {
    /// Parse options JSON; blank input yields the defaults
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }

    /// Geometry the window starts with
    #[inline]
    pub fn initial_rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height)
    }

    /// Minimum size constraint
    #[inline]
    pub fn min_size(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }
}
