//! Resize handles on the window frame

use std::fmt;

/// A border strip or corner that resizes the window when dragged
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    /// North (top) edge
    N,
    /// South (bottom) edge
    S,
    /// East (right) edge
    E,
    /// West (left) edge
    W,
    /// Northeast corner
    NE,
    /// Northwest corner
    NW,
    /// Southeast corner
    SE,
    /// Southwest corner
    SW,
}

impl ResizeHandle {
    /// All handles in DOM order: borders first, then corners so they stack above
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::N,
        ResizeHandle::S,
        ResizeHandle::W,
        ResizeHandle::E,
        ResizeHandle::NW,
        ResizeHandle::NE,
        ResizeHandle::SW,
        ResizeHandle::SE,
    ];

    /// Dragging moves the top edge
    #[inline]
    pub fn has_north(&self) -> bool {
        matches!(self, ResizeHandle::N | ResizeHandle::NE | ResizeHandle::NW)
    }

    /// Dragging moves the bottom edge
    #[inline]
    pub fn has_south(&self) -> bool {
        matches!(self, ResizeHandle::S | ResizeHandle::SE | ResizeHandle::SW)
    }

    /// Dragging moves the right edge
    #[inline]
    pub fn has_east(&self) -> bool {
        matches!(self, ResizeHandle::E | ResizeHandle::NE | ResizeHandle::SE)
    }

    /// Dragging moves the left edge
    #[inline]
    pub fn has_west(&self) -> bool {
        matches!(self, ResizeHandle::W | ResizeHandle::NW | ResizeHandle::SW)
    }

    /// Check if this is a corner handle
    #[inline]
    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            ResizeHandle::NE | ResizeHandle::NW | ResizeHandle::SE | ResizeHandle::SW
        )
    }

    /// Short direction name
    pub fn as_str(&self) -> &'static str {
        match self {
            ResizeHandle::N => "n",
            ResizeHandle::S => "s",
            ResizeHandle::E => "e",
            ResizeHandle::W => "w",
            ResizeHandle::NE => "ne",
            ResizeHandle::NW => "nw",
            ResizeHandle::SE => "se",
            ResizeHandle::SW => "sw",
        }
    }

    /// Get CSS cursor style for this handle
    pub fn cursor(&self) -> &'static str {
        match self {
            ResizeHandle::N => "n-resize",
            ResizeHandle::S => "s-resize",
            ResizeHandle::E => "e-resize",
            ResizeHandle::W => "w-resize",
            ResizeHandle::NE => "ne-resize",
            ResizeHandle::NW => "nw-resize",
            ResizeHandle::SE => "se-resize",
            ResizeHandle::SW => "sw-resize",
        }
    }

    /// CSS classes of the handle element
    pub fn class_name(&self) -> &'static str {
        match self {
            ResizeHandle::N => "window-border-part window-border-top",
            ResizeHandle::S => "window-border-part window-border-bottom",
            ResizeHandle::W => "window-border-part window-border-left",
            ResizeHandle::E => "window-border-part window-border-right",
            ResizeHandle::NW => "window-corner window-corner-tl",
            ResizeHandle::NE => "window-corner window-corner-tr",
            ResizeHandle::SW => "window-corner window-corner-bl",
            ResizeHandle::SE => "window-corner window-corner-br",
        }
    }
}

impl fmt::Display for ResizeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
