//! Drag session record for an in-progress resize

use crate::math::{Rect, Vec2};
use crate::window::ResizeHandle;

/// State captured when a resize drag starts
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Which handle is being dragged
    pub handle: ResizeHandle,
    /// Pointer position at start (client coords)
    pub start_mouse: Vec2,
    /// Window geometry at start
    pub start_rect: Rect,
}

impl DragSession {
    /// Create a new session
    #[inline]
    pub fn new(handle: ResizeHandle, start_mouse: Vec2, start_rect: Rect) -> Self {
        Self {
            handle,
            start_mouse,
            start_rect,
        }
    }

    /// Pointer movement since the drag started
    #[inline]
    pub fn delta(&self, mouse: Vec2) -> Vec2 {
        mouse - self.start_mouse
    }
}
