//! Resize state machine: drag-start, drag-move, drag-end

use crate::math::{Rect, Size, Vec2};
use crate::window::ResizeHandle;
use super::{calculate_resize, clamp_to_bounds, DragSession, MIN_SIZE};

/// Input router owning the drag session of one window
#[derive(Clone, Debug)]
pub struct ResizeRouter {
    /// Active session, if a handle is held down
    session: Option<DragSession>,
    /// Minimum window size
    min_size: Size,
}

impl Default for ResizeRouter {
    fn default() -> Self {
        Self::new(MIN_SIZE)
    }
}

impl ResizeRouter {
    /// Create a router enforcing the given minimum size
    pub fn new(min_size: Size) -> Self {
        Self {
            session: None,
            min_size,
        }
    }

    /// Get the active session
    #[inline]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Check if a resize is in progress
    #[inline]
    pub fn is_resizing(&self) -> bool {
        self.session.is_some()
    }

    /// Start a resize from `handle`, replacing any active session
    pub fn begin(&mut self, handle: ResizeHandle, mouse: Vec2, rect: Rect) {
        self.session = Some(DragSession::new(handle, mouse, rect));
    }

    /// Geometry for the current pointer position, clamped to `bounds`
    ///
    /// Returns `None` when no resize is in progress.
    pub fn update(&self, mouse: Vec2, bounds: Size) -> Option<Rect> {
        let session = self.session.as_ref()?;
        let resized = calculate_resize(
            session.handle,
            session.start_rect,
            session.delta(mouse),
            self.min_size,
        );
        Some(clamp_to_bounds(session.handle, resized, bounds, self.min_size))
    }

    /// End the current resize; reports whether one was active
    pub fn end(&mut self) -> bool {
        self.session.take().is_some()
    }
}
