//! Input module
//!
//! Provides the resize state machine and the geometry math behind it.

mod drag;
mod router;

pub use drag::DragSession;
pub use router::ResizeRouter;

use crate::math::{Rect, Size, Vec2};
use crate::window::ResizeHandle;

/// Smallest size a window can be resized to unless configured otherwise
pub const MIN_SIZE: Size = Size::new(100.0, 50.0);

/// Calculate new geometry after dragging `handle` by `delta`
///
/// West and north drags keep the opposite edge fixed, including when the
/// minimum size stops the window from shrinking further.
pub fn calculate_resize(handle: ResizeHandle, start: Rect, delta: Vec2, min: Size) -> Rect {
    let mut rect = start;

    if handle.has_east() {
        rect.width = (start.width + delta.x).max(min.width);
    }
    if handle.has_west() {
        rect.width = (start.width - delta.x).max(min.width);
        // Anchored at the right edge on purpose: `start.x + delta.x` would slide
        // the window once the minimum width stops it shrinking.
        rect.x = start.right() - rect.width;
    }
    if handle.has_south() {
        rect.height = (start.height + delta.y).max(min.height);
    }
    if handle.has_north() {
        rect.height = (start.height - delta.y).max(min.height);
        // Anchored at the bottom edge, same as west
        rect.y = start.bottom() - rect.height;
    }

    rect
}

/// Keep a resized window inside a container of size `bounds`
///
/// Left/top land in `[0, bounds - min]`; width/height never reach past the
/// container's right/bottom edge.
pub fn clamp_to_bounds(handle: ResizeHandle, rect: Rect, bounds: Size, min: Size) -> Rect {
    let x = rect.x.clamp(0.0, (bounds.width - min.width).max(0.0));
    let y = rect.y.clamp(0.0, (bounds.height - min.height).max(0.0));

    let mut width = rect.width;
    let mut height = rect.height;
    if handle.has_west() {
        width -= x - rect.x;
    }
    if handle.has_north() {
        height -= y - rect.y;
    }

    Rect::new(
        x,
        y,
        width.min(bounds.width - x).max(0.0),
        height.min(bounds.height - y).max(0.0),
    )
}
