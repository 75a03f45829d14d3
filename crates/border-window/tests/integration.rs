//! Integration tests for the resize state machine
//!
//! These tests drive full drag sessions the way the DOM layer does:
//! - drag-start from a handle with the window's current geometry
//! - a series of pointer moves clamped to a container
//! - drag-end

use border_window::{
    ResizeHandle, ResizeRouter, Rect, Size, Vec2, WindowConfig, MIN_SIZE,
};

const VIEWPORT: Size = Size::new(1280.0, 720.0);

fn assert_rect(actual: Rect, expected: Rect) {
    assert!(
        (actual.x - expected.x).abs() < 0.001
            && (actual.y - expected.y).abs() < 0.001
            && (actual.width - expected.width).abs() < 0.001
            && (actual.height - expected.height).abs() < 0.001,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

/// Start a drag on `handle` with the pointer at the matching edge of `rect`
fn grab(router: &mut ResizeRouter, handle: ResizeHandle, rect: Rect) -> Vec2 {
    let x = if handle.has_west() {
        rect.x
    } else if handle.has_east() {
        rect.right()
    } else {
        rect.x + rect.width / 2.0
    };
    let y = if handle.has_north() {
        rect.y
    } else if handle.has_south() {
        rect.bottom()
    } else {
        rect.y + rect.height / 2.0
    };
    let mouse = Vec2::new(x, y);
    router.begin(handle, mouse, rect);
    mouse
}

// =============================================================================
// Session Lifecycle
// =============================================================================

#[test]
fn test_full_session_from_default_config() {
    let config = WindowConfig::default();
    let mut router = ResizeRouter::new(config.min_size());
    let start = config.initial_rect();

    let mouse = grab(&mut router, ResizeHandle::SE, start);
    assert!(router.is_resizing());

    let mut last = start;
    for step in 1..=5 {
        let offset = Vec2::new(10.0 * step as f32, 5.0 * step as f32);
        last = router.update(mouse + offset, VIEWPORT).unwrap();
    }
    assert_rect(last, Rect::new(100.0, 100.0, 450.0, 425.0));

    assert!(router.end());
    assert!(router.update(mouse, VIEWPORT).is_none());
}

#[test]
fn test_moves_after_end_are_ignored() {
    let mut router = ResizeRouter::default();
    let mouse = grab(&mut router, ResizeHandle::E, Rect::new(0.0, 0.0, 300.0, 200.0));
    router.end();

    assert!(router.update(mouse + Vec2::new(100.0, 0.0), VIEWPORT).is_none());
    assert!(router.session().is_none());
}

#[test]
fn test_second_drag_starts_from_new_geometry() {
    let mut router = ResizeRouter::default();
    let start = Rect::new(100.0, 100.0, 400.0, 300.0);

    let mouse = grab(&mut router, ResizeHandle::S, start);
    let after_first = router.update(mouse + Vec2::new(0.0, 100.0), VIEWPORT).unwrap();
    router.end();

    let mouse = grab(&mut router, ResizeHandle::S, after_first);
    let after_second = router.update(mouse + Vec2::new(0.0, 50.0), VIEWPORT).unwrap();
    router.end();

    assert_rect(after_second, Rect::new(100.0, 100.0, 400.0, 450.0));
}

// =============================================================================
// Edges and Corners
// =============================================================================

#[test]
fn test_every_handle_grows_window_outward() {
    let start = Rect::new(300.0, 200.0, 400.0, 300.0);
    for handle in ResizeHandle::ALL {
        let mut router = ResizeRouter::default();
        let mouse = grab(&mut router, handle, start);

        let outward = Vec2::new(
            if handle.has_west() { -20.0 } else if handle.has_east() { 20.0 } else { 0.0 },
            if handle.has_north() { -20.0 } else if handle.has_south() { 20.0 } else { 0.0 },
        );
        let rect = router.update(mouse + outward, VIEWPORT).unwrap();

        let grew_x = handle.has_west() || handle.has_east();
        let grew_y = handle.has_north() || handle.has_south();
        let expected_w = if grew_x { 420.0 } else { 400.0 };
        let expected_h = if grew_y { 320.0 } else { 300.0 };
        assert!((rect.width - expected_w).abs() < 0.001, "{handle}: {:?}", rect);
        assert!((rect.height - expected_h).abs() < 0.001, "{handle}: {:?}", rect);

        // Edges not being dragged stay put
        if !handle.has_west() {
            assert!((rect.x - start.x).abs() < 0.001, "{handle}");
        }
        if !handle.has_north() {
            assert!((rect.y - start.y).abs() < 0.001, "{handle}");
        }
        if !handle.has_east() {
            assert!((rect.right() - start.right()).abs() < 0.001, "{handle}");
        }
        if !handle.has_south() {
            assert!((rect.bottom() - start.bottom()).abs() < 0.001, "{handle}");
        }
    }
}

#[test]
fn test_shrinking_stops_at_min_size() {
    let start = Rect::new(300.0, 200.0, 400.0, 300.0);
    for handle in ResizeHandle::ALL {
        let mut router = ResizeRouter::default();
        let mouse = grab(&mut router, handle, start);

        let inward = Vec2::new(
            if handle.has_west() { 1000.0 } else { -1000.0 },
            if handle.has_north() { 1000.0 } else { -1000.0 },
        );
        let rect = router.update(mouse + inward, VIEWPORT).unwrap();
        assert!(rect.width >= MIN_SIZE.width - 0.001, "{handle}: {:?}", rect);
        assert!(rect.height >= MIN_SIZE.height - 0.001, "{handle}: {:?}", rect);
    }
}

// =============================================================================
// Container Bounds
// =============================================================================

#[test]
fn test_southeast_drag_stops_at_viewport_edge() {
    let mut router = ResizeRouter::default();
    let mouse = grab(&mut router, ResizeHandle::SE, Rect::new(100.0, 100.0, 400.0, 400.0));

    let rect = router.update(mouse + Vec2::new(5000.0, 5000.0), VIEWPORT).unwrap();
    assert_rect(rect, Rect::new(100.0, 100.0, 1180.0, 620.0));
}

#[test]
fn test_northwest_drag_stops_at_container_origin() {
    let container = Size::new(600.0, 400.0);
    let mut router = ResizeRouter::default();
    let start = Rect::new(50.0, 40.0, 300.0, 200.0);
    let mouse = grab(&mut router, ResizeHandle::NW, start);

    let rect = router.update(mouse + Vec2::new(-500.0, -500.0), container).unwrap();
    assert_rect(rect, Rect::new(0.0, 0.0, 350.0, 240.0));
}

#[test]
fn test_result_never_exceeds_container() {
    let container = Size::new(640.0, 480.0);
    let start = Rect::new(200.0, 150.0, 240.0, 180.0);
    let moves = [
        Vec2::new(-900.0, -900.0),
        Vec2::new(900.0, 900.0),
        Vec2::new(-900.0, 900.0),
        Vec2::new(900.0, -900.0),
        Vec2::new(37.0, -12.0),
    ];

    for handle in ResizeHandle::ALL {
        for delta in moves {
            let mut router = ResizeRouter::default();
            let mouse = grab(&mut router, handle, start);
            let rect = router.update(mouse + delta, container).unwrap();

            assert!(rect.x >= 0.0 && rect.y >= 0.0, "{handle} {:?}: {:?}", delta, rect);
            assert!(rect.right() <= container.width + 0.001, "{handle} {:?}: {:?}", delta, rect);
            assert!(rect.bottom() <= container.height + 0.001, "{handle} {:?}: {:?}", delta, rect);
        }
    }
}

#[test]
fn test_container_shrunk_mid_drag() {
    let mut router = ResizeRouter::default();
    let mouse = grab(&mut router, ResizeHandle::E, Rect::new(100.0, 100.0, 400.0, 300.0));

    let wide = router.update(mouse + Vec2::new(100.0, 0.0), VIEWPORT).unwrap();
    assert!((wide.width - 500.0).abs() < 0.001);

    let narrow = router.update(mouse + Vec2::new(100.0, 0.0), Size::new(450.0, 720.0)).unwrap();
    assert_rect(narrow, Rect::new(100.0, 100.0, 350.0, 300.0));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_options_json_drive_min_size() {
    let config = WindowConfig::from_json(r#"{"minWidth": 200, "minHeight": 150}"#).unwrap();
    let mut router = ResizeRouter::new(config.min_size());
    let mouse = grab(&mut router, ResizeHandle::SE, config.initial_rect());

    let rect = router.update(mouse + Vec2::new(-1000.0, -1000.0), VIEWPORT).unwrap();
    assert_rect(rect, Rect::new(100.0, 100.0, 200.0, 150.0));
}
