//! Frame style constants and the shared stylesheet

use std::fmt::Write;

use super::ResizeHandle;

/// Frame style constants for window chrome
pub struct FrameStyle {
    /// Thickness of the border strips
    pub border_width: f32,
    /// Side length of the corner handles
    pub corner_size: f32,
    /// Outer corner radius
    pub border_radius: f32,
    /// Corner radius of the content area
    pub content_radius: f32,
    /// Static stacking order of every window
    pub z_index: i32,
}

/// Default frame style
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    border_width: 8.0,
    corner_size: 16.0,
    border_radius: 6.0,
    content_radius: 3.0,
    z_index: 1000,
};

/// Id of the `<style>` element; the stylesheet is injected once per document
pub const STYLE_ELEMENT_ID: &str = "movable-window-style";

/// Class of the window root element
pub const WINDOW_CLASS: &str = "movable-window";

/// Class of the content area
pub const CONTENT_CLASS: &str = "window-content";

/// Custom property read by the border strips
pub const BORDER_COLOR_VAR: &str = "--border-color";

/// Custom property read by the content area
pub const BACKGROUND_COLOR_VAR: &str = "--background-color";

/// Format a pixel length for an inline style
#[inline]
pub fn px(value: f32) -> String {
    format!("{}px", value)
}

/// Read the leading number of a CSS length such as `"120px"`
///
/// Returns 0 when the value has no numeric prefix (unset or `auto`).
pub fn parse_px(value: &str) -> f32 {
    let s = value.trim();
    let end = s
        .char_indices()
        .find(|&(i, c)| {
            !(c.is_ascii_digit() || c == '.' || ((c == '-' || c == '+') && i == 0))
        })
        .map_or(s.len(), |(i, _)| i);
    s[..end].parse::<f32>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Stylesheet shared by every window in the document
pub fn stylesheet() -> String {
    let s = &FRAME_STYLE;
    let b = px(s.border_width);
    let r = px(s.border_radius);
    let mut css = String::new();

    let _ = write!(
        css,
        ".{WINDOW_CLASS} {{ position: absolute; left: 100px; top: 100px; \
         box-shadow: 2px 2px 10px rgba(0,0,0,0.15); z-index: {z}; border-radius: {r}; \
         transition: box-shadow 0.2s; background: transparent; overflow: visible; }}\n\
         .{WINDOW_CLASS}:active {{ box-shadow: 4px 4px 20px rgba(0,0,0,0.25); }}\n\
         .window-border-part {{ position: absolute; background: var({BORDER_COLOR_VAR}, #000); \
         z-index: 2; border-radius: {r}; }}\n",
        z = s.z_index,
    );

    let borders = [
        (ResizeHandle::N, format!("top: 0; left: 0; right: 0; height: {b};")),
        (ResizeHandle::S, format!("bottom: 0; left: 0; right: 0; height: {b};")),
        (ResizeHandle::W, format!("top: {b}; bottom: {b}; left: 0; width: {b};")),
        (ResizeHandle::E, format!("top: {b}; bottom: {b}; right: 0; width: {b};")),
    ];
    for (handle, placement) in &borders {
        let _ = writeln!(
            css,
            "{} {{ {placement} cursor: {}; }}",
            selector(*handle),
            handle.cursor()
        );
    }

    let c = px(s.corner_size);
    let _ = writeln!(
        css,
        ".window-corner {{ position: absolute; width: {c}; height: {c}; z-index: 3; }}"
    );
    let corners = [
        (ResizeHandle::NW, "top: 0; left: 0;"),
        (ResizeHandle::NE, "top: 0; right: 0;"),
        (ResizeHandle::SW, "bottom: 0; left: 0;"),
        (ResizeHandle::SE, "bottom: 0; right: 0;"),
    ];
    for (handle, placement) in &corners {
        let _ = writeln!(
            css,
            "{} {{ {placement} cursor: {}; }}",
            selector(*handle),
            handle.cursor()
        );
    }

    let _ = writeln!(
        css,
        ".{CONTENT_CLASS} {{ position: absolute; top: {b}; left: {b}; right: {b}; bottom: {b}; \
         background: var({BACKGROUND_COLOR_VAR}, #fff); border-radius: {cr}; z-index: 4; \
         width: auto; height: auto; overflow: auto; cursor: default; box-sizing: border-box; }}",
        cr = px(s.content_radius),
    );

    css
}

/// Most specific class of a handle as a CSS selector
fn selector(handle: ResizeHandle) -> String {
    let class = handle.class_name().rsplit(' ').next().unwrap_or_default();
    format!(".{class}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px() {
        assert_eq!(px(100.0), "100px");
        assert_eq!(px(12.5), "12.5px");
    }

    #[test]
    fn test_parse_px() {
        assert!((parse_px("120px") - 120.0).abs() < 0.001);
        assert!((parse_px(" 12.5px ") - 12.5).abs() < 0.001);
        assert!((parse_px("-8px") - (-8.0)).abs() < 0.001);
        assert!((parse_px("40") - 40.0).abs() < 0.001);
    }

    #[test]
    fn test_parse_px_without_number_is_zero() {
        assert_eq!(parse_px(""), 0.0);
        assert_eq!(parse_px("auto"), 0.0);
        assert_eq!(parse_px("px"), 0.0);
        assert_eq!(parse_px("-"), 0.0);
    }

    #[test]
    fn test_stylesheet_covers_every_handle() {
        let css = stylesheet();
        for h in ResizeHandle::ALL {
            let rule = format!("{} {{", selector(h));
            assert!(css.contains(&rule), "missing rule for {h}");
            assert!(css.contains(h.cursor()));
        }
        assert!(css.contains(".movable-window {"));
        assert!(css.contains(".window-content {"));
        assert!(css.contains("z-index: 1000"));
    }

    #[test]
    fn test_stylesheet_reads_color_vars() {
        let css = stylesheet();
        assert!(css.contains("var(--border-color, #000)"));
        assert!(css.contains("var(--background-color, #fff)"));
    }

    #[test]
    fn test_selector() {
        assert_eq!(selector(ResizeHandle::N), ".window-border-top");
        assert_eq!(selector(ResizeHandle::SE), ".window-corner-br");
    }
}
