//! DOM construction: stylesheet injection, frame nodes and inline geometry

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::error::{Result, WindowError};
use crate::math::{Rect, Size, Vec2};
use crate::window::{
    parse_px, px, stylesheet, ResizeHandle, WindowConfig, BACKGROUND_COLOR_VAR, BORDER_COLOR_VAR,
    CONTENT_CLASS, STYLE_ELEMENT_ID, WINDOW_CLASS,
};
use super::Content;

/// Nodes making up one window
pub(crate) struct Frame {
    pub root: HtmlElement,
    pub handles: Vec<(ResizeHandle, HtmlElement)>,
    pub content: HtmlElement,
}

/// Add the shared stylesheet to `<head>` unless a previous window did.
/// Returns whether it was injected by this call.
pub(crate) fn ensure_stylesheet(document: &Document) -> Result<bool> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(false);
    }
    let head = document.head().ok_or(WindowError::NoHead)?;
    let style = document.create_element("style")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(stylesheet().as_str()));
    head.append_child(&style)?;
    Ok(true)
}

/// Build the root, the eight handles and the content area
pub(crate) fn build_frame(document: &Document, config: &WindowConfig, content: Content) -> Result<Frame> {
    let root = create_div(document, WINDOW_CLASS)?;
    apply_rect(&root, config.initial_rect())?;

    let mut handles = Vec::with_capacity(ResizeHandle::ALL.len());
    for handle in ResizeHandle::ALL {
        let el = create_div(document, handle.class_name())?;
        if !handle.is_corner() {
            el.style().set_property(BORDER_COLOR_VAR, &config.border_color)?;
        }
        root.append_child(&el)?;
        handles.push((handle, el));
    }

    let content_el = create_div(document, CONTENT_CLASS)?;
    content_el
        .style()
        .set_property(BACKGROUND_COLOR_VAR, &config.background_color)?;
    match content {
        Content::Empty => {}
        Content::Html(html) => content_el.set_inner_html(&html),
        Content::Element(el) => {
            content_el.append_child(&el)?;
        }
    }
    root.append_child(&content_el)?;

    Ok(Frame {
        root,
        handles,
        content: content_el,
    })
}

/// Write geometry to the element's inline style
pub(crate) fn apply_rect(el: &HtmlElement, rect: Rect) -> Result<()> {
    let style = el.style();
    style.set_property("width", &px(rect.width))?;
    style.set_property("height", &px(rect.height))?;
    style.set_property("left", &px(rect.x))?;
    style.set_property("top", &px(rect.y))?;
    Ok(())
}

/// Current geometry: rendered size plus inline left/top (0 when unset)
pub(crate) fn read_rect(el: &HtmlElement) -> Result<Rect> {
    let style = el.style();
    let pos = Vec2::new(
        parse_px(&style.get_property_value("left")?),
        parse_px(&style.get_property_value("top")?),
    );
    let size = Size::new(el.offset_width() as f32, el.offset_height() as f32);
    Ok(Rect::from_pos_size(pos, size))
}

/// Toggle text selection on `<body>` for the duration of a drag
pub(crate) fn set_text_selection(body: Option<&HtmlElement>, enabled: bool) -> Result<()> {
    let Some(body) = body else {
        return Ok(());
    };
    let style = body.style();
    if enabled {
        style.remove_property("user-select")?;
    } else {
        style.set_property("user-select", "none")?;
    }
    Ok(())
}

fn create_div(document: &Document, class: &str) -> Result<HtmlElement> {
    let el = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| WindowError::Dom("div is not an HTMLElement".to_string()))?;
    el.set_class_name(class);
    Ok(el)
}
