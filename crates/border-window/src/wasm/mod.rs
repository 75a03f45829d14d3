//! Browser DOM layer
//!
//! Builds the window nodes, wires the resize listeners and exports
//! `createWindow` to JavaScript.

mod dom;
mod handlers;
mod util;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::error::{Result, WindowError};
use crate::input::ResizeRouter;
use crate::math::{Rect, Size};
use crate::window::WindowConfig;
use handlers::Listener;
use util::log;

/// What goes inside the content area
#[derive(Clone, Debug, Default)]
pub enum Content {
    /// Nothing; fill it later through [`ResizableWindow::content`]
    #[default]
    Empty,
    /// Markup assigned to `innerHTML`
    Html(String),
    /// An existing element, moved into the window
    Element(HtmlElement),
}

impl Content {
    /// Interpret a JS value: strings are markup, elements are appended
    pub fn from_js(value: JsValue) -> Result<Self> {
        if value.is_null() || value.is_undefined() {
            return Ok(Content::Empty);
        }
        if let Some(html) = value.as_string() {
            return Ok(Content::Html(html));
        }
        value
            .dyn_into::<HtmlElement>()
            .map(Content::Element)
            .map_err(|_| WindowError::InvalidContent)
    }
}

/// Where the window lives and what bounds its resizing
#[derive(Clone, Debug, Default)]
pub enum Container {
    /// `document.body`, bounded by the viewport
    #[default]
    Viewport,
    /// Any other element, bounded by its client area
    Element(HtmlElement),
}

impl Container {
    /// Treat an explicitly passed `document.body` as the viewport
    fn resolve(self, document: &Document) -> Self {
        if let (Container::Element(el), Some(body)) = (&self, document.body()) {
            if body.is_same_node(Some(el.as_ref())) {
                return Container::Viewport;
            }
        }
        self
    }

    /// Size the window must stay within
    pub(crate) fn bounds(&self, window: &Window) -> Result<Size> {
        match self {
            Container::Viewport => {
                let width = window.inner_width()?.as_f64().unwrap_or(0.0);
                let height = window.inner_height()?.as_f64().unwrap_or(0.0);
                Ok(Size::new(width as f32, height as f32))
            }
            Container::Element(el) => Ok(Size::new(el.client_width() as f32, el.client_height() as f32)),
        }
    }

    fn append(&self, document: &Document, child: &HtmlElement) -> Result<()> {
        match self {
            Container::Viewport => {
                document.body().ok_or(WindowError::NoBody)?.append_child(child)?;
            }
            Container::Element(el) => {
                el.append_child(child)?;
            }
        }
        Ok(())
    }
}

/// Create a window resizable by its borders and append it to `container`
///
/// The returned handle owns the event listeners: dropping it detaches them,
/// [`ResizableWindow::forget`] keeps them for the lifetime of the page.
pub fn create_window(
    content: Content,
    config: &WindowConfig,
    container: Container,
) -> Result<ResizableWindow> {
    let window = web_sys::window().ok_or(WindowError::NoWindow)?;
    let document = window.document().ok_or(WindowError::NoDocument)?;
    let container = container.resolve(&document);

    if dom::ensure_stylesheet(&document)? {
        log("[border-window] stylesheet injected");
    }

    let frame = dom::build_frame(&document, config, content)?;
    let router = Rc::new(RefCell::new(ResizeRouter::new(config.min_size())));
    let listeners = handlers::wire(&frame, &router, &container, &window, &document)?;
    container.append(&document, &frame.root)?;

    let rect = config.initial_rect();
    log(&format!(
        "[border-window] created at ({:.0}, {:.0}) size={:.0}x{:.0}",
        rect.x, rect.y, rect.width, rect.height
    ));

    Ok(ResizableWindow {
        root: frame.root,
        content: frame.content,
        router,
        listeners,
    })
}

/// Read window options passed from JS
///
/// Accepts a JSON string or a plain object with the camelCase
/// [`WindowConfig`] fields; `null`/`undefined` gives the defaults. Unknown
/// keys are ignored.
pub fn config_from_js(value: &JsValue) -> Result<WindowConfig> {
    if value.is_null() || value.is_undefined() {
        return Ok(WindowConfig::default());
    }
    if let Some(json) = value.as_string() {
        return WindowConfig::from_json(&json);
    }
    let json = js_sys::JSON::stringify(value)?;
    WindowConfig::from_json(&String::from(json))
}

/// JS entry point: `createWindow(content, options?, container?)`
///
/// `options` is a JSON string or a plain object, see [`config_from_js`].
/// `container` defaults to `document.body`.
#[wasm_bindgen(js_name = createWindow)]
pub fn create_window_js(
    content: JsValue,
    options: JsValue,
    container: Option<HtmlElement>,
) -> core::result::Result<ResizableWindow, JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let config = config_from_js(&options)?;
    let content = Content::from_js(content)?;
    let container = container.map_or(Container::Viewport, Container::Element);
    Ok(create_window(content, &config, container)?)
}

/// Handle to a created window
#[wasm_bindgen]
pub struct ResizableWindow {
    root: HtmlElement,
    content: HtmlElement,
    router: Rc<RefCell<ResizeRouter>>,
    listeners: Vec<Listener>,
}

impl ResizableWindow {
    /// Current geometry as rendered
    pub fn rect(&self) -> Result<Rect> {
        dom::read_rect(&self.root)
    }
}

#[wasm_bindgen]
impl ResizableWindow {
    /// The window root element
    #[wasm_bindgen]
    pub fn element(&self) -> HtmlElement {
        self.root.clone()
    }

    /// The content area element
    #[wasm_bindgen]
    pub fn content(&self) -> HtmlElement {
        self.content.clone()
    }

    /// Whether a border is currently being dragged
    #[wasm_bindgen(js_name = isResizing)]
    pub fn is_resizing(&self) -> bool {
        self.router.borrow().is_resizing()
    }

    /// Get current geometry as JSON
    #[wasm_bindgen(js_name = rectJson)]
    pub fn rect_json(&self) -> String {
        let rect = match self.rect() {
            Ok(rect) => rect,
            Err(e) => {
                log(&format!("[border-window] cannot read geometry: {}", e));
                return "{}".to_string();
            }
        };
        serde_json::to_string(&rect).unwrap_or_else(|_| "{}".to_string())
    }

    /// Keep the window interactive for the lifetime of the page
    #[wasm_bindgen]
    pub fn forget(self) {
        let ResizableWindow { listeners, .. } = self;
        for listener in listeners {
            listener.leak();
        }
    }

    /// Remove the window from the document and detach its listeners
    #[wasm_bindgen]
    pub fn destroy(self) {
        self.root.remove();
        log("[border-window] destroyed");
    }
}
