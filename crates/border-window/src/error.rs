//! Error types for window creation and configuration

/// Errors that can occur while configuring or building a window.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum WindowError {
    /// Options JSON could not be parsed.
    #[error("invalid window options: {0}")]
    InvalidOptions(String),

    /// No global `window` object (not running in a browser).
    #[error("no global window")]
    NoWindow,

    /// The window has no document.
    #[error("no document")]
    NoDocument,

    /// The document has no `<body>`.
    #[error("document has no body")]
    NoBody,

    /// The document has no `<head>` to hold the stylesheet.
    #[error("document has no head")]
    NoHead,

    /// Content is neither an HTML string nor an element.
    #[error("content must be an HTML string or an HTMLElement")]
    InvalidContent,

    /// A DOM call threw.
    #[error("DOM error: {0}")]
    Dom(String),
}

/// Result alias for window operations
pub type Result<T> = core::result::Result<T, WindowError>;

impl From<serde_json::Error> for WindowError {
    fn from(e: serde_json::Error) -> Self {
        WindowError::InvalidOptions(e.to_string())
    }
}

#[cfg(feature = "wasm")]
impl From<wasm_bindgen::JsValue> for WindowError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let msg = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        WindowError::Dom(msg)
    }
}

#[cfg(feature = "wasm")]
impl From<WindowError> for wasm_bindgen::JsValue {
    fn from(e: WindowError) -> Self {
        js_sys::Error::new(&e.to_string()).into()
    }
}
