//! Console logging for the DOM layer

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Console.log binding for WASM
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);
}
