//! Clipboard Commands
//!
//! Browser Clipboard API binding used by the code-block copy buttons.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = writeText, catch)]
    async fn write_text_js(text: &str) -> Result<JsValue, JsValue>;
}

/// Put `text` on the system clipboard
pub async fn write_text(text: &str) -> Result<(), String> {
    write_text_js(text)
        .await
        .map(|_| ())
        .map_err(|e| format!("Clipboard write failed: {:?}", e))
}
