// Utils compartidos

pub mod constants;
pub mod document_scanner_ffi;

use wasm_bindgen::{JsCast, JsValue};

/// Extrae el `message` de una excepción JS (Error, DOMException o string lanzado)
pub fn js_error_message(value: &JsValue) -> Option<String> {
    if let Some(text) = value.as_string() {
        return Some(text).filter(|t| !t.is_empty());
    }

    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        let message: String = error.message().into();
        if !message.is_empty() {
            return Some(message);
        }
    }

    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .filter(|m| !m.is_empty())
}
