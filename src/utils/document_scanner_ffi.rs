// ============================================================================
// DOCUMENT SCANNER FFI - Bindings a `window.Dynamsoft.DocumentScanner`
// ============================================================================
// Solo declaraciones extern - Sin estado, sin lógica (ver sdk/web.rs)
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Dynamsoft)]
    pub type DocumentScanner;

    /// `new Dynamsoft.DocumentScanner({ license })` - lanza si la licencia es inválida
    #[wasm_bindgen(constructor, js_namespace = Dynamsoft, catch)]
    pub fn new(options: &JsValue) -> Result<DocumentScanner, JsValue>;

    /// Puede ser `undefined` según la versión del bundle
    #[wasm_bindgen(method, getter, js_name = cameraEnhancer)]
    pub fn camera_enhancer(this: &DocumentScanner) -> JsValue;

    /// Abre el flujo interactivo; la promesa resuelve con el resultado o `null`
    #[wasm_bindgen(method, catch)]
    pub fn launch(this: &DocumentScanner) -> Result<js_sys::Promise, JsValue>;

    pub type CameraEnhancer;

    #[wasm_bindgen(method, catch, js_name = setResolution)]
    pub fn set_resolution(this: &CameraEnhancer, resolution: &JsValue) -> Result<JsValue, JsValue>;
}
