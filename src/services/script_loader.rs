// ============================================================================
// SCRIPT LOADER - Inyecta el bundle del SDK en el documento
// ============================================================================
// Un solo <script> por página. Al desmontar se quita el elemento, pero el
// global `Dynamsoft` ya definido sigue vivo (no hay descarga real).
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, HtmlScriptElement};
use crate::config::SdkSource;
use crate::dom::{append_child, body, create_element};
use crate::error::ScannerError;
use crate::models::LoadEvent;
use crate::state::ScannerState;

pub struct ScriptLoader {
    state: ScannerState,
}

/// Script montado. Soltarlo desmonta el `<script>`.
pub struct ScriptHandle {
    script: HtmlScriptElement,
    url: String,
    _on_load: Closure<dyn FnMut(Event)>,
    _on_error: Closure<dyn FnMut(Event)>,
}

impl ScriptLoader {
    pub fn new(state: ScannerState) -> Self {
        Self { state }
    }

    /// Montar el script del SDK. `on_loaded` se llama una sola vez, al pasar a `Loaded`.
    /// No reintenta: tras un fallo hace falta recargar la página.
    pub fn load<F>(&self, source: &SdkSource, on_loaded: F) -> Result<ScriptHandle, ScannerError>
    where
        F: Fn() + 'static,
    {
        if !self.state.apply_load_event(LoadEvent::Mount) {
            return Err(ScannerError::LoadAlreadyStarted);
        }

        let url = match source.url() {
            Ok(url) => url,
            Err(err) => return Err(self.fail(err.to_string(), err)),
        };

        match self.mount(&url, on_loaded) {
            Ok(handle) => {
                log::info!("📦 [LOADER] Cargando SDK desde {}", url);
                Ok(handle)
            }
            Err(err) => Err(self.fail(err.to_string(), err)),
        }
    }

    fn mount<F>(&self, url: &str, on_loaded: F) -> Result<ScriptHandle, ScannerError>
    where
        F: Fn() + 'static,
    {
        let script = create_element("script")
            .and_then(|el| el.dyn_into::<HtmlScriptElement>().map_err(JsValue::from))
            .map_err(|e| ScannerError::interop(&e))?;
        script.set_src(url);
        script.set_async(true);

        let on_load = {
            let state = self.state.clone();
            Closure::wrap(Box::new(move |_e: Event| {
                if state.apply_load_event(LoadEvent::ScriptLoaded) {
                    log::info!("✅ [LOADER] SDK cargado");
                    on_loaded();
                }
            }) as Box<dyn FnMut(Event)>)
        };

        let on_error = {
            let state = self.state.clone();
            let url = url.to_string();
            Closure::wrap(Box::new(move |_e: Event| {
                log::error!("❌ [LOADER] No se pudo cargar {}", url);
                state.apply_load_event(LoadEvent::ScriptFailed(format!("script error: {}", url)));
            }) as Box<dyn FnMut(Event)>)
        };

        script.set_onload(Some(on_load.as_ref().unchecked_ref()));
        script.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        let parent = body().ok_or_else(|| ScannerError::Interop("document has no <body>".to_string()))?;
        append_child(&parent, &script).map_err(|e| ScannerError::interop(&e))?;

        Ok(ScriptHandle {
            script,
            url: url.to_string(),
            _on_load: on_load,
            _on_error: on_error,
        })
    }

    fn fail(&self, reason: String, err: ScannerError) -> ScannerError {
        log::error!("❌ [LOADER] {}", reason);
        self.state.apply_load_event(LoadEvent::ScriptFailed(reason));
        err
    }
}

impl ScriptHandle {
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for ScriptHandle {
    fn drop(&mut self) {
        // Desconectar callbacks antes de soltar los closures
        self.script.set_onload(None);
        self.script.set_onerror(None);
        self.script.remove();
        log::info!("🧹 [LOADER] <script> del SDK desmontado");
    }
}
