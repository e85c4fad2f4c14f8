// ============================================================================
// APP - Aplicación principal
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{append_child, get_element_by_id, release_listeners, set_inner_html};
use crate::sdk::{DynamsoftSdk, SdkOptions};
use crate::services::{ExportService, ScriptHandle, ScriptLoader};
use crate::state::AppState;
use crate::viewmodels::{CaptureViewModel, SessionViewModel};
use crate::views::{render_app, PageActions};

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
    actions: PageActions,
    session: Rc<SessionViewModel<DynamsoftSdk>>,
    script: Option<ScriptHandle>,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(&CONFIG.root_element_id)
            .ok_or_else(|| JsValue::from_str(&format!("No #{} element found", CONFIG.root_element_id)))?;

        if !CONFIG.has_license() {
            log::warn!("⚠️ [APP] DOCUMENT_SCANNER_LICENSE vacío, el SDK rechazará la inicialización");
        }

        let state = AppState::new();

        let session = Rc::new(SessionViewModel::new(
            DynamsoftSdk,
            SdkOptions { license: CONFIG.license_key.clone() },
            CONFIG.capture_resolution,
            state.scanner.clone(),
        ));
        let capture = Rc::new(CaptureViewModel::new(
            session.clone(),
            state.scanner.clone(),
            state.documents.clone(),
            CONFIG.image_format,
        ));

        let actions = Self::build_actions(&state, capture);

        // Varias notificaciones seguidas producen un solo re-render
        let render_scheduled = Rc::new(Cell::new(false));
        state.subscribe_to_changes(move || {
            if render_scheduled.replace(true) {
                return;
            }
            let render_scheduled = render_scheduled.clone();
            gloo_timers::callback::Timeout::new(0, move || {
                render_scheduled.set(false);
                crate::rerender_app();
            }).forget();
        });

        Ok(Self {
            state,
            root,
            actions,
            session,
            script: None,
        })
    }

    fn build_actions(
        state: &AppState,
        capture: Rc<CaptureViewModel<DynamsoftSdk>>,
    ) -> PageActions {
        let on_scan: Rc<dyn Fn()> = Rc::new(move || {
            let capture = capture.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match capture.capture().await {
                    Ok(outcome) => log::debug!("📸 [APP] Resultado de captura: {:?}", outcome),
                    // Ya publicado en el slot de mensaje
                    Err(err) => log::debug!("📸 [APP] Captura terminó con error: {}", err),
                }
            });
        });

        let on_download: Rc<dyn Fn(usize)> = {
            let documents = state.documents.clone();
            let scanner = state.scanner.clone();
            Rc::new(move |index: usize| {
                if let Err(err) = ExportService::export_at(&documents, index, &CONFIG.download_prefix) {
                    log::error!("❌ [APP] Error descargando documento {}: {}", index, err);
                    scanner.report(&err);
                }
            })
        };

        let on_delete: Rc<dyn Fn(usize)> = {
            let documents = state.documents.clone();
            Rc::new(move |index: usize| {
                documents.remove_at(index);
            })
        };

        let on_clear: Rc<dyn Fn()> = {
            let documents = state.documents.clone();
            Rc::new(move || documents.clear())
        };

        PageActions { on_scan, on_download, on_delete, on_clear }
    }

    /// Montar el script del SDK; al cargar se dispara la inicialización (una vez)
    pub fn start(&mut self) {
        let loader = ScriptLoader::new(self.state.scanner.clone());
        let session = self.session.clone();

        let result = loader.load(&CONFIG.sdk, move || {
            let session = session.clone();
            wasm_bindgen_futures::spawn_local(async move {
                session.maybe_initialize().await;
            });
        });

        match result {
            Ok(handle) => self.script = Some(handle),
            // El estado ya refleja el fallo
            Err(err) => log::error!("❌ [APP] No se pudo iniciar la carga del SDK: {}", err),
        }
    }

    /// Renderizar aplicación
    pub fn render(&self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let released = release_listeners();
        log::debug!("🎨 [APP] Render ({} listeners del render anterior liberados)", released);
        let view = render_app(&self.state, &self.actions)?;
        append_child(&self.root, &view)
    }

    /// Reintento explícito de inicialización (nunca automático)
    pub fn retry_initialization(&self) {
        let session = self.session.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let status = session.retry_initialization().await;
            log::info!("🔁 [APP] Reintento de inicialización: {:?}", status);
        });
    }

    /// Desmontar: quita el `<script>`; el global del SDK queda definido
    pub fn teardown(&mut self) {
        if let Some(script) = self.script.take() {
            log::info!("👋 [APP] Desmontando {}", script.url());
        }
        set_inner_html(&self.root, "");
        release_listeners();
    }
}
