// ============================================================================
// DOCUMENT SCANNER PWA - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Sesión del scanner + captura
// - Services: Carga del script del SDK y descargas
// - State: State Management con Rc<RefCell> + subscribers
// - SDK: Interfaz estrecha sobre `window.Dynamsoft`
// ============================================================================

mod app;
mod config;
mod dom;
mod error;
mod models;
mod sdk;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::CONFIG;

// Instancia única de la página
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() { log::Level::Debug } else { log::Level::Warn };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 Document Scanner - Rust Puro + MVVM");

    let mut app = App::new()?;
    app.render()?;
    app.start();

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-render completo de la página
pub fn rerender_app() {
    APP.with(|app_cell| {
        match app_cell.borrow().as_ref() {
            Some(app) => {
                if let Err(e) = app.render() {
                    log::error!("❌ [APP] Error re-renderizando: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [APP] App no está inicializada"),
        }
    });
}

/// Reintentar la inicialización tras un fallo de licencia (llamable desde JavaScript)
#[wasm_bindgen]
pub fn retry_initialization() {
    APP.with(|app_cell| {
        if let Some(app) = app_cell.borrow().as_ref() {
            app.retry_initialization();
        }
    });
}

/// Desmontar la página (llamable desde JavaScript al navegar fuera)
#[wasm_bindgen]
pub fn teardown() {
    APP.with(|app_cell| {
        if let Some(mut app) = app_cell.borrow_mut().take() {
            app.teardown();
        }
    });
}
