// ============================================================================
// SCANNER PANEL VIEW - Alerta de error + botón de captura
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::models::SdkLoadState;
use crate::state::ScannerState;

/// Texto del botón según el estado
pub fn scan_button_label(state: &ScannerState) -> &'static str {
    if state.capture_in_progress() {
        "Scanning..."
    } else if matches!(state.load_state(), SdkLoadState::NotStarted | SdkLoadState::Loading) {
        "Loading..."
    } else {
        "Start Scanning"
    }
}

/// Tooltip del botón cuando el último intento falló
pub fn scan_button_title(state: &ScannerState) -> Option<String> {
    let attempt = state.capture_attempt();
    match attempt.error {
        Some(error) if !attempt.in_progress => Some(format!("Last scan failed: {}", error)),
        _ => None,
    }
}

fn render_alert(message: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("alert alert-destructive")
        .attr("role", "alert")?
        .child(ElementBuilder::new("span")?.class("alert-icon").text("⚠").build())?
        .child(ElementBuilder::new("span")?.class("alert-description").text(message).build())?
        .build())
}

/// Renderizar panel del scanner
pub fn render_scanner_panel(state: &ScannerState, on_scan: Rc<dyn Fn()>) -> Result<Element, JsValue> {
    let alert = match state.message() {
        Some(message) => Some(render_alert(&message)?),
        None => None,
    };

    let mut button = ElementBuilder::new("button")?
        .class("btn btn-primary btn-lg btn-scan")
        .attr("type", "button")?
        .disabled(!state.can_capture())?
        .text(scan_button_label(state));
    if let Some(title) = scan_button_title(state) {
        button = button.attr("title", &title)?;
    }
    let button = button.on_click(move |_e| on_scan())?.build();

    Ok(ElementBuilder::new("div")?
        .class("card scanner-card")
        .child(
            ElementBuilder::new("div")?
                .class("card-content")
                .child_opt(alert)?
                .child(button)?
                .build(),
        )?
        .build())
}
