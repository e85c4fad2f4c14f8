// ============================================================================
// APP VIEW - Página del escáner
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::state::AppState;
use crate::views::{render_document_grid, render_scanner_panel};

/// Acciones del usuario que las vistas conectan a los botones
#[derive(Clone)]
pub struct PageActions {
    pub on_scan: Rc<dyn Fn()>,
    pub on_download: Rc<dyn Fn(usize)>,
    pub on_delete: Rc<dyn Fn(usize)>,
    pub on_clear: Rc<dyn Fn()>,
}

/// Renderizar la página completa
pub fn render_app(state: &AppState, actions: &PageActions) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("div")?
        .class("page-header")
        .child(ElementBuilder::new("h1")?.class("page-title").text("Document Scanner").build())?
        .child(
            ElementBuilder::new("p")?
                .class("page-subtitle")
                .text("Scan documents using your device camera")
                .build(),
        )?
        .build();

    let container = ElementBuilder::new("div")?
        .class("page-container")
        .child(header)?
        .child(render_scanner_panel(&state.scanner, actions.on_scan.clone())?)?
        .child_opt(render_document_grid(&state.documents, actions)?)?
        .build();

    Ok(ElementBuilder::new("div")?.class("page").child(container)?.build())
}
