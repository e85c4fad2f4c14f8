// ============================================================================
// DOCUMENT GRID VIEW - Documentos escaneados con descargar / eliminar
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::models::ScannedDocument;
use crate::state::DocumentsState;
use crate::views::PageActions;

/// "1 document scanned" / "N documents scanned"
pub fn documents_summary(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{} document{} scanned", count, plural)
}

fn render_document_card(
    document: &ScannedDocument,
    index: usize,
    actions: &PageActions,
) -> Result<Element, JsValue> {
    let position = index + 1;

    let image = ElementBuilder::new("img")?
        .class("document-image")
        .attr("src", document.data_url())?
        .attr("alt", &format!("Scanned document {}", position))?
        .build();

    let download_btn = {
        let on_download = actions.on_download.clone();
        ElementBuilder::new("button")?
            .class("btn btn-secondary btn-sm")
            .attr("type", "button")?
            .attr("title", "Download")?
            .text("⬇")
            .on_click(move |_e| on_download(index))?
            .build()
    };

    let delete_btn = {
        let on_delete = actions.on_delete.clone();
        ElementBuilder::new("button")?
            .class("btn btn-destructive btn-sm")
            .attr("type", "button")?
            .attr("title", "Delete")?
            .text("🗑")
            .on_click(move |_e| on_delete(index))?
            .build()
    };

    let overlay = ElementBuilder::new("div")?
        .class("document-actions")
        .child(download_btn)?
        .child(delete_btn)?
        .build();

    let caption = ElementBuilder::new("div")?
        .class("document-caption")
        .text(&format!("Document {}", position))
        .build();

    Ok(ElementBuilder::new("div")?
        .class("document-card")
        .child(image)?
        .child(overlay)?
        .child(caption)?
        .build())
}

/// Renderizar la grilla. `None` cuando no hay documentos.
pub fn render_document_grid(
    documents: &DocumentsState,
    actions: &PageActions,
) -> Result<Option<Element>, JsValue> {
    if documents.is_empty() {
        return Ok(None);
    }
    let items = documents.snapshot();

    let clear_btn = {
        let on_clear = actions.on_clear.clone();
        ElementBuilder::new("button")?
            .class("btn btn-outline btn-sm")
            .attr("type", "button")?
            .text("🗑 Clear All")
            .on_click(move |_e| on_clear())?
            .build()
    };

    let header = ElementBuilder::new("div")?
        .class("card-header documents-header")
        .child(
            ElementBuilder::new("div")?
                .child(ElementBuilder::new("h2")?.class("card-title").text("Scanned Documents").build())?
                .child(
                    ElementBuilder::new("p")?
                        .class("card-description")
                        .text(&documents_summary(items.len()))
                        .build(),
                )?
                .build(),
        )?
        .child(clear_btn)?
        .build();

    let mut grid = ElementBuilder::new("div")?.class("documents-grid");
    for (index, document) in items.iter().enumerate() {
        grid = grid.child(render_document_card(document, index, actions)?)?;
    }

    let card = ElementBuilder::new("div")?
        .class("card documents-card")
        .child(header)?
        .child(ElementBuilder::new("div")?.class("card-content").child(grid.build())?.build())?
        .build();

    Ok(Some(card))
}
