// ============================================================================
// EXPORT SERVICE - Descarga de un documento escaneado desde el navegador
// ============================================================================
// Efecto puro: nunca modifica la colección
// ============================================================================

use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;
use crate::dom::create_element;
use crate::error::ScannerError;
use crate::models::ScannedDocument;
use crate::state::DocumentsState;

pub struct ExportService;

impl ExportService {
    /// Disparar "guardar como" con un `<a download>` temporal (no se inserta en el DOM)
    pub fn export_one(document: &ScannedDocument, suggested_name: &str) -> Result<(), ScannerError> {
        let anchor = create_element("a")
            .and_then(|el| el.dyn_into::<HtmlAnchorElement>().map_err(JsValue::from))
            .map_err(|e| ScannerError::interop(&e))?;

        anchor.set_href(document.data_url());
        anchor.set_type(document.format().mime_type());
        anchor.set_download(suggested_name);
        anchor.click();

        log::info!("⬇️ [EXPORT] Descargando {}", suggested_name);
        Ok(())
    }

    /// Exportar por posición. Un índice obsoleto es un no-op (`Ok(false)`).
    pub fn export_at(documents: &DocumentsState, index: usize, prefix: &str) -> Result<bool, ScannerError> {
        let Some(document) = documents.get(index) else {
            log::warn!("⚠️ [EXPORT] No hay documento en la posición {}", index);
            return Ok(false);
        };

        Self::export_one(&document, &document.file_name(prefix, index))?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ChangeNotifier;

    #[test]
    fn stale_index_exports_nothing() {
        let documents = DocumentsState::new(ChangeNotifier::new());
        assert_eq!(ExportService::export_at(&documents, 0, "scanned-document"), Ok(false));
        assert_eq!(ExportService::export_at(&documents, 42, "scanned-document"), Ok(false));
    }
}
