// ============================================================================
// DOCUMENTS STATE - Colección ordenada de documentos escaneados
// ============================================================================
// Orden de inserción = orden de escaneo = orden de visualización.
// Los índices no son estables entre mutaciones.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use crate::models::ScannedDocument;
use crate::state::{ChangeNotifier, ReactiveState};

#[derive(Clone)]
pub struct DocumentsState {
    items: ReactiveState<Vec<ScannedDocument>>,
    // Nunca retrocede, ni con remove_at ni con clear
    last_sequence: Rc<Cell<u64>>,
}

impl DocumentsState {
    pub fn new(notifier: ChangeNotifier) -> Self {
        Self {
            items: ReactiveState::new(Vec::new(), notifier),
            last_sequence: Rc::new(Cell::new(0)),
        }
    }

    /// Agregar al final con el siguiente número de escaneo. Devuelve la posición.
    pub fn append(&self, document: ScannedDocument) -> usize {
        let sequence = self.last_sequence.get() + 1;
        self.last_sequence.set(sequence);
        let document = document.with_sequence(sequence);

        let index = self.items.update(|items| {
            items.push(document);
            items.len() - 1
        });
        log::info!("📄 [STORE] Escaneo #{} agregado en posición {}", sequence, index);
        index
    }

    /// Eliminar por posición; fuera de rango es un no-op
    pub fn remove_at(&self, index: usize) -> Option<ScannedDocument> {
        if index >= self.len() {
            log::warn!("⚠️ [STORE] remove_at({}) fuera de rango, ignorado", index);
            return None;
        }
        let removed = self.items.update(|items| items.remove(index));
        log::info!("🗑️ [STORE] Escaneo #{} eliminado (posición {})", removed.sequence(), index);
        Some(removed)
    }

    pub fn clear(&self) {
        let count = self.len();
        self.items.update(Vec::clear);
        log::info!("🧹 [STORE] {} documentos eliminados", count);
    }

    pub fn get(&self, index: usize) -> Option<ScannedDocument> {
        self.items.with(|items| items.get(index).cloned())
    }

    pub fn len(&self) -> usize {
        self.items.with(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn snapshot(&self) -> Vec<ScannedDocument> {
        self.items.get()
    }
}
