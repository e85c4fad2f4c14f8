// ============================================================================
// APP STATE - Estado global de la página (vida = vida de la página)
// ============================================================================

use crate::state::{ChangeNotifier, DocumentsState, ScannerState};

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub scanner: ScannerState,
    pub documents: DocumentsState,
    notifier: ChangeNotifier,
}

impl AppState {
    /// Crear nuevo estado; nada se restaura, los escaneos no sobreviven a un reload
    pub fn new() -> Self {
        let notifier = ChangeNotifier::new();
        Self {
            scanner: ScannerState::new(notifier.clone()),
            documents: DocumentsState::new(notifier.clone()),
            notifier,
        }
    }

    /// Suscribirse a cambios de cualquier parte del estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.notifier.subscribe(callback);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
