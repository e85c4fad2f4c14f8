// ============================================================================
// SCANNER STATE - Carga del SDK, estado de sesión, captura y slot de mensaje
// ============================================================================

use crate::error::ScannerError;
use crate::models::{CaptureAttempt, InitStatus, LoadEvent, SdkLoadState};
use crate::state::{ChangeNotifier, ReactiveState};

/// Estado del scanner compartido por loader, sesión, captura y vistas
#[derive(Clone)]
pub struct ScannerState {
    load_state: ReactiveState<SdkLoadState>,
    init_status: ReactiveState<InitStatus>,
    capture: ReactiveState<CaptureAttempt>,
    // Un solo mensaje visible; el último gana
    message: ReactiveState<Option<String>>,
}

impl ScannerState {
    pub fn new(notifier: ChangeNotifier) -> Self {
        Self {
            load_state: ReactiveState::new(SdkLoadState::default(), notifier.clone()),
            init_status: ReactiveState::new(InitStatus::default(), notifier.clone()),
            capture: ReactiveState::new(CaptureAttempt::default(), notifier.clone()),
            message: ReactiveState::new(None, notifier),
        }
    }

    // -- Carga del SDK --

    pub fn load_state(&self) -> SdkLoadState {
        self.load_state.get()
    }

    /// Aplicar un evento de carga. Devuelve `false` si la transición no es válida.
    /// Un fallo de carga se publica en el slot de mensaje.
    pub fn apply_load_event(&self, event: LoadEvent) -> bool {
        let current = self.load_state();
        let Some(next) = current.on_event(&event) else {
            if current.is_terminal() {
                log::warn!("⚠️ [LOADER] Estado terminal {:?}, evento {:?} ignorado", current, event);
            } else {
                log::warn!("⚠️ [LOADER] Transición ignorada: {:?} + {:?}", current, event);
            }
            return false;
        };

        log::info!("🔄 [LOADER] {:?} -> {:?}", current, next);
        if let SdkLoadState::Failed(reason) = &next {
            self.report(&ScannerError::LoadFailure { reason: reason.clone() });
        }
        self.load_state.set(next);
        true
    }

    // -- Sesión --

    pub fn init_status(&self) -> InitStatus {
        self.init_status.get()
    }

    pub fn set_init_status(&self, status: InitStatus) {
        self.init_status.set(status);
    }

    pub fn is_ready(&self) -> bool {
        self.init_status.with(InitStatus::is_ready)
    }

    // -- Captura --

    pub fn capture_attempt(&self) -> CaptureAttempt {
        self.capture.get()
    }

    pub fn capture_in_progress(&self) -> bool {
        self.capture.with(|c| c.in_progress)
    }

    /// Marca la captura en curso y limpia el mensaje anterior
    pub fn begin_capture(&self) {
        self.capture.set(CaptureAttempt { in_progress: true, error: None });
        self.clear_message();
    }

    pub fn finish_capture(&self, error: Option<String>) {
        self.capture.set(CaptureAttempt { in_progress: false, error });
    }

    /// El botón de captura sólo está activo con SDK cargado, sesión lista y sin captura en curso
    pub fn can_capture(&self) -> bool {
        self.load_state.with(SdkLoadState::is_loaded) && self.is_ready() && !self.capture_in_progress()
    }

    // -- Mensaje --

    pub fn message(&self) -> Option<String> {
        self.message.get()
    }

    pub fn report(&self, error: &ScannerError) {
        if error.is_silent() {
            log::warn!("⚠️ [SCANNER] {}", error);
            return;
        }
        self.message.set(Some(error.to_string()));
    }

    /// Quita el mensaje sólo si todavía es el de `error` (p.ej. "espere" ya resuelto)
    pub fn dismiss(&self, error: &ScannerError) {
        let text = error.to_string();
        if self.message.with(|m| m.as_deref() == Some(text.as_str())) {
            self.message.set(None);
        }
    }

    pub fn clear_message(&self) {
        if self.message.with(Option::is_some) {
            self.message.set(None);
        }
    }
}
