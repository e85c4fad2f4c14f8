// ============================================================================
// CAPTURE VIEWMODEL - Lanza el flujo de captura y agrega el resultado
// ============================================================================

use std::rc::Rc;
use crate::error::ScannerError;
use crate::models::{ImageFormat, InitStatus, SdkLoadState, ScannedDocument};
use crate::sdk::{CaptureOutput, DocumentScannerSdk, ScannerHandle};
use crate::state::{DocumentsState, ScannerState};
use crate::viewmodels::SessionViewModel;

/// Resultado de una llamada a `capture()` que no es un error
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureOutcome {
    /// Documento agregado en esta posición
    Appended { index: usize },
    /// El usuario salió del flujo sin imagen corregida
    Cancelled,
    /// Ya había una captura en curso; la llamada se ignora
    Busy,
}

pub struct CaptureViewModel<S: DocumentScannerSdk> {
    session: Rc<SessionViewModel<S>>,
    state: ScannerState,
    documents: DocumentsState,
    format: ImageFormat,
}

impl<S: DocumentScannerSdk> CaptureViewModel<S> {
    pub fn new(
        session: Rc<SessionViewModel<S>>,
        state: ScannerState,
        documents: DocumentsState,
        format: ImageFormat,
    ) -> Self {
        Self { session, state, documents, format }
    }

    /// Capturar un documento.
    /// Todo error se publica en el slot de mensaje y se devuelve; la sesión sigue lista.
    pub async fn capture(&self) -> Result<CaptureOutcome, ScannerError> {
        let handle = match self.check_preconditions() {
            Ok(handle) => handle,
            Err(err) => {
                log::warn!("⚠️ [CAPTURE] Captura rechazada: {}", err);
                self.state.report(&err);
                return Err(err);
            }
        };

        if self.state.capture_in_progress() {
            log::warn!("⚠️ [CAPTURE] Ya hay una captura en curso, ignorando");
            return Ok(CaptureOutcome::Busy);
        }

        self.state.begin_capture();
        log::info!("📸 [CAPTURE] Abriendo flujo de captura...");

        let result = self.run(&handle).await;

        match result {
            Ok(Some(document)) => {
                let index = self.documents.append(document);
                self.state.finish_capture(None);
                log::info!("✅ [CAPTURE] Documento escaneado ({} en total)", self.documents.len());
                Ok(CaptureOutcome::Appended { index })
            }
            Ok(None) => {
                self.state.finish_capture(None);
                log::info!("↩️ [CAPTURE] Captura cancelada por el usuario");
                Ok(CaptureOutcome::Cancelled)
            }
            Err(err) => {
                log::error!("❌ [CAPTURE] Error escaneando: {}", err);
                self.state.finish_capture(Some(err.to_string()));
                self.state.report(&err);
                Err(err)
            }
        }
    }

    fn check_preconditions(&self) -> Result<Rc<S::Handle>, ScannerError> {
        match self.state.load_state() {
            SdkLoadState::Loaded => {}
            SdkLoadState::Failed(reason) => return Err(ScannerError::LoadFailure { reason }),
            SdkLoadState::NotStarted | SdkLoadState::Loading => return Err(ScannerError::LibraryLoading),
        }

        match self.state.init_status() {
            InitStatus::Ready => {}
            // Sesión todavía arrancando (incluye la negociación de resolución)
            InitStatus::Uninitialized | InitStatus::Initializing => return Err(ScannerError::LibraryLoading),
            InitStatus::InitFailed(_) => return Err(ScannerError::SessionNotReady),
        }
        self.session.handle().ok_or(ScannerError::SessionNotReady)
    }

    async fn run(&self, handle: &S::Handle) -> Result<Option<ScannedDocument>, ScannerError> {
        let Some(output) = handle.launch().await? else {
            return Ok(None);
        };
        match output.encode_corrected_image(self.format)? {
            Some(data_url) => ScannedDocument::from_data_url(data_url, self.format).map(Some),
            None => Ok(None),
        }
    }
}
