// ============================================================================
// ERRORES DEL SCANNER
// ============================================================================
// El Display de cada variante es el mensaje que ve el usuario en la alerta
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;
use crate::utils::constants::{CAPTURE_FAILED_FALLBACK, INIT_FAILED_FALLBACK};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScannerError {
    // -- Carga del script --
    #[error("Failed to load document scanner library")]
    LoadFailure { reason: String },

    #[error("SDK version must be pinned, got '{0}'")]
    UnpinnedVersion(String),

    #[error("Document scanner library load was already started on this page")]
    LoadAlreadyStarted,

    // -- Inicialización (mensaje del vendor tal cual) --
    #[error("{0}")]
    InitFailure(String),

    // -- Captura --
    #[error("{0}")]
    CaptureFailure(String),

    // -- Precondiciones de captura --
    #[error("Scanner library is still loading. Please wait.")]
    LibraryLoading,

    #[error("Scanner initialization failed. Please reload the page.")]
    SessionNotReady,

    // -- Negociación de resolución (nunca se muestra al usuario) --
    #[error("camera resolution negotiation is not supported by this scanner")]
    ResolutionUnsupported,

    #[error("camera resolution negotiation failed: {0}")]
    Negotiation(String),

    // -- Glue DOM/JS --
    #[error("browser interop failed: {0}")]
    Interop(String),
}

impl ScannerError {
    /// Error de inicialización a partir de la excepción del constructor del SDK
    pub fn init_from_js(value: &JsValue) -> Self {
        ScannerError::InitFailure(
            crate::utils::js_error_message(value).unwrap_or_else(|| INIT_FAILED_FALLBACK.to_string()),
        )
    }

    /// Error de captura a partir de la excepción de `launch()`
    pub fn capture_from_js(value: &JsValue) -> Self {
        ScannerError::CaptureFailure(
            crate::utils::js_error_message(value).unwrap_or_else(|| CAPTURE_FAILED_FALLBACK.to_string()),
        )
    }

    pub fn interop(value: &JsValue) -> Self {
        ScannerError::Interop(
            crate::utils::js_error_message(value).unwrap_or_else(|| format!("{:?}", value)),
        )
    }

    /// Errores que sólo se registran en el log y nunca llegan a la alerta
    pub fn is_silent(&self) -> bool {
        matches!(self, ScannerError::ResolutionUnsupported | ScannerError::Negotiation(_))
    }
}
