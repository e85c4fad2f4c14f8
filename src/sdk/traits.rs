use serde::Serialize;
use crate::error::ScannerError;
use crate::models::{ImageFormat, Resolution};

/// Opciones que recibe el constructor del SDK
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SdkOptions {
    pub license: String,
}

/// Punto de entrada del SDK: construye una instancia de scanner
pub trait DocumentScannerSdk {
    type Handle: ScannerHandle;

    /// Construir el scanner con la licencia (síncrono, puede ser rechazado por el vendor)
    fn construct(&self, options: &SdkOptions) -> Result<Self::Handle, ScannerError>;
}

/// Instancia viva del scanner
#[allow(async_fn_in_trait)]
pub trait ScannerHandle {
    type Output: CaptureOutput;

    /// Negociar resolución de cámara.
    /// `Err(ResolutionUnsupported)` si la instancia no expone la capacidad.
    async fn negotiate_resolution(&self, target: Resolution) -> Result<(), ScannerError>;

    /// Abrir el flujo interactivo de captura.
    /// `Ok(None)` cuando el usuario cancela.
    async fn launch(&self) -> Result<Option<Self::Output>, ScannerError>;
}

/// Resultado de una captura
pub trait CaptureOutput {
    /// Codificar la imagen corregida como data URI.
    /// `Ok(None)` si el resultado no trae imagen corregida.
    fn encode_corrected_image(&self, format: ImageFormat) -> Result<Option<String>, ScannerError>;
}
