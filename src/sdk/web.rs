use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlCanvasElement;
use crate::error::ScannerError;
use crate::models::{ImageFormat, Resolution};
use crate::utils::document_scanner_ffi::{CameraEnhancer, DocumentScanner};
use crate::utils::js_error_message;
use super::{CaptureOutput, DocumentScannerSdk, ScannerHandle, SdkOptions};

fn is_absent(value: &JsValue) -> bool {
    value.is_undefined() || value.is_null()
}

fn negotiation_error(value: &JsValue) -> ScannerError {
    ScannerError::Negotiation(
        js_error_message(value).unwrap_or_else(|| "setResolution rejected".to_string()),
    )
}

/// SDK Dynamsoft cargado en `window.Dynamsoft`
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamsoftSdk;

impl DocumentScannerSdk for DynamsoftSdk {
    type Handle = DynamsoftScanner;

    fn construct(&self, options: &SdkOptions) -> Result<Self::Handle, ScannerError> {
        let js_options = serde_wasm_bindgen::to_value(options)
            .map_err(|e| ScannerError::InitFailure(e.to_string()))?;

        log::info!("📷 [SDK] Construyendo Dynamsoft.DocumentScanner...");
        let inner = DocumentScanner::new(&js_options)
            .map_err(|e| ScannerError::init_from_js(&e))?;

        Ok(DynamsoftScanner { inner })
    }
}

/// Instancia de `Dynamsoft.DocumentScanner`
pub struct DynamsoftScanner {
    inner: DocumentScanner,
}

impl ScannerHandle for DynamsoftScanner {
    type Output = DynamsoftScanResult;

    async fn negotiate_resolution(&self, target: Resolution) -> Result<(), ScannerError> {
        let enhancer = self.inner.camera_enhancer();
        if is_absent(&enhancer) {
            return Err(ScannerError::ResolutionUnsupported);
        }
        let enhancer: CameraEnhancer = enhancer.unchecked_into();

        let js_target = serde_wasm_bindgen::to_value(&target)
            .map_err(|e| ScannerError::Negotiation(e.to_string()))?;

        // Una propiedad inexistente lanza TypeError y cae en el catch
        let returned = enhancer
            .set_resolution(&js_target)
            .map_err(|e| negotiation_error(&e))?;

        if let Ok(promise) = returned.dyn_into::<js_sys::Promise>() {
            JsFuture::from(promise)
                .await
                .map_err(|e| negotiation_error(&e))?;
        }
        Ok(())
    }

    async fn launch(&self) -> Result<Option<Self::Output>, ScannerError> {
        let promise = self.inner.launch().map_err(|e| ScannerError::capture_from_js(&e))?;
        let result = JsFuture::from(promise)
            .await
            .map_err(|e| ScannerError::capture_from_js(&e))?;

        if is_absent(&result) {
            return Ok(None);
        }
        Ok(Some(DynamsoftScanResult { raw: result }))
    }
}

/// Resultado de `launch()` tal como lo entrega el SDK
pub struct DynamsoftScanResult {
    raw: JsValue,
}

impl CaptureOutput for DynamsoftScanResult {
    fn encode_corrected_image(&self, format: ImageFormat) -> Result<Option<String>, ScannerError> {
        let corrected = js_sys::Reflect::get(&self.raw, &JsValue::from_str("correctedImageResult"))
            .map_err(|e| ScannerError::capture_from_js(&e))?;
        if is_absent(&corrected) {
            return Ok(None);
        }

        let to_canvas = js_sys::Reflect::get(&corrected, &JsValue::from_str("toCanvas"))
            .map_err(|e| ScannerError::capture_from_js(&e))?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| ScannerError::CaptureFailure("Scan result cannot be rendered".to_string()))?;

        let canvas = to_canvas
            .call0(&corrected)
            .map_err(|e| ScannerError::capture_from_js(&e))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| ScannerError::CaptureFailure("Scan result is not a canvas".to_string()))?;

        let data_url = canvas
            .to_data_url_with_type(format.mime_type())
            .map_err(|e| ScannerError::capture_from_js(&e))?;

        Ok(Some(data_url))
    }
}
