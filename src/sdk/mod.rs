// Adaptador del SDK de escaneo: interfaz estrecha + implementación web

pub mod traits;
pub mod web;

#[cfg(test)]
pub mod fake;

pub use traits::{DocumentScannerSdk, ScannerHandle, CaptureOutput, SdkOptions};
pub use web::DynamsoftSdk;
