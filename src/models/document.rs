use serde::{Deserialize, Serialize};
use crate::error::ScannerError;

/// Formato de codificación de las imágenes escaneadas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    Png,
}

impl ImageFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
        }
    }
}

/// Resolución de captura pedida a la cámara
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Documento escaneado: imagen autocontenida como data URI
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedDocument {
    data_url: String,
    format: ImageFormat,
    // Número de escaneo en la página (sólo para logs); 0 hasta entrar a la colección
    sequence: u64,
}

impl ScannedDocument {
    /// Valida que el payload sea un data URI no vacío del formato esperado.
    /// Un canvas de tamaño cero devuelve `"data:,"`.
    pub fn from_data_url(data_url: String, format: ImageFormat) -> Result<Self, ScannerError> {
        let prefix = format!("data:{}", format.mime_type());
        let has_payload = data_url
            .split_once(',')
            .map(|(_, payload)| !payload.is_empty())
            .unwrap_or(false);

        if !data_url.starts_with(&prefix) || !has_payload {
            return Err(ScannerError::CaptureFailure(format!(
                "Scanner returned an empty or non-{} image",
                format.extension().to_uppercase()
            )));
        }

        Ok(Self { data_url, format, sequence: 0 })
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub(crate) fn with_sequence(self, sequence: u64) -> Self {
        Self { sequence, ..self }
    }

    /// Nombre sugerido para la descarga, `position` empieza en 0
    pub fn file_name(&self, prefix: &str, position: usize) -> String {
        format!("{}-{}.{}", prefix, position + 1, self.format.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG: &str = "data:image/png;base64,iVBORw0KGgo=";

    #[test]
    fn accepts_png_data_url() {
        let doc = ScannedDocument::from_data_url(PNG.to_string(), ImageFormat::Png).unwrap();
        assert_eq!(doc.data_url(), PNG);
        assert_eq!(doc.format(), ImageFormat::Png);
        assert_eq!(doc.sequence(), 0);
    }

    #[test]
    fn rejects_empty_canvas_payload() {
        let err = ScannedDocument::from_data_url("data:,".to_string(), ImageFormat::Png).unwrap_err();
        assert!(matches!(err, ScannerError::CaptureFailure(_)));
    }

    #[test]
    fn rejects_other_mime_types() {
        let jpeg = "data:image/jpeg;base64,/9j/4AAQ".to_string();
        assert!(ScannedDocument::from_data_url(jpeg, ImageFormat::Png).is_err());
    }

    #[test]
    fn file_names_are_one_based() {
        let doc = ScannedDocument::from_data_url(PNG.to_string(), ImageFormat::Png).unwrap();
        assert_eq!(doc.file_name("scanned-document", 0), "scanned-document-1.png");
        assert_eq!(doc.file_name("scanned-document", 4), "scanned-document-5.png");
    }

    #[test]
    fn resolution_displays_as_dimensions() {
        assert_eq!(Resolution::new(3840, 2160).to_string(), "3840x2160");
    }
}
