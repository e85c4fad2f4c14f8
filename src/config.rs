use serde::{Deserialize, Serialize};
use crate::error::ScannerError;
use crate::models::{ImageFormat, Resolution};
use crate::utils::constants::{
    DEFAULT_CAPTURE_HEIGHT, DEFAULT_CAPTURE_WIDTH, DEFAULT_DOWNLOAD_PREFIX, DEFAULT_ROOT_ELEMENT_ID,
    DEFAULT_SDK_BASE_URL, DEFAULT_SDK_BUNDLE, DEFAULT_SDK_PACKAGE, DEFAULT_SDK_VERSION,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    pub sdk: SdkSource,
    pub license_key: String,
    pub capture_resolution: Resolution,
    pub image_format: ImageFormat,
    pub download_prefix: String,
    pub root_element_id: String,
    pub enable_logging: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            sdk: SdkSource::default(),
            license_key: String::new(),
            capture_resolution: Resolution::new(DEFAULT_CAPTURE_WIDTH, DEFAULT_CAPTURE_HEIGHT),
            image_format: ImageFormat::Png,
            download_prefix: DEFAULT_DOWNLOAD_PREFIX.to_string(),
            root_element_id: DEFAULT_ROOT_ELEMENT_ID.to_string(),
            enable_logging: true,
        }
    }
}

/// Origen del bundle del SDK en el CDN
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdkSource {
    pub base_url: String,
    pub package: String,
    pub version: String,
    pub bundle: String,
}

impl Default for SdkSource {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SDK_BASE_URL.to_string(),
            package: DEFAULT_SDK_PACKAGE.to_string(),
            version: DEFAULT_SDK_VERSION.to_string(),
            bundle: DEFAULT_SDK_BUNDLE.to_string(),
        }
    }
}

impl SdkSource {
    /// URL completa del script, siempre con versión fija
    pub fn url(&self) -> Result<String, ScannerError> {
        let version = self.version.trim();
        if version.is_empty() || version.eq_ignore_ascii_case("latest") {
            return Err(ScannerError::UnpinnedVersion(self.version.clone()));
        }

        Ok(format!(
            "{}/{}@{}/{}",
            self.base_url.trim_end_matches('/'),
            self.package,
            version,
            self.bundle.trim_start_matches('/'),
        ))
    }
}

impl ScannerConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            sdk: SdkSource {
                base_url: option_env!("DOCUMENT_SCANNER_SDK_BASE_URL")
                    .unwrap_or(DEFAULT_SDK_BASE_URL).to_string(),
                package: option_env!("DOCUMENT_SCANNER_SDK_PACKAGE")
                    .unwrap_or(DEFAULT_SDK_PACKAGE).to_string(),
                version: option_env!("DOCUMENT_SCANNER_SDK_VERSION")
                    .unwrap_or(DEFAULT_SDK_VERSION).to_string(),
                bundle: option_env!("DOCUMENT_SCANNER_SDK_BUNDLE")
                    .unwrap_or(DEFAULT_SDK_BUNDLE).to_string(),
            },
            license_key: option_env!("DOCUMENT_SCANNER_LICENSE")
                .unwrap_or("").to_string(),
            capture_resolution: Resolution::new(
                option_env!("CAPTURE_WIDTH")
                    .and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_CAPTURE_WIDTH),
                option_env!("CAPTURE_HEIGHT")
                    .and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_CAPTURE_HEIGHT),
            ),
            image_format: defaults.image_format,
            download_prefix: option_env!("DOWNLOAD_FILE_PREFIX")
                .unwrap_or(DEFAULT_DOWNLOAD_PREFIX).to_string(),
            root_element_id: option_env!("ROOT_ELEMENT_ID")
                .unwrap_or(DEFAULT_ROOT_ELEMENT_ID).to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn has_license(&self) -> bool {
        !self.license_key.trim().is_empty()
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: ScannerConfig = ScannerConfig::from_env();
}
