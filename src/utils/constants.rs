/// CDN y versión fijada del SDK (nunca "latest")
pub const DEFAULT_SDK_BASE_URL: &str = "https://cdn.jsdelivr.net/npm";
pub const DEFAULT_SDK_PACKAGE: &str = "dynamsoft-document-scanner";
pub const DEFAULT_SDK_VERSION: &str = "1.2.0";
pub const DEFAULT_SDK_BUNDLE: &str = "dist/dds.bundle.js";

/// Resolución objetivo (4K), negociación best-effort
pub const DEFAULT_CAPTURE_WIDTH: u32 = 3840;
pub const DEFAULT_CAPTURE_HEIGHT: u32 = 2160;

pub const DEFAULT_DOWNLOAD_PREFIX: &str = "scanned-document";
pub const DEFAULT_ROOT_ELEMENT_ID: &str = "app";

/// Mensajes por defecto cuando el vendor lanza sin `message`
pub const INIT_FAILED_FALLBACK: &str = "Failed to initialize scanner. Please check your license key.";
pub const CAPTURE_FAILED_FALLBACK: &str = "Failed to scan document. Please try again.";
