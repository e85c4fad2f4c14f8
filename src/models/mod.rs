pub mod status;
pub mod document;

pub use status::{SdkLoadState, LoadEvent, InitStatus, CaptureAttempt};
pub use document::{ScannedDocument, ImageFormat, Resolution};
