pub mod script_loader;
pub mod export_service;

pub use script_loader::{ScriptLoader, ScriptHandle};
pub use export_service::ExportService;
