pub mod app;
pub mod scanner_panel;
pub mod document_grid;

pub use app::{render_app, PageActions};
pub use scanner_panel::render_scanner_panel;
pub use document_grid::render_document_grid;
