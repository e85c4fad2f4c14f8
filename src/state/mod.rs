// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod scanner_state;
pub mod documents_state;
pub mod app_state;

pub use reactivity::*;
pub use scanner_state::*;
pub use documents_state::*;
pub use app_state::*;
