pub mod session_viewmodel;
pub mod capture_viewmodel;

pub use session_viewmodel::SessionViewModel;
pub use capture_viewmodel::CaptureViewModel;
