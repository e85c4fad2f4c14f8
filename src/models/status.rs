// ============================================================================
// ESTADOS DEL CICLO DE VIDA - carga del SDK, sesión y captura
// ============================================================================

/// Estado de carga del script del SDK
#[derive(Clone, Debug, PartialEq, Default)]
pub enum SdkLoadState {
    #[default]
    NotStarted,
    Loading,
    Loaded,
    Failed(String),
}

/// Eventos que mueven la máquina de carga
#[derive(Clone, Debug, PartialEq)]
pub enum LoadEvent {
    /// El `<script>` se insertó en el documento
    Mount,
    ScriptLoaded,
    ScriptFailed(String),
}

impl SdkLoadState {
    /// Siguiente estado, o `None` si la transición no es válida.
    /// `Loaded` y `Failed` son terminales.
    pub fn on_event(&self, event: &LoadEvent) -> Option<SdkLoadState> {
        match (self, event) {
            (SdkLoadState::NotStarted, LoadEvent::Mount) => Some(SdkLoadState::Loading),
            (SdkLoadState::Loading, LoadEvent::ScriptLoaded) => Some(SdkLoadState::Loaded),
            (SdkLoadState::Loading, LoadEvent::ScriptFailed(reason)) => {
                Some(SdkLoadState::Failed(reason.clone()))
            }
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, SdkLoadState::Loaded)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SdkLoadState::Loaded | SdkLoadState::Failed(_))
    }
}

/// Estado de inicialización de la sesión del scanner
#[derive(Clone, Debug, PartialEq, Default)]
pub enum InitStatus {
    #[default]
    Uninitialized,
    Initializing,
    Ready,
    InitFailed(String),
}

impl InitStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, InitStatus::Ready)
    }
}

/// Intento de captura en curso (efímero)
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CaptureAttempt {
    pub in_progress: bool,
    pub error: Option<String>,
}
