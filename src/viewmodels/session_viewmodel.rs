// ============================================================================
// SESSION VIEWMODEL - Ciclo de vida de la instancia única del scanner
// ============================================================================
// Dueño exclusivo del handle del SDK. Una vez creado nunca se reemplaza;
// sólo un reload de la página reinicia la sesión.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use crate::error::ScannerError;
use crate::models::{InitStatus, Resolution};
use crate::sdk::{DocumentScannerSdk, ScannerHandle, SdkOptions};
use crate::state::ScannerState;

pub struct SessionViewModel<S: DocumentScannerSdk> {
    sdk: S,
    options: SdkOptions,
    target_resolution: Resolution,
    state: ScannerState,
    handle: RefCell<Option<Rc<S::Handle>>>,
    // Guard de re-entrada: como mucho una inicialización en vuelo
    initializing: Cell<bool>,
}

impl<S: DocumentScannerSdk> SessionViewModel<S> {
    pub fn new(sdk: S, options: SdkOptions, target_resolution: Resolution, state: ScannerState) -> Self {
        Self {
            sdk,
            options,
            target_resolution,
            state,
            handle: RefCell::new(None),
            initializing: Cell::new(false),
        }
    }

    /// Handle listo para capturar (solo lectura, compartido)
    pub fn handle(&self) -> Option<Rc<S::Handle>> {
        self.handle.borrow().clone()
    }

    pub fn status(&self) -> InitStatus {
        self.state.init_status()
    }

    /// Disparo automático al terminar la carga del SDK.
    /// Sólo actúa desde `Uninitialized`: re-evaluarlo N veces inicializa como mucho una vez.
    pub async fn maybe_initialize(&self) -> InitStatus {
        match self.status() {
            InitStatus::Uninitialized => self.ensure_initialized().await,
            other => other,
        }
    }

    /// Reintento explícito tras un fallo; la página nunca lo llama sola
    pub async fn retry_initialization(&self) -> InitStatus {
        match self.status() {
            InitStatus::InitFailed(_) => self.ensure_initialized().await,
            other => other,
        }
    }

    /// Inicializar si se cumplen las precondiciones; si no, devuelve el estado actual.
    pub async fn ensure_initialized(&self) -> InitStatus {
        if !self.state.load_state().is_loaded() {
            log::debug!("⏳ [SESSION] SDK no cargado todavía, inicialización pospuesta");
            return self.status();
        }
        if self.initializing.get() || self.handle.borrow().is_some() {
            return self.status();
        }

        self.initializing.set(true);
        self.state.clear_message();
        self.state.set_init_status(InitStatus::Initializing);
        log::info!("📷 [SESSION] Inicializando scanner...");

        let status = match self.sdk.construct(&self.options) {
            Ok(handle) => {
                let handle = Rc::new(handle);
                *self.handle.borrow_mut() = Some(handle.clone());
                self.negotiate_resolution(&handle).await;
                // Un "espere" publicado durante el arranque ya no aplica
                self.state.dismiss(&ScannerError::LibraryLoading);
                log::info!("✅ [SESSION] Scanner listo");
                InitStatus::Ready
            }
            Err(err) => {
                log::error!("❌ [SESSION] Error inicializando scanner: {}", err);
                self.state.report(&err);
                InitStatus::InitFailed(err.to_string())
            }
        };

        self.state.set_init_status(status.clone());
        self.initializing.set(false);
        status
    }

    /// Best-effort: un fallo aquí sólo baja la calidad, nunca la sesión
    async fn negotiate_resolution(&self, handle: &S::Handle) {
        match handle.negotiate_resolution(self.target_resolution).await {
            Ok(()) => log::info!("🎥 [SESSION] Resolución de cámara fijada a {}", self.target_resolution),
            Err(err) => {
                log::warn!(
                    "⚠️ [SESSION] No se pudo fijar {}: {} (se usa la resolución por defecto)",
                    self.target_resolution,
                    err
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use crate::models::LoadEvent;
    use crate::sdk::fake::{FakeSdk, Negotiation};
    use crate::state::ChangeNotifier;

    fn session(sdk: FakeSdk) -> SessionViewModel<FakeSdk> {
        let state = ScannerState::new(ChangeNotifier::new());
        SessionViewModel::new(
            sdk,
            SdkOptions { license: "test-license".into() },
            Resolution::new(3840, 2160),
            state,
        )
    }

    fn mark_loaded(vm: &SessionViewModel<FakeSdk>) {
        vm.state.apply_load_event(LoadEvent::Mount);
        vm.state.apply_load_event(LoadEvent::ScriptLoaded);
    }

    #[test]
    fn does_nothing_before_sdk_is_loaded() {
        let sdk = FakeSdk::default();
        let vm = session(sdk.clone());

        for _ in 0..5 {
            assert_eq!(block_on(vm.maybe_initialize()), InitStatus::Uninitialized);
        }
        vm.state.apply_load_event(LoadEvent::Mount);
        assert_eq!(block_on(vm.ensure_initialized()), InitStatus::Uninitialized);
        assert_eq!(sdk.constructs(), 0);
    }

    #[test]
    fn initializes_once_however_often_gating_is_reevaluated() {
        let sdk = FakeSdk::default();
        let vm = session(sdk.clone());
        mark_loaded(&vm);

        for _ in 0..4 {
            block_on(vm.maybe_initialize());
            block_on(vm.ensure_initialized());
        }

        assert_eq!(sdk.constructs(), 1);
        assert_eq!(vm.status(), InitStatus::Ready);
        assert!(vm.handle().is_some());
        assert_eq!(sdk.negotiated(), vec![Resolution::new(3840, 2160)]);
    }

    #[test]
    fn concurrent_calls_collapse_into_one_attempt() {
        let sdk = FakeSdk::default().yielding();
        let vm = session(sdk.clone());
        mark_loaded(&vm);

        let (a, b, c) = block_on(async {
            futures::join!(vm.ensure_initialized(), vm.maybe_initialize(), vm.ensure_initialized())
        });

        assert_eq!(sdk.constructs(), 1);
        assert_eq!(a, InitStatus::Ready);
        // Las llamadas solapadas ven la inicialización en vuelo
        assert_eq!(b, InitStatus::Initializing);
        assert_eq!(c, InitStatus::Initializing);
        assert_eq!(vm.status(), InitStatus::Ready);
    }

    #[test]
    fn unsupported_negotiation_still_reaches_ready() {
        let sdk = FakeSdk::default().with_negotiation(Negotiation::Unsupported);
        let vm = session(sdk.clone());
        mark_loaded(&vm);

        assert_eq!(block_on(vm.maybe_initialize()), InitStatus::Ready);
        assert!(vm.handle().is_some());
        assert_eq!(vm.state.message(), None);
    }

    #[test]
    fn failing_negotiation_is_swallowed() {
        let sdk = FakeSdk::default().with_negotiation(Negotiation::Fails);
        let vm = session(sdk);
        mark_loaded(&vm);

        assert_eq!(block_on(vm.maybe_initialize()), InitStatus::Ready);
        assert!(vm.handle().is_some());
        assert_eq!(vm.state.message(), None);
    }

    #[test]
    fn license_rejection_surfaces_vendor_message_verbatim() {
        let sdk = FakeSdk::rejecting_license("The license key has expired.");
        let vm = session(sdk.clone());
        mark_loaded(&vm);

        let status = block_on(vm.maybe_initialize());

        assert_eq!(status, InitStatus::InitFailed("The license key has expired.".into()));
        assert!(vm.handle().is_none());
        assert_eq!(vm.state.message().as_deref(), Some("The license key has expired."));
    }

    #[test]
    fn failure_is_not_auto_retried_but_explicit_retry_works() {
        let sdk = FakeSdk::rejecting_license("invalid license");
        let vm = session(sdk.clone());
        mark_loaded(&vm);

        block_on(vm.maybe_initialize());
        block_on(vm.maybe_initialize());
        assert_eq!(sdk.constructs(), 1);

        sdk.accept_license();
        assert_eq!(block_on(vm.retry_initialization()), InitStatus::Ready);
        assert_eq!(sdk.constructs(), 2);
        assert_eq!(vm.state.message(), None);

        // Con handle creado, el reintento ya no reconstruye
        assert_eq!(block_on(vm.retry_initialization()), InitStatus::Ready);
        assert_eq!(sdk.constructs(), 2);
    }

    #[test]
    fn handle_is_never_replaced() {
        let sdk = FakeSdk::default();
        let vm = session(sdk);
        mark_loaded(&vm);

        block_on(vm.ensure_initialized());
        let first = vm.handle().unwrap();
        block_on(vm.ensure_initialized());
        let second = vm.handle().unwrap();

        assert!(Rc::ptr_eq(&first, &second));
    }
}
