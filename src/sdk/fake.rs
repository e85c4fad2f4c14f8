// SDK falso para tests nativos de los viewmodels

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};
use crate::error::ScannerError;
use crate::models::{ImageFormat, Resolution};
use super::{CaptureOutput, DocumentScannerSdk, ScannerHandle, SdkOptions};

pub const PNG_A: &str = "data:image/png;base64,AAAA";
pub const PNG_B: &str = "data:image/png;base64,BBBB";
pub const PNG_C: &str = "data:image/png;base64,CCCC";

/// Devuelve `Pending` una vez para forzar el entrelazado con `join!`
#[derive(Default)]
pub struct YieldNow(bool);

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Negotiation {
    Succeeds,
    Unsupported,
    Fails,
}

/// Guion de la próxima llamada a `launch()`
#[derive(Clone, Debug)]
pub enum Launch {
    Corrected(&'static str),
    NoCorrectedImage,
    Cancelled,
    Throws(&'static str),
}

struct Inner {
    constructs: Cell<usize>,
    construct_error: RefCell<Option<String>>,
    negotiation: Cell<Negotiation>,
    negotiated: RefCell<Vec<Resolution>>,
    yield_in_negotiation: Cell<bool>,
    yield_in_launch: Cell<bool>,
    launches: RefCell<VecDeque<Launch>>,
    launch_calls: Cell<usize>,
}

#[derive(Clone)]
pub struct FakeSdk {
    inner: Rc<Inner>,
}

impl Default for FakeSdk {
    fn default() -> Self {
        Self {
            inner: Rc::new(Inner {
                constructs: Cell::new(0),
                construct_error: RefCell::new(None),
                negotiation: Cell::new(Negotiation::Succeeds),
                negotiated: RefCell::new(Vec::new()),
                yield_in_negotiation: Cell::new(false),
                yield_in_launch: Cell::new(false),
                launches: RefCell::new(VecDeque::new()),
                launch_calls: Cell::new(0),
            }),
        }
    }
}

impl FakeSdk {
    pub fn rejecting_license(message: &str) -> Self {
        let sdk = Self::default();
        *sdk.inner.construct_error.borrow_mut() = Some(message.to_string());
        sdk
    }

    pub fn accept_license(&self) {
        *self.inner.construct_error.borrow_mut() = None;
    }

    pub fn with_negotiation(self, negotiation: Negotiation) -> Self {
        self.inner.negotiation.set(negotiation);
        self
    }

    pub fn yielding(self) -> Self {
        self.inner.yield_in_negotiation.set(true);
        self.inner.yield_in_launch.set(true);
        self
    }

    pub fn script(&self, launch: Launch) {
        self.inner.launches.borrow_mut().push_back(launch);
    }

    pub fn constructs(&self) -> usize {
        self.inner.constructs.get()
    }

    pub fn launch_calls(&self) -> usize {
        self.inner.launch_calls.get()
    }

    pub fn negotiated(&self) -> Vec<Resolution> {
        self.inner.negotiated.borrow().clone()
    }
}

impl DocumentScannerSdk for FakeSdk {
    type Handle = FakeHandle;

    fn construct(&self, options: &SdkOptions) -> Result<Self::Handle, ScannerError> {
        self.inner.constructs.set(self.inner.constructs.get() + 1);
        if let Some(message) = self.inner.construct_error.borrow().clone() {
            return Err(ScannerError::InitFailure(message));
        }
        assert!(!options.license.is_empty(), "tests always pass a license");
        Ok(FakeHandle { inner: self.inner.clone() })
    }
}

pub struct FakeHandle {
    inner: Rc<Inner>,
}

impl ScannerHandle for FakeHandle {
    type Output = FakeOutput;

    async fn negotiate_resolution(&self, target: Resolution) -> Result<(), ScannerError> {
        if self.inner.yield_in_negotiation.get() {
            YieldNow::default().await;
        }
        match self.inner.negotiation.get() {
            Negotiation::Succeeds => {
                self.inner.negotiated.borrow_mut().push(target);
                Ok(())
            }
            Negotiation::Unsupported => Err(ScannerError::ResolutionUnsupported),
            Negotiation::Fails => Err(ScannerError::Negotiation("OverconstrainedError".into())),
        }
    }

    async fn launch(&self) -> Result<Option<Self::Output>, ScannerError> {
        self.inner.launch_calls.set(self.inner.launch_calls.get() + 1);
        if self.inner.yield_in_launch.get() {
            YieldNow::default().await;
        }
        let next = self.inner.launches.borrow_mut().pop_front().unwrap_or(Launch::Cancelled);
        match next {
            Launch::Corrected(url) => Ok(Some(FakeOutput { corrected: Some(url) })),
            Launch::NoCorrectedImage => Ok(Some(FakeOutput { corrected: None })),
            Launch::Cancelled => Ok(None),
            Launch::Throws(message) => Err(ScannerError::CaptureFailure(message.to_string())),
        }
    }
}

pub struct FakeOutput {
    corrected: Option<&'static str>,
}

impl CaptureOutput for FakeOutput {
    fn encode_corrected_image(&self, _format: ImageFormat) -> Result<Option<String>, ScannerError> {
        Ok(self.corrected.map(str::to_string))
    }
}
