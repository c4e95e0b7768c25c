//! Shared Tokio runtime and mock backend helpers for integration tests.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use appraise::HttpAnalysisGateway;
use rstest_bdd::Slot;
use tokio::runtime::Runtime;
use url::Url;
use wiremock::{Mock, MockServer};

/// Shared runtime wrapper that can be stored in an `rstest-bdd` Slot.
#[derive(Clone)]
pub struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    pub fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

/// Ensures a Tokio runtime and Wiremock server are initialised.
///
/// # Errors
///
/// Returns an error if the Tokio runtime cannot be created or if the slots behave unexpectedly.
pub fn ensure_runtime_and_server(
    runtime: &Slot<SharedRuntime>,
    server: &Slot<MockServer>,
) -> Result<SharedRuntime, io::Error> {
    if runtime.with_ref(|_| ()).is_none() {
        runtime.set(SharedRuntime::new(Runtime::new()?));
    }

    let shared_runtime = runtime
        .get()
        .ok_or_else(|| io::Error::other("runtime not initialised after set"))?;

    if server.with_ref(|_| ()).is_none() {
        server.set(shared_runtime.block_on(MockServer::start()));
    }

    Ok(shared_runtime)
}

/// Mounts `mock` on the stored mock backend.
///
/// # Errors
///
/// Returns an error if the runtime or server cannot be initialised.
pub fn mount_mock(
    runtime: &Slot<SharedRuntime>,
    server: &Slot<MockServer>,
    mock: Mock,
) -> Result<(), io::Error> {
    let shared_runtime = ensure_runtime_and_server(runtime, server)?;

    server
        .with_ref(|server| shared_runtime.block_on(mock.mount(server)))
        .ok_or_else(|| io::Error::other("mock server not initialised"))
}

/// Builds a gateway pointing at the stored mock backend.
///
/// # Errors
///
/// Returns an error if the server is missing or the gateway cannot be built.
pub fn gateway_for(server: &Slot<MockServer>) -> Result<HttpAnalysisGateway, io::Error> {
    let uri = server
        .with_ref(MockServer::uri)
        .ok_or_else(|| io::Error::other("mock server URL missing"))?;
    let api_base = Url::parse(&uri).map_err(io::Error::other)?;

    HttpAnalysisGateway::new(api_base, Duration::from_secs(5)).map_err(io::Error::other)
}
