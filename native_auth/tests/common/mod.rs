
use std::sync::Arc;

use native_auth::{AuthClient, InMemoryAuthBackend, RawProviderResult};

pub use fixtures::*;
pub use scripted_bridge::ScriptedBridge;

/// A client wired to a scripted native bridge over an in-memory backend
pub struct NativeHarness {
    pub backend: Arc<InMemoryAuthBackend>,
    pub bridge: Arc<ScriptedBridge>,
    pub client: AuthClient,
}

impl NativeHarness {
    pub fn new() -> Self {
        Self::build(|bridge| bridge)
    }

    pub fn with_auto_retrieve() -> Self {
        Self::build(ScriptedBridge::with_auto_retrieve)
    }

    /// Scripts the native answer of each result's provider
    pub fn with_results(self, results: impl IntoIterator<Item = RawProviderResult>) -> Self {
        for result in results {
            self.bridge.set_result(result);
        }
        self
    }

    fn build(configure: impl FnOnce(ScriptedBridge) -> ScriptedBridge) -> Self {
        let backend = Arc::new(InMemoryAuthBackend::new().with_sms_code(TEST_SMS_CODE));
        let bridge = Arc::new(configure(ScriptedBridge::new(backend.clone())));
        let client = AuthClient::new(bridge.clone(), backend.clone());
        Self {
            backend,
            bridge,
            client,
        }
    }
}

/// A client using the web fallback over `backend`
pub fn web_client(backend: InMemoryAuthBackend) -> (Arc<InMemoryAuthBackend>, AuthClient) {
    let backend = Arc::new(backend.with_sms_code(TEST_SMS_CODE));
    let client = AuthClient::with_web_fallback(backend.clone());
    (backend, client)
}
