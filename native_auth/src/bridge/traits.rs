use async_trait::async_trait;

use crate::provider::{RawProviderResult, SignInRequest};

use super::errors::BridgeError;
use super::events::{CodeReceivedListener, CodeSentListener, PhoneEvents};
use super::types::{BridgeResponse, Platform};

/// Capability that runs provider flows outside the backend.
///
/// Each call is a single request with a single answer. The bridge holds no
/// state the orchestration depends on, so one instance may serve any number
/// of concurrent calls.
#[async_trait]
pub trait NativeBridge: Send + Sync {
    fn platform(&self) -> Platform;

    /// Hub the bridge publishes phone verification events to.
    fn events(&self) -> &PhoneEvents;

    /// Run the provider's sign-in flow and return its raw result.
    async fn sign_in(&self, request: &SignInRequest) -> Result<RawProviderResult, BridgeError>;

    /// Run the provider flow to attach it to the signed-in account.
    async fn link(&self, request: &SignInRequest) -> Result<RawProviderResult, BridgeError>;

    /// Like [`sign_in`](Self::sign_in), also handing back the backend session
    /// when the bridge established it itself.
    async fn sign_in_with_session(
        &self,
        request: &SignInRequest,
    ) -> Result<BridgeResponse, BridgeError> {
        Ok(self.sign_in(request).await?.into())
    }

    /// Like [`link`](Self::link), also handing back the backend session when
    /// the bridge linked through the backend itself.
    async fn link_with_session(
        &self,
        request: &SignInRequest,
    ) -> Result<BridgeResponse, BridgeError> {
        Ok(self.link(request).await?.into())
    }

    /// Tear down the native session.
    async fn sign_out(&self) -> Result<(), BridgeError>;

    fn on_code_sent(&self) -> CodeSentListener {
        self.events().on_code_sent()
    }

    fn on_code_received(&self) -> CodeReceivedListener {
        self.events().on_code_received()
    }

    fn remove_all_listeners(&self) {
        self.events().remove_all_listeners()
    }
}
