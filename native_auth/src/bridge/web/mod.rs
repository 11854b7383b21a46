mod phone;
mod popup;

use async_trait::async_trait;
use std::sync::Arc;

use crate::backend::{AuthUser, PopupAuthBackend};
use crate::config::{NATIVE_AUTH_RECAPTCHA_CONTAINER, NATIVE_AUTH_USE_DEVICE_LANGUAGE};
use crate::provider::{ProviderId, RawProviderResult, SignInRequest};

use super::errors::BridgeError;
use super::events::PhoneEvents;
use super::traits::NativeBridge;
use super::types::{BridgeResponse, Platform};

/// Bridge for contexts without a native layer.
///
/// Provider flows run through the backend's own popup and SMS APIs, so the
/// backend session is already established when a call returns. The
/// `*_with_session` methods hand that session back.
pub struct WebBridge {
    backend: Arc<dyn PopupAuthBackend>,
    events: PhoneEvents,
    use_device_language: bool,
    recaptcha_container: String,
}

impl WebBridge {
    pub fn new(backend: Arc<dyn PopupAuthBackend>) -> Self {
        Self {
            backend,
            events: PhoneEvents::new(),
            use_device_language: *NATIVE_AUTH_USE_DEVICE_LANGUAGE,
            recaptcha_container: NATIVE_AUTH_RECAPTCHA_CONTAINER.clone(),
        }
    }

    pub fn with_device_language(mut self, enabled: bool) -> Self {
        self.use_device_language = enabled;
        self
    }

    /// Element used for the challenge widget when the phone options name none.
    pub fn with_recaptcha_container(mut self, container: impl Into<String>) -> Self {
        self.recaptcha_container = container.into();
        self
    }

    fn localize(&self) {
        if self.use_device_language {
            self.backend.use_device_language();
        }
    }

    fn user_to_link(&self) -> Result<AuthUser, BridgeError> {
        self.backend.current_user().ok_or(BridgeError::NoUserToLink)
    }
}

#[async_trait]
impl NativeBridge for WebBridge {
    fn platform(&self) -> Platform {
        Platform::Web
    }

    fn events(&self) -> &PhoneEvents {
        &self.events
    }

    async fn sign_in(&self, request: &SignInRequest) -> Result<RawProviderResult, BridgeError> {
        Ok(self.sign_in_with_session(request).await?.result)
    }

    async fn link(&self, request: &SignInRequest) -> Result<RawProviderResult, BridgeError> {
        Ok(self.link_with_session(request).await?.result)
    }

    async fn sign_in_with_session(
        &self,
        request: &SignInRequest,
    ) -> Result<BridgeResponse, BridgeError> {
        tracing::debug!("Web sign-in with {}", request.provider_id);
        match request.provider_id {
            ProviderId::Phone => phone::sign_in(self, request.data.as_ref()).await,
            provider_id => popup::sign_in(self, provider_id).await,
        }
    }

    async fn link_with_session(
        &self,
        request: &SignInRequest,
    ) -> Result<BridgeResponse, BridgeError> {
        tracing::debug!("Web link with {}", request.provider_id);
        match request.provider_id {
            ProviderId::Phone => phone::link(self).await,
            provider_id => popup::link(self, provider_id).await,
        }
    }

    async fn sign_out(&self) -> Result<(), BridgeError> {
        self.backend.sign_out().await?;
        tracing::debug!("Web sign-out complete");
        Ok(())
    }
}
