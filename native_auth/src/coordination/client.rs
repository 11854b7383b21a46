use std::sync::Arc;

use crate::backend::{AuthBackend, AuthCredential, AuthUser, PopupAuthBackend};
use crate::bridge::{CodeReceivedListener, CodeSentListener, NativeBridge, Platform, WebBridge};
use crate::provider::{PhoneSignInOptions, ProviderEntry, RawProviderResult, SignInRequest, lookup};

use super::errors::AuthError;
use super::types::CredentialResult;

/// Drives a provider flow through the bridge, then completes it against the
/// backend.
///
/// Holds no per-call state; concurrent calls are independent.
#[derive(Clone)]
pub struct AuthClient {
    bridge: Arc<dyn NativeBridge>,
    backend: Arc<dyn AuthBackend>,
}

impl AuthClient {
    pub fn new(bridge: Arc<dyn NativeBridge>, backend: Arc<dyn AuthBackend>) -> Self {
        Self { bridge, backend }
    }

    /// Client for contexts without a native layer, driving `backend`'s own
    /// popup and SMS flows through a [`WebBridge`].
    pub fn with_web_fallback<B>(backend: Arc<B>) -> Self
    where
        B: PopupAuthBackend + 'static,
    {
        let bridge = WebBridge::new(backend.clone());
        Self::new(Arc::new(bridge), backend)
    }

    pub fn platform(&self) -> Platform {
        self.bridge.platform()
    }

    /// Signs in with the given provider.
    ///
    /// Returns `Ok(None)` when the flow is waiting for input, which happens
    /// for a phone sign-in before the SMS code is known. No backend call is
    /// made in that case, nor when the bridge hands back a session it
    /// established itself.
    pub async fn sign_in(
        &self,
        provider_id: impl AsRef<str>,
        data: Option<PhoneSignInOptions>,
    ) -> Result<Option<CredentialResult>, AuthError> {
        let (entry, request) = prepare(provider_id.as_ref(), data)?;
        tracing::debug!("Starting sign-in with {}", request.provider_id);

        let response = self.bridge.sign_in_with_session(&request).await?;
        let result = response.result;
        let Some(credential) = build_credential(&entry, &result)? else {
            return Ok(None);
        };

        let session = match response.session {
            Some(session) => session,
            None => self.backend.sign_in_with_credential(credential).await?,
        };

        tracing::info!("Signed in {} with {}", session.user.uid, entry.provider_id());
        Ok(Some(CredentialResult { session, result }))
    }

    /// Attaches the provider to the signed-in account.
    ///
    /// The bridge runs first; the signed-in user is checked once a credential
    /// exists, and the backend is never called without one. A session handed
    /// back by the bridge is used as is.
    pub async fn link(
        &self,
        provider_id: impl AsRef<str>,
        data: Option<PhoneSignInOptions>,
    ) -> Result<Option<CredentialResult>, AuthError> {
        let (entry, request) = prepare(provider_id.as_ref(), data)?;
        tracing::debug!("Starting link with {}", request.provider_id);

        let response = self.bridge.link_with_session(&request).await?;
        let result = response.result;
        let Some(credential) = build_credential(&entry, &result)? else {
            return Ok(None);
        };

        let user = self.user_to_link()?;
        let session = match response.session {
            Some(session) => session,
            None => self.backend.link_with_credential(&user, credential).await?,
        };

        tracing::info!("Linked {} to {}", entry.provider_id(), session.user.uid);
        Ok(Some(CredentialResult { session, result }))
    }

    /// Signs out of the native layer, then the backend.
    ///
    /// A native failure is returned without touching the backend session.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.bridge.sign_out().await?;
        self.backend.sign_out().await?;
        tracing::info!("Signed out");
        Ok(())
    }

    pub fn on_code_sent(&self) -> CodeSentListener {
        self.bridge.on_code_sent()
    }

    pub fn on_code_received(&self) -> CodeReceivedListener {
        self.bridge.on_code_received()
    }

    pub fn remove_all_listeners(&self) {
        self.bridge.remove_all_listeners();
    }

    fn user_to_link(&self) -> Result<AuthUser, AuthError> {
        self.backend
            .current_user()
            .ok_or_else(|| AuthError::NoUserToLink.log())
    }
}

/// Validates the provider and its options before any I/O.
fn prepare(
    provider_id: &str,
    data: Option<PhoneSignInOptions>,
) -> Result<(ProviderEntry, SignInRequest), AuthError> {
    let entry = lookup(provider_id)?;
    let request = SignInRequest::new(entry.provider_id(), data)?;
    Ok((entry, request))
}

fn build_credential(
    entry: &ProviderEntry,
    result: &RawProviderResult,
) -> Result<Option<AuthCredential>, AuthError> {
    let credential = entry.build(result)?;
    if credential.is_none() {
        tracing::debug!("{} flow is waiting for a verification code", entry.provider_id());
    }
    Ok(credential)
}
