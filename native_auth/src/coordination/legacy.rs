//! Per-provider shorthands kept for callers of the older API.

use crate::provider::{PhoneSignInOptions, ProviderId};

use super::client::AuthClient;
use super::errors::AuthError;
use super::types::CredentialResult;

fn phone_options(phone: impl Into<String>, verification_code: Option<&str>) -> PhoneSignInOptions {
    let options = PhoneSignInOptions::new(phone);
    match verification_code {
        Some(code) => options.with_verification_code(code),
        None => options,
    }
}

impl AuthClient {
    pub async fn sign_in_google(&self) -> Result<Option<CredentialResult>, AuthError> {
        self.sign_in(ProviderId::Google, None).await
    }

    pub async fn sign_in_apple(&self) -> Result<Option<CredentialResult>, AuthError> {
        self.sign_in(ProviderId::Apple, None).await
    }

    pub async fn sign_in_facebook(&self) -> Result<Option<CredentialResult>, AuthError> {
        self.sign_in(ProviderId::Facebook, None).await
    }

    pub async fn sign_in_twitter(&self) -> Result<Option<CredentialResult>, AuthError> {
        self.sign_in(ProviderId::Twitter, None).await
    }

    /// Phone sign-in; `Ok(None)` until a verification code is supplied.
    pub async fn sign_in_phone(
        &self,
        phone: impl Into<String>,
        verification_code: Option<&str>,
    ) -> Result<Option<CredentialResult>, AuthError> {
        let options = phone_options(phone, verification_code);
        self.sign_in(ProviderId::Phone, Some(options)).await
    }

    pub async fn link_google(&self) -> Result<Option<CredentialResult>, AuthError> {
        self.link(ProviderId::Google, None).await
    }

    pub async fn link_apple(&self) -> Result<Option<CredentialResult>, AuthError> {
        self.link(ProviderId::Apple, None).await
    }

    pub async fn link_facebook(&self) -> Result<Option<CredentialResult>, AuthError> {
        self.link(ProviderId::Facebook, None).await
    }

    pub async fn link_twitter(&self) -> Result<Option<CredentialResult>, AuthError> {
        self.link(ProviderId::Twitter, None).await
    }

    pub async fn link_phone(
        &self,
        phone: impl Into<String>,
        verification_code: Option<&str>,
    ) -> Result<Option<CredentialResult>, AuthError> {
        let options = phone_options(phone, verification_code);
        self.link(ProviderId::Phone, Some(options)).await
    }
}
