use async_trait::async_trait;

use super::credential::AuthCredential;
use super::errors::BackendError;
use super::providers::OAuthProvider;
use super::types::{AuthUser, ConfirmationResult, RecaptchaVerifier, UserCredential};

/// Credential-based operations every identity backend offers.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// The user of the current session, if any.
    fn current_user(&self) -> Option<AuthUser>;

    async fn sign_in_with_credential(
        &self,
        credential: AuthCredential,
    ) -> Result<UserCredential, BackendError>;

    /// Attach `credential` to `user`, which must be the signed-in user.
    async fn link_with_credential(
        &self,
        user: &AuthUser,
        credential: AuthCredential,
    ) -> Result<UserCredential, BackendError>;

    async fn sign_out(&self) -> Result<(), BackendError>;
}

/// Browser-side operations used by the web fallback when no native bridge exists.
#[async_trait]
pub trait PopupAuthBackend: AuthBackend {
    /// Localise provider popups and SMS messages to the device language.
    fn use_device_language(&self);

    async fn sign_in_with_popup(
        &self,
        provider: &OAuthProvider,
    ) -> Result<UserCredential, BackendError>;

    async fn link_with_popup(
        &self,
        user: &AuthUser,
        provider: &OAuthProvider,
    ) -> Result<UserCredential, BackendError>;

    /// Solve the challenge and send an SMS code to `phone_number`.
    async fn sign_in_with_phone_number(
        &self,
        phone_number: &str,
        verifier: &RecaptchaVerifier,
    ) -> Result<ConfirmationResult, BackendError>;

    /// Finish an SMS verification, signing the user in.
    async fn confirm(
        &self,
        confirmation: &ConfirmationResult,
        verification_code: &str,
    ) -> Result<UserCredential, BackendError>;

    async fn get_id_token(&self, user: &AuthUser) -> Result<String, BackendError>;
}
