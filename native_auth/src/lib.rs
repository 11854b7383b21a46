//! native_auth - Native identity-provider sign-in bridge
//!
//! Triggers the native sign-in, link and sign-out flows of Google, Apple,
//! Facebook, Twitter and phone (SMS) providers through a [`NativeBridge`],
//! then completes the handshake against an [`AuthBackend`].
//!
//! Contexts without a native layer use [`WebBridge`], which drives the
//! backend's own popup and SMS flows instead.
//!
//! ```no_run
//! use std::sync::Arc;
//! use native_auth::{AuthClient, InMemoryAuthBackend};
//!
//! # async fn run() -> Result<(), native_auth::AuthError> {
//! let client = AuthClient::with_web_fallback(Arc::new(InMemoryAuthBackend::new()));
//! if let Some(signed_in) = client.sign_in("google.com", None).await? {
//!     println!("Signed in as {}", signed_in.session.user.uid);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;

mod backend;
mod bridge;
mod coordination;
mod provider;

#[cfg(test)]
mod test_utils;

pub use coordination::{AuthClient, AuthError, CredentialResult};

pub use provider::{
    AppleSignInResult, CredentialBuilder, FacebookSignInResult, GoogleSignInResult,
    PhoneSignInOptions, PhoneSignInResult, ProviderEntry, ProviderError, ProviderId,
    RawProviderResult, SignInRequest, TwitterSignInResult, apple_provider, entry, lookup,
};

pub use bridge::{
    BridgeError, BridgeOperation, BridgeResponse, CODE_RECEIVED_EVENT, CODE_SENT_EVENT,
    CodeReceivedEvent, CodeReceivedListener, CodeSentEvent, CodeSentListener, NativeBridge,
    PhoneEvents, PhoneListener, Platform, WebBridge,
};

pub use backend::{
    AuthBackend, AuthCredential, AuthUser, BackendError, ConfirmationResult, DEFAULT_SMS_CODE,
    FacebookAuthProvider, GoogleAuthProvider, InMemoryAuthBackend, OAuthCredential,
    OAuthCredentialOptions, OAuthProvider, OperationType, PhoneAuthCredential, PhoneAuthProvider,
    PopupAuthBackend, RecaptchaVerifier, TwitterAuthProvider, UserCredential, UserInfo,
};

