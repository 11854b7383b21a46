//! Identity backend seam
//!
//! The backend owns sessions. This module defines the credential objects the
//! bridge hands it, the provider objects that build them, the traits a backend
//! implements, and an in-memory backend used by the demo and the tests.

mod credential;
mod errors;
mod memory;
mod providers;
mod traits;
mod types;

pub use credential::{AuthCredential, OAuthCredential, PhoneAuthCredential};
pub use errors::BackendError;
pub use memory::{DEFAULT_SMS_CODE, InMemoryAuthBackend};
pub use providers::{
    FacebookAuthProvider, GoogleAuthProvider, OAuthCredentialOptions, OAuthProvider,
    PhoneAuthProvider, TwitterAuthProvider,
};
pub use traits::{AuthBackend, PopupAuthBackend};
pub use types::{
    AuthUser, ConfirmationResult, OperationType, RecaptchaVerifier, UserCredential, UserInfo,
};
