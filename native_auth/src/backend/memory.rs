use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::credential::{AuthCredential, OAuthCredential};
use super::errors::BackendError;
use super::providers::OAuthProvider;
use super::traits::{AuthBackend, PopupAuthBackend};
use super::types::{
    AuthUser, ConfirmationResult, OperationType, RecaptchaVerifier, UserCredential, UserInfo,
};

/// Code "sent" by SMS unless configured otherwise
pub const DEFAULT_SMS_CODE: &str = "123456";

struct PendingVerification {
    phone_number: String,
    code: String,
}

/// Identity extracted from a credential: (provider id, subject, phone number)
type Identity = (String, String, Option<String>);

#[derive(Default)]
struct MemoryState {
    current_uid: Option<String>,
    users: HashMap<String, AuthUser>,
    identities: HashMap<(String, String), String>,
    popup_credentials: HashMap<String, OAuthCredential>,
    verifications: HashMap<String, PendingVerification>,
    device_language: bool,
}

impl MemoryState {
    fn resolve_identity(&mut self, credential: &AuthCredential) -> Result<Identity, BackendError> {
        match credential {
            AuthCredential::OAuth(oauth) => {
                let subject = oauth.subject_token().ok_or_else(|| {
                    BackendError::InvalidCredential(format!(
                        "No token in {} credential",
                        oauth.provider_id
                    ))
                })?;
                Ok((oauth.provider_id.clone(), subject.to_string(), None))
            }
            AuthCredential::Phone(phone) => {
                let pending = self
                    .verifications
                    .get(phone.verification_id())
                    .ok_or_else(|| {
                        BackendError::VerificationNotFound(phone.verification_id().to_string())
                    })?;
                if pending.code != phone.verification_code() {
                    return Err(BackendError::InvalidVerificationCode);
                }
                let phone_number = pending.phone_number.clone();
                self.verifications.remove(phone.verification_id());
                Ok((
                    credential.provider_id().to_string(),
                    phone_number.clone(),
                    Some(phone_number),
                ))
            }
        }
    }

    fn sign_in(&mut self, identity: Identity) -> AuthUser {
        let (provider_id, subject, phone_number) = identity;
        let key = (provider_id.clone(), subject.clone());

        let uid = match self.identities.get(&key) {
            Some(uid) => uid.clone(),
            None => {
                let uid = uuid::Uuid::new_v4().simple().to_string();
                let mut user = AuthUser::new(uid.clone());
                user.provider_data.push(UserInfo {
                    provider_id,
                    uid: subject,
                    phone_number,
                });
                tracing::debug!("Created user {} for {}", uid, key.0);
                self.users.insert(uid.clone(), user);
                self.identities.insert(key, uid.clone());
                uid
            }
        };

        let user = self
            .users
            .entry(uid.clone())
            .or_insert_with(|| AuthUser::new(uid.clone()));
        user.last_sign_in_at = Utc::now();
        let user = user.clone();
        self.current_uid = Some(uid);
        user
    }

    fn link(&mut self, uid: &str, identity: Identity) -> Result<AuthUser, BackendError> {
        let (provider_id, subject, phone_number) = identity;
        let key = (provider_id.clone(), subject.clone());

        if let Some(owner) = self.identities.get(&key) {
            if owner != uid {
                return Err(BackendError::CredentialAlreadyInUse(provider_id));
            }
        }

        let user = self
            .users
            .get_mut(uid)
            .ok_or_else(|| BackendError::UserNotFound(uid.to_string()))?;
        if user.is_linked_to(&provider_id) {
            return Err(BackendError::ProviderAlreadyLinked(provider_id));
        }

        user.provider_data.push(UserInfo {
            provider_id,
            uid: subject,
            phone_number,
        });
        let user = user.clone();
        self.identities.insert(key, uid.to_string());
        Ok(user)
    }

    fn popup_credential(&self, provider: &OAuthProvider) -> Result<OAuthCredential, BackendError> {
        let mut credential = self
            .popup_credentials
            .get(provider.provider_id())
            .cloned()
            .ok_or_else(|| BackendError::PopupClosed(provider.provider_id().to_string()))?;
        credential.scopes = provider.scopes().to_vec();
        Ok(credential)
    }
}

/// Backend that keeps accounts in process memory.
///
/// Popup flows answer with credentials registered through
/// [`InMemoryAuthBackend::with_popup_credential`]; a provider without one
/// behaves as if the user closed the popup. SMS flows "send" a fixed code.
pub struct InMemoryAuthBackend {
    state: Mutex<MemoryState>,
    sms_code: String,
}

impl Default for InMemoryAuthBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryAuthBackend {
    pub fn new() -> Self {
        tracing::info!("Creating new in-memory auth backend");
        Self {
            state: Mutex::new(MemoryState::default()),
            sms_code: DEFAULT_SMS_CODE.to_string(),
        }
    }

    pub fn with_sms_code(mut self, code: impl Into<String>) -> Self {
        self.sms_code = code.into();
        self
    }

    pub fn with_popup_credential(self, credential: OAuthCredential) -> Self {
        self.set_popup_credential(credential);
        self
    }

    /// Sets the credential the popup for `credential.provider_id` returns.
    pub fn set_popup_credential(&self, credential: OAuthCredential) {
        self.state()
            .popup_credentials
            .insert(credential.provider_id.clone(), credential);
    }

    /// Records an SMS verification completed outside this backend, such as
    /// one sent by a native SDK.
    ///
    /// Replaces any verification still pending for the same phone number.
    pub fn register_verification(
        &self,
        verification_id: impl Into<String>,
        phone_number: impl Into<String>,
        code: impl Into<String>,
    ) {
        let phone_number = phone_number.into();
        let mut state = self.state();
        state
            .verifications
            .retain(|_, pending| pending.phone_number != phone_number);
        state.verifications.insert(
            verification_id.into(),
            PendingVerification {
                phone_number,
                code: code.into(),
            },
        );
    }

    pub fn device_language_requested(&self) -> bool {
        self.state().device_language
    }

    pub fn user_count(&self) -> usize {
        self.state().users.len()
    }

    pub fn pending_verifications(&self) -> usize {
        self.state().verifications.len()
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn require_current(state: &MemoryState, user: &AuthUser) -> Result<(), BackendError> {
        match &state.current_uid {
            Some(uid) if *uid == user.uid => Ok(()),
            Some(_) => Err(BackendError::UserNotFound(user.uid.clone())),
            None => Err(BackendError::NoCurrentUser),
        }
    }
}

#[async_trait]
impl AuthBackend for InMemoryAuthBackend {
    fn current_user(&self) -> Option<AuthUser> {
        let state = self.state();
        state
            .current_uid
            .as_ref()
            .and_then(|uid| state.users.get(uid))
            .cloned()
    }

    async fn sign_in_with_credential(
        &self,
        credential: AuthCredential,
    ) -> Result<UserCredential, BackendError> {
        let mut state = self.state();
        let identity = state.resolve_identity(&credential)?;
        let user = state.sign_in(identity);
        tracing::debug!(
            "Signed in {} with {} credential",
            user.uid,
            credential.provider_id()
        );

        Ok(UserCredential {
            user,
            provider_id: Some(credential.provider_id().to_string()),
            operation_type: OperationType::SignIn,
            credential: None,
        })
    }

    async fn link_with_credential(
        &self,
        user: &AuthUser,
        credential: AuthCredential,
    ) -> Result<UserCredential, BackendError> {
        let mut state = self.state();
        Self::require_current(&state, user)?;
        let identity = state.resolve_identity(&credential)?;
        let user = state.link(&user.uid, identity)?;
        tracing::debug!("Linked {} to {}", credential.provider_id(), user.uid);

        Ok(UserCredential {
            user,
            provider_id: Some(credential.provider_id().to_string()),
            operation_type: OperationType::Link,
            credential: None,
        })
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        let mut state = self.state();
        if let Some(uid) = state.current_uid.take() {
            tracing::debug!("Signed out {}", uid);
        }
        Ok(())
    }
}

#[async_trait]
impl PopupAuthBackend for InMemoryAuthBackend {
    fn use_device_language(&self) {
        self.state().device_language = true;
    }

    async fn sign_in_with_popup(
        &self,
        provider: &OAuthProvider,
    ) -> Result<UserCredential, BackendError> {
        let mut state = self.state();
        let popup = state.popup_credential(provider)?;
        let credential = AuthCredential::OAuth(popup);
        let identity = state.resolve_identity(&credential)?;
        let user = state.sign_in(identity);

        Ok(UserCredential {
            user,
            provider_id: Some(provider.provider_id().to_string()),
            operation_type: OperationType::SignIn,
            credential: Some(credential),
        })
    }

    async fn link_with_popup(
        &self,
        user: &AuthUser,
        provider: &OAuthProvider,
    ) -> Result<UserCredential, BackendError> {
        let mut state = self.state();
        Self::require_current(&state, user)?;
        let popup = state.popup_credential(provider)?;
        let credential = AuthCredential::OAuth(popup);
        let identity = state.resolve_identity(&credential)?;
        let user = state.link(&user.uid, identity)?;

        Ok(UserCredential {
            user,
            provider_id: Some(provider.provider_id().to_string()),
            operation_type: OperationType::Link,
            credential: Some(credential),
        })
    }

    async fn sign_in_with_phone_number(
        &self,
        phone_number: &str,
        verifier: &RecaptchaVerifier,
    ) -> Result<ConfirmationResult, BackendError> {
        if verifier.container().is_empty() {
            return Err(BackendError::InvalidCredential(
                "Challenge container is empty".to_string(),
            ));
        }
        if phone_number.trim().is_empty() {
            return Err(BackendError::InvalidCredential(
                "Phone number is empty".to_string(),
            ));
        }

        let verification_id = uuid::Uuid::new_v4().to_string();
        self.register_verification(verification_id.clone(), phone_number, self.sms_code.clone());
        tracing::debug!("Sent SMS code to {} ({})", phone_number, verification_id);

        Ok(ConfirmationResult::new(verification_id))
    }

    async fn confirm(
        &self,
        confirmation: &ConfirmationResult,
        verification_code: &str,
    ) -> Result<UserCredential, BackendError> {
        let credential = super::providers::PhoneAuthProvider::credential(
            confirmation.verification_id(),
            verification_code,
        );
        self.sign_in_with_credential(credential).await
    }

    async fn get_id_token(&self, user: &AuthUser) -> Result<String, BackendError> {
        let state = self.state();
        if !state.users.contains_key(&user.uid) {
            return Err(BackendError::UserNotFound(user.uid.clone()));
        }
        Ok(format!("{}.{}", user.uid, uuid::Uuid::new_v4().simple()))
    }
}
