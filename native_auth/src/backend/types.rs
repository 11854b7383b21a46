use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::credential::AuthCredential;

/// Provider identity attached to a user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub provider_id: String,
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// A user account as seen by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub uid: String,
    pub provider_data: Vec<UserInfo>,
    pub created_at: DateTime<Utc>,
    pub last_sign_in_at: DateTime<Utc>,
}

impl AuthUser {
    pub fn new(uid: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            uid: uid.into(),
            provider_data: Vec::new(),
            created_at: now,
            last_sign_in_at: now,
        }
    }

    pub fn is_linked_to(&self, provider_id: &str) -> bool {
        self.provider_data
            .iter()
            .any(|info| info.provider_id == provider_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OperationType {
    SignIn,
    Link,
    Reauthenticate,
}

/// Outcome of a backend sign-in or link call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCredential {
    pub user: AuthUser,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    pub operation_type: OperationType,
    /// Provider credential returned by popup flows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<AuthCredential>,
}

/// Handle on an SMS verification that is waiting for its code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationResult {
    verification_id: String,
}

impl ConfirmationResult {
    pub fn new(verification_id: impl Into<String>) -> Self {
        Self {
            verification_id: verification_id.into(),
        }
    }

    pub fn verification_id(&self) -> &str {
        &self.verification_id
    }
}

/// Challenge widget a browser must solve before an SMS is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecaptchaVerifier {
    container: String,
}

impl RecaptchaVerifier {
    pub fn new(container: impl Into<String>) -> Self {
        Self {
            container: container.into(),
        }
    }

    pub fn container(&self) -> &str {
        &self.container
    }
}
