use crate::provider::ProviderId;

use super::credential::{AuthCredential, OAuthCredential, PhoneAuthCredential};

pub struct GoogleAuthProvider;

impl GoogleAuthProvider {
    pub const PROVIDER_ID: &'static str = ProviderId::Google.as_str();

    pub fn credential(id_token: impl Into<String>) -> AuthCredential {
        AuthCredential::OAuth(OAuthCredential {
            provider_id: Self::PROVIDER_ID.to_string(),
            id_token: Some(id_token.into()),
            ..Default::default()
        })
    }

    /// Provider object for popup flows.
    pub fn provider() -> OAuthProvider {
        OAuthProvider::new(Self::PROVIDER_ID)
    }
}

pub struct FacebookAuthProvider;

impl FacebookAuthProvider {
    pub const PROVIDER_ID: &'static str = ProviderId::Facebook.as_str();

    /// Facebook proves identity with an access token.
    pub fn credential(access_token: impl Into<String>) -> AuthCredential {
        AuthCredential::OAuth(OAuthCredential {
            provider_id: Self::PROVIDER_ID.to_string(),
            access_token: Some(access_token.into()),
            ..Default::default()
        })
    }

    pub fn provider() -> OAuthProvider {
        OAuthProvider::new(Self::PROVIDER_ID)
    }
}

pub struct TwitterAuthProvider;

impl TwitterAuthProvider {
    pub const PROVIDER_ID: &'static str = ProviderId::Twitter.as_str();

    pub fn credential(token: impl Into<String>, secret: impl Into<String>) -> AuthCredential {
        AuthCredential::OAuth(OAuthCredential {
            provider_id: Self::PROVIDER_ID.to_string(),
            access_token: Some(token.into()),
            secret: Some(secret.into()),
            ..Default::default()
        })
    }

    pub fn provider() -> OAuthProvider {
        OAuthProvider::new(Self::PROVIDER_ID)
    }
}

pub struct PhoneAuthProvider;

impl PhoneAuthProvider {
    pub const PROVIDER_ID: &'static str = ProviderId::Phone.as_str();

    pub fn credential(
        verification_id: impl Into<String>,
        verification_code: impl Into<String>,
    ) -> AuthCredential {
        AuthCredential::Phone(PhoneAuthCredential::new(verification_id, verification_code))
    }
}

/// Token material accepted by [`OAuthProvider::credential`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OAuthCredentialOptions {
    pub id_token: Option<String>,
    pub access_token: Option<String>,
    pub raw_nonce: Option<String>,
}

/// Generic OAuth provider object, configurable with scopes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthProvider {
    provider_id: String,
    scopes: Vec<String>,
}

impl OAuthProvider {
    pub fn new(provider_id: impl Into<String>) -> Self {
        Self {
            provider_id: provider_id.into(),
            scopes: Vec::new(),
        }
    }

    /// Requests an additional scope. Adding a scope twice has no effect.
    pub fn add_scope(&mut self, scope: impl Into<String>) -> &mut Self {
        let scope = scope.into();
        if !self.scopes.contains(&scope) {
            self.scopes.push(scope);
        }
        self
    }

    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }

    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    pub fn credential(&self, options: OAuthCredentialOptions) -> AuthCredential {
        AuthCredential::OAuth(OAuthCredential {
            provider_id: self.provider_id.clone(),
            id_token: options.id_token,
            access_token: options.access_token,
            secret: None,
            raw_nonce: options.raw_nonce,
            scopes: self.scopes.clone(),
        })
    }
}
