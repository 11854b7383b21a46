use std::fmt;

use crate::backend::{
    AuthCredential, FacebookAuthProvider, GoogleAuthProvider, OAuthCredentialOptions,
    OAuthProvider, PhoneAuthProvider, TwitterAuthProvider,
};

use super::errors::ProviderError;
use super::types::{ProviderId, RawProviderResult};

/// Turns a raw provider result into a backend credential.
///
/// `Ok(None)` means the flow is not finished yet (a phone sign-in still
/// waiting for its SMS code).
pub type CredentialBuilder =
    fn(&RawProviderResult) -> Result<Option<AuthCredential>, ProviderError>;

/// A registered provider and its credential builder.
#[derive(Clone, Copy)]
pub struct ProviderEntry {
    provider_id: ProviderId,
    build: CredentialBuilder,
}

impl fmt::Debug for ProviderEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderEntry")
            .field("provider_id", &self.provider_id)
            .finish_non_exhaustive()
    }
}

impl ProviderEntry {
    pub fn provider_id(&self) -> ProviderId {
        self.provider_id
    }

    pub fn build(
        &self,
        result: &RawProviderResult,
    ) -> Result<Option<AuthCredential>, ProviderError> {
        if result.provider_id() != self.provider_id {
            return Err(ProviderError::ResultMismatch {
                expected: self.provider_id,
                actual: result.provider_id(),
            });
        }
        (self.build)(result)
    }
}

/// Resolves a provider identifier. Pure lookup, no I/O.
pub fn lookup(provider_id: &str) -> Result<ProviderEntry, ProviderError> {
    let provider_id = provider_id.parse::<ProviderId>()?;
    Ok(entry(provider_id))
}

pub fn entry(provider_id: ProviderId) -> ProviderEntry {
    let build: CredentialBuilder = match provider_id {
        ProviderId::Google => google_credential,
        ProviderId::Apple => apple_credential,
        ProviderId::Facebook => facebook_credential,
        ProviderId::Twitter => twitter_credential,
        ProviderId::Phone => phone_credential,
    };
    ProviderEntry { provider_id, build }
}

/// Apple's provider object, requesting the `email` and `name` scopes.
pub fn apple_provider() -> OAuthProvider {
    let mut provider = OAuthProvider::new(ProviderId::Apple.as_str());
    provider.add_scope("email").add_scope("name");
    provider
}

fn google_credential(result: &RawProviderResult) -> Result<Option<AuthCredential>, ProviderError> {
    match result {
        RawProviderResult::Google(google) => {
            Ok(Some(GoogleAuthProvider::credential(google.id_token.clone())))
        }
        other => Err(mismatch(ProviderId::Google, other)),
    }
}

fn facebook_credential(
    result: &RawProviderResult,
) -> Result<Option<AuthCredential>, ProviderError> {
    match result {
        RawProviderResult::Facebook(facebook) => Ok(Some(FacebookAuthProvider::credential(
            facebook.id_token.clone(),
        ))),
        other => Err(mismatch(ProviderId::Facebook, other)),
    }
}

fn twitter_credential(result: &RawProviderResult) -> Result<Option<AuthCredential>, ProviderError> {
    match result {
        RawProviderResult::Twitter(twitter) => Ok(Some(TwitterAuthProvider::credential(
            twitter.id_token.clone(),
            twitter.secret.clone(),
        ))),
        other => Err(mismatch(ProviderId::Twitter, other)),
    }
}

fn apple_credential(result: &RawProviderResult) -> Result<Option<AuthCredential>, ProviderError> {
    match result {
        RawProviderResult::Apple(apple) => {
            Ok(Some(apple_provider().credential(OAuthCredentialOptions {
                id_token: Some(apple.id_token.clone()),
                raw_nonce: Some(apple.raw_nonce.clone()),
                ..Default::default()
            })))
        }
        other => Err(mismatch(ProviderId::Apple, other)),
    }
}

fn phone_credential(result: &RawProviderResult) -> Result<Option<AuthCredential>, ProviderError> {
    match result {
        RawProviderResult::Phone(phone) => match phone.verification_code.as_deref() {
            Some(code) if !code.is_empty() => Ok(Some(PhoneAuthProvider::credential(
                phone.verification_id.clone(),
                code,
            ))),
            _ => {
                tracing::debug!(
                    "No SMS code yet for verification {}",
                    phone.verification_id
                );
                Ok(None)
            }
        },
        other => Err(mismatch(ProviderId::Phone, other)),
    }
}

fn mismatch(expected: ProviderId, result: &RawProviderResult) -> ProviderError {
    ProviderError::ResultMismatch {
        expected,
        actual: result.provider_id(),
    }
}
