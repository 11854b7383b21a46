use crate::backend::{
    AuthCredential, FacebookAuthProvider, GoogleAuthProvider, OAuthCredential, OAuthProvider,
    TwitterAuthProvider, UserCredential,
};
use crate::bridge::errors::BridgeError;
use crate::bridge::types::{BridgeOperation, BridgeResponse, Platform};
use crate::provider::{
    AppleSignInResult, FacebookSignInResult, GoogleSignInResult, ProviderId, RawProviderResult,
    TwitterSignInResult, apple_provider,
};

use super::WebBridge;

pub(super) async fn sign_in(
    bridge: &WebBridge,
    provider_id: ProviderId,
) -> Result<BridgeResponse, BridgeError> {
    let provider = popup_provider(provider_id, BridgeOperation::SignIn)?;
    bridge.localize();

    let user_credential = bridge.backend.sign_in_with_popup(&provider).await?;
    let result = extract_result(provider_id, &user_credential)?;
    Ok(BridgeResponse::with_session(result, user_credential))
}

pub(super) async fn link(
    bridge: &WebBridge,
    provider_id: ProviderId,
) -> Result<BridgeResponse, BridgeError> {
    let provider = popup_provider(provider_id, BridgeOperation::Link)?;
    bridge.localize();

    let user = bridge.user_to_link()?;
    let user_credential = bridge.backend.link_with_popup(&user, &provider).await?;
    let result = extract_result(provider_id, &user_credential)?;
    Ok(BridgeResponse::with_session(result, user_credential))
}

fn popup_provider(
    provider_id: ProviderId,
    operation: BridgeOperation,
) -> Result<OAuthProvider, BridgeError> {
    match provider_id {
        ProviderId::Google => Ok(GoogleAuthProvider::provider()),
        ProviderId::Facebook => Ok(FacebookAuthProvider::provider()),
        ProviderId::Twitter => Ok(TwitterAuthProvider::provider()),
        ProviderId::Apple => Ok(apple_provider()),
        ProviderId::Phone => Err(BridgeError::UnsupportedOperation {
            provider_id,
            operation,
            platform: Platform::Web,
        }),
    }
}

/// Shapes the popup's provider credential like the native plugin's result.
fn extract_result(
    provider_id: ProviderId,
    user_credential: &UserCredential,
) -> Result<RawProviderResult, BridgeError> {
    let credential = user_credential
        .credential
        .as_ref()
        .and_then(AuthCredential::as_oauth)
        .ok_or_else(|| {
            BridgeError::InvalidResult(format!(
                "Popup for {provider_id} returned no OAuth credential"
            ))
        })?;

    let result = match provider_id {
        ProviderId::Google => RawProviderResult::Google(GoogleSignInResult {
            id_token: required(provider_id, "id token", &credential.id_token)?,
        }),
        ProviderId::Facebook => RawProviderResult::Facebook(FacebookSignInResult {
            id_token: required(provider_id, "access token", &credential.access_token)?,
        }),
        ProviderId::Twitter => RawProviderResult::Twitter(TwitterSignInResult {
            id_token: required(provider_id, "access token", &credential.access_token)?,
            secret: required(provider_id, "secret", &credential.secret)?,
        }),
        ProviderId::Apple => apple_result(credential)?,
        ProviderId::Phone => {
            return Err(BridgeError::InvalidResult(
                "Phone results do not come from popups".to_string(),
            ));
        }
    };
    Ok(result)
}

fn apple_result(credential: &OAuthCredential) -> Result<RawProviderResult, BridgeError> {
    // Popups never expose the nonce they used
    Ok(RawProviderResult::Apple(AppleSignInResult {
        id_token: required(ProviderId::Apple, "id token", &credential.id_token)?,
        raw_nonce: String::new(),
        access_token: credential.access_token.clone().unwrap_or_default(),
        secret: credential.secret.clone().unwrap_or_default(),
    }))
}

fn required(
    provider_id: ProviderId,
    field: &str,
    value: &Option<String>,
) -> Result<String, BridgeError> {
    value
        .as_ref()
        .filter(|v| !v.is_empty())
        .cloned()
        .ok_or_else(|| {
            BridgeError::InvalidResult(format!("Popup for {provider_id} returned no {field}"))
        })
}
