use crate::backend::RecaptchaVerifier;
use crate::bridge::errors::BridgeError;
use crate::bridge::types::{BridgeOperation, BridgeResponse, Platform};
use crate::provider::{PhoneSignInOptions, PhoneSignInResult, ProviderId, RawProviderResult};

use super::WebBridge;

/// Sends the SMS behind a challenge widget and, when the caller already has
/// the code, confirms it.
///
/// Without a code the result carries only the verification id and no session.
/// With a code, the response carries the confirmed session and the result
/// carries the user's identity token in place of the verification id.
pub(super) async fn sign_in(
    bridge: &WebBridge,
    options: Option<&PhoneSignInOptions>,
) -> Result<BridgeResponse, BridgeError> {
    let options = options.ok_or(BridgeError::MissingOptions(ProviderId::Phone))?;
    bridge.localize();

    let container = options
        .container
        .clone()
        .unwrap_or_else(|| bridge.recaptcha_container.clone());
    let verifier = RecaptchaVerifier::new(container);

    let confirmation = bridge
        .backend
        .sign_in_with_phone_number(&options.phone, &verifier)
        .await?;
    bridge.events.emit_code_sent(confirmation.verification_id());

    let Some(code) = options
        .verification_code
        .as_deref()
        .filter(|code| !code.is_empty())
    else {
        tracing::debug!(
            "Waiting for SMS code, verification {}",
            confirmation.verification_id()
        );
        return Ok(RawProviderResult::Phone(PhoneSignInResult {
            verification_id: confirmation.verification_id().to_string(),
            verification_code: None,
        })
        .into());
    };

    bridge
        .events
        .emit_code_received(confirmation.verification_id(), code);
    let user_credential = bridge.backend.confirm(&confirmation, code).await?;
    let id_token = bridge.backend.get_id_token(&user_credential.user).await?;

    let result = RawProviderResult::Phone(PhoneSignInResult {
        verification_id: id_token,
        verification_code: Some(code.to_string()),
    });
    Ok(BridgeResponse::with_session(result, user_credential))
}

/// Phone linking has no web implementation.
pub(super) async fn link(_bridge: &WebBridge) -> Result<BridgeResponse, BridgeError> {
    tracing::warn!("Phone link requested on the web fallback");
    Err(BridgeError::UnsupportedOperation {
        provider_id: ProviderId::Phone,
        operation: BridgeOperation::Link,
        platform: Platform::Web,
    })
}
