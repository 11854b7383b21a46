use std::sync::Arc;

use native_auth::{
    AuthBackend, AuthClient, DEFAULT_SMS_CODE, InMemoryAuthBackend, OAuthCredential,
    PhoneSignInOptions, ProviderId,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Backend whose popups succeed for google and facebook.
fn demo_backend() -> InMemoryAuthBackend {
    InMemoryAuthBackend::new()
        .with_popup_credential(OAuthCredential {
            provider_id: ProviderId::Google.to_string(),
            id_token: Some("demo-google-id-token".to_string()),
            ..Default::default()
        })
        .with_popup_credential(OAuthCredential {
            provider_id: ProviderId::Facebook.to_string(),
            access_token: Some("demo-facebook-access-token".to_string()),
            ..Default::default()
        })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=debug,native_auth=debug", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let backend = Arc::new(demo_backend());
    let client = AuthClient::with_web_fallback(backend.clone());
    tracing::info!("Running on the {} platform", client.platform());

    // Popup sign-in, then attach a second provider to the same account
    if let Some(signed_in) = client.sign_in_google().await? {
        tracing::info!("Google session for {}", signed_in.session.user.uid);
    }
    if let Some(linked) = client.link_facebook().await? {
        let providers: Vec<_> = linked
            .session
            .user
            .provider_data
            .iter()
            .map(|info| info.provider_id.as_str())
            .collect();
        tracing::info!("Account now linked to {:?}", providers);
    }

    // Phone linking is not available without a native layer
    if let Err(e) = client.link_phone("+15551234567", Some(DEFAULT_SMS_CODE)).await {
        tracing::warn!("Phone link refused: {}", e);
    }
    client.sign_out().await?;

    // Two-step phone sign-in: send the SMS, then supply the code
    let code_sent = client.on_code_sent();
    let pending = client
        .sign_in(
            ProviderId::Phone,
            Some(PhoneSignInOptions::new("+15551234567")),
        )
        .await?;
    let sent = code_sent.await?;
    tracing::info!(
        "SMS sent for verification {} (pending: {})",
        sent.verification_id,
        pending.is_none()
    );

    if let Some(signed_in) = client
        .sign_in_phone("+15551234567", Some(DEFAULT_SMS_CODE))
        .await?
    {
        tracing::info!("Phone session for {}", signed_in.session.user.uid);
    }

    client.remove_all_listeners();
    client.sign_out().await?;
    tracing::info!(
        "Signed out; {} accounts known to the backend, current user: {:?}",
        backend.user_count(),
        backend.current_user().map(|user| user.uid)
    );
    Ok(())
}
