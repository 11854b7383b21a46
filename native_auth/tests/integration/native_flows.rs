//! Native flows end to end
//!
//! These tests cover the provider flows a native host completes on its own:
//! - Google sign-in returning the backend session and the raw result
//! - Linking further providers to the signed-in account
//! - Sign-out ordering between the native layer and the backend
//! - Failures of either side and how they surface

use native_auth::{
    AuthBackend, AuthError, BackendError, BridgeError, OperationType, Platform,
    PhoneSignInOptions, ProviderId,
};

use crate::common::{NativeHarness, NativeResults, TEST_PHONE};

#[tokio::test]
async fn test_google_sign_in_end_to_end() {
    // Given a native google flow answering with id token "T"
    let harness = NativeHarness::new();
    harness.bridge.set_result(NativeResults::google("T"));
    assert_eq!(harness.client.platform(), Platform::Native);

    // When signing in
    let outcome = harness
        .client
        .sign_in("google.com", None)
        .await
        .expect("sign-in succeeds")
        .expect("google completes immediately");

    // Then the result is echoed and the backend session belongs to google's token
    assert_eq!(outcome.result, NativeResults::google("T"));
    assert_eq!(outcome.session.operation_type, OperationType::SignIn);
    assert_eq!(outcome.session.provider_id.as_deref(), Some("google.com"));
    assert!(outcome.session.user.is_linked_to("google.com"));
    assert_eq!(
        harness.backend.current_user().map(|user| user.uid),
        Some(outcome.session.user.uid.clone())
    );
}

#[tokio::test]
async fn test_repeat_sign_in_returns_same_account() {
    let harness = NativeHarness::new();
    harness.bridge.set_result(NativeResults::twitter("tw", "secret"));

    let first = harness
        .client
        .sign_in_twitter()
        .await
        .expect("first sign-in")
        .expect("credential");
    harness.client.sign_out().await.expect("sign-out");
    let second = harness
        .client
        .sign_in_twitter()
        .await
        .expect("second sign-in")
        .expect("credential");

    assert_eq!(first.session.user.uid, second.session.user.uid);
    assert_eq!(harness.backend.user_count(), 1);
}

#[tokio::test]
async fn test_link_providers_to_one_account() {
    // Given a user signed in with google
    let harness = NativeHarness::new()
        .with_results([
            NativeResults::google("g-id"),
            NativeResults::facebook("fb-access"),
            NativeResults::apple("apple-id", "nonce-1"),
        ]);
    let signed_in = harness
        .client
        .sign_in_google()
        .await
        .expect("sign-in")
        .expect("credential");

    // When linking facebook and apple
    harness
        .client
        .link_facebook()
        .await
        .expect("facebook link")
        .expect("credential");
    let linked = harness
        .client
        .link(ProviderId::Apple, None)
        .await
        .expect("apple link")
        .expect("credential");

    // Then one account carries all three providers
    assert_eq!(linked.session.operation_type, OperationType::Link);
    assert_eq!(linked.session.user.uid, signed_in.session.user.uid);
    for provider in ["google.com", "facebook.com", "apple.com"] {
        assert!(linked.session.user.is_linked_to(provider), "{provider}");
    }
    assert_eq!(harness.backend.user_count(), 1);
}

#[tokio::test]
async fn test_link_without_session_leaves_backend_untouched() {
    // Given nobody signed in
    let harness = NativeHarness::new();
    harness.bridge.set_result(NativeResults::google("g-id"));

    // When linking google
    let result = harness.client.link_google().await;

    // Then the link is refused and no account was created
    assert_eq!(result.unwrap_err(), AuthError::NoUserToLink);
    assert_eq!(harness.backend.user_count(), 0);
    assert!(harness.backend.current_user().is_none());
}

#[tokio::test]
async fn test_link_same_provider_twice() {
    let harness = NativeHarness::new();
    harness.bridge.set_result(NativeResults::google("g-id"));
    harness.client.sign_in_google().await.expect("sign-in");

    harness.bridge.set_result(NativeResults::google("other-g-id"));
    let result = harness.client.link_google().await;

    assert_eq!(
        result.unwrap_err(),
        AuthError::BackendCredential(BackendError::ProviderAlreadyLinked(
            "google.com".to_string()
        ))
    );
}

#[tokio::test]
async fn test_sign_out_clears_backend_session() {
    let harness = NativeHarness::new();
    harness.bridge.set_result(NativeResults::google("g-id"));
    harness.client.sign_in_google().await.expect("sign-in");

    harness.client.sign_out().await.expect("sign-out");

    assert_eq!(harness.bridge.sign_out_calls(), 1);
    assert!(harness.backend.current_user().is_none());
}

#[tokio::test]
async fn test_native_sign_out_failure_keeps_backend_session() {
    // Given a signed-in user and a native layer that cannot sign out
    let harness = NativeHarness::new();
    harness.bridge.set_result(NativeResults::google("g-id"));
    harness.client.sign_in_google().await.expect("sign-in");
    harness
        .bridge
        .fail_sign_out(BridgeError::Native("keychain locked".to_string()));

    // When signing out
    let result = harness.client.sign_out().await;

    // Then the error surfaces and the backend session is intact
    assert_eq!(
        result.unwrap_err(),
        AuthError::NativeBridge(BridgeError::Native("keychain locked".to_string()))
    );
    assert!(harness.backend.current_user().is_some());
}

#[tokio::test]
async fn test_cancelled_flow() {
    // No scripted result: the user dismissed the native sheet
    let harness = NativeHarness::new();

    let result = harness.client.sign_in_apple().await;

    assert_eq!(
        result.unwrap_err(),
        AuthError::NativeBridge(BridgeError::Cancelled)
    );
    assert_eq!(harness.backend.user_count(), 0);
}

#[tokio::test]
async fn test_unknown_provider() {
    let harness = NativeHarness::new();

    let result = harness
        .client
        .sign_in("github.com", Some(PhoneSignInOptions::new(TEST_PHONE)))
        .await;

    assert_eq!(
        result.unwrap_err(),
        AuthError::ProviderNotFound("github.com".to_string())
    );
}

#[tokio::test]
async fn test_concurrent_sign_ins_are_independent() {
    let harness = NativeHarness::new()
        .with_results([NativeResults::google("g-id"), NativeResults::twitter("tw", "s")]);

    let (google, twitter) = tokio::join!(
        harness.client.sign_in_google(),
        harness.client.sign_in_twitter()
    );

    let google = google.expect("google").expect("credential");
    let twitter = twitter.expect("twitter").expect("credential");
    assert_ne!(google.session.user.uid, twitter.session.user.uid);
    assert_eq!(harness.backend.user_count(), 2);
}
