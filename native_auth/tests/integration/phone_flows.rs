//! Phone (SMS) flows through a native bridge
//!
//! - Sign-in without a code waits and touches no account
//! - Typed and auto-retrieved codes complete the sign-in
//! - Listeners see the verification events and can be removed

use native_auth::{
    AuthBackend, AuthError, BackendError, BridgeError, PhoneSignInOptions, ProviderId,
};

use crate::common::{NativeHarness, NativeResults, TEST_PHONE, TEST_SMS_CODE};

#[tokio::test]
async fn test_phone_without_code_waits() {
    // Given a phone sign-in where the user has not typed the code yet
    let harness = NativeHarness::new();

    // When signing in
    let outcome = harness
        .client
        .sign_in(ProviderId::Phone, Some(PhoneSignInOptions::new(TEST_PHONE)))
        .await
        .expect("SMS sent");

    // Then nothing is signed in and the verification stays pending
    assert!(outcome.is_none());
    assert!(harness.backend.current_user().is_none());
    assert_eq!(harness.backend.user_count(), 0);
    assert_eq!(harness.backend.pending_verifications(), 1);
}

#[tokio::test]
async fn test_phone_with_typed_code() {
    let harness = NativeHarness::new();
    let code_sent = harness.client.on_code_sent();

    let outcome = harness
        .client
        .sign_in_phone(TEST_PHONE, Some(TEST_SMS_CODE))
        .await
        .expect("phone sign-in")
        .expect("code given");

    let sent = code_sent.await.expect("code sent event");
    let native_auth::RawProviderResult::Phone(phone) = &outcome.result else {
        panic!("expected a phone result");
    };
    assert_eq!(phone.verification_id, sent.verification_id);
    assert_eq!(phone.verification_code.as_deref(), Some(TEST_SMS_CODE));
    assert_eq!(
        outcome.session.user.provider_data[0].phone_number.as_deref(),
        Some(TEST_PHONE)
    );
    assert_eq!(harness.backend.pending_verifications(), 0);
}

#[tokio::test]
async fn test_auto_retrieved_code_reaches_every_listener() {
    // Given two screens listening for the retrieved code
    let harness = NativeHarness::with_auto_retrieve();
    let first = harness.client.on_code_received();
    let second = harness.client.on_code_received();

    // When the device reads the SMS by itself
    let outcome = harness
        .client
        .sign_in_phone(TEST_PHONE, None)
        .await
        .expect("phone sign-in")
        .expect("code auto-retrieved");

    // Then both listeners get the code and the user is signed in
    let (first, second) = tokio::join!(first.recv(), second.recv());
    assert_eq!(first.expect("first").verification_code, TEST_SMS_CODE);
    assert_eq!(second.expect("second").verification_code, TEST_SMS_CODE);
    assert!(outcome.session.user.is_linked_to("phone"));
}

#[tokio::test]
async fn test_wrong_code_is_rejected_by_backend() {
    let harness = NativeHarness::new();

    let result = harness.client.sign_in_phone(TEST_PHONE, Some("000000")).await;

    assert_eq!(
        result.unwrap_err(),
        AuthError::BackendCredential(BackendError::InvalidVerificationCode)
    );
    assert!(harness.backend.current_user().is_none());
}

#[tokio::test]
async fn test_link_phone_to_google_account() {
    let harness = NativeHarness::new().with_results([NativeResults::google("g-id")]);
    harness.client.sign_in_google().await.expect("google sign-in");

    let linked = harness
        .client
        .link_phone(TEST_PHONE, Some(TEST_SMS_CODE))
        .await
        .expect("phone link")
        .expect("code given");

    assert!(linked.session.user.is_linked_to("google.com"));
    assert!(linked.session.user.is_linked_to("phone"));
    assert_eq!(harness.backend.user_count(), 1);
}

#[tokio::test]
async fn test_link_phone_without_code_waits() {
    // Linking without a code never checks the session
    let harness = NativeHarness::new();

    let outcome = harness
        .client
        .link_phone(TEST_PHONE, None)
        .await
        .expect("SMS sent");

    assert!(outcome.is_none());
}

#[tokio::test]
async fn test_remove_all_listeners() {
    let harness = NativeHarness::new();
    let code_sent = harness.client.on_code_sent();
    let code_received = harness.client.on_code_received();

    harness.client.remove_all_listeners();

    assert_eq!(code_sent.await.unwrap_err(), BridgeError::ListenerRemoved);
    assert_eq!(code_received.await.unwrap_err(), BridgeError::ListenerRemoved);

    // Fresh listeners still see later events
    let code_sent = harness.client.on_code_sent();
    harness
        .client
        .sign_in_phone(TEST_PHONE, None)
        .await
        .expect("SMS sent");
    assert!(code_sent.await.is_ok());
}
