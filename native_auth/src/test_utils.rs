//! Test utilities shared by the unit tests of this crate
//!
//! [`MockBridge`] and [`MockBackend`] share one [`CallLog`], so a test can
//! assert on the order in which the orchestration touched the native layer
//! and the backend.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::backend::{
    AuthBackend, AuthCredential, AuthUser, BackendError, OperationType, UserCredential,
};
use crate::bridge::{BridgeError, BridgeResponse, NativeBridge, PhoneEvents, Platform};
use crate::provider::{GoogleSignInResult, ProviderId, RawProviderResult, SignInRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    BridgeSignIn(ProviderId),
    BridgeLink(ProviderId),
    BridgeSignOut,
    BackendSignIn(String),
    /// (user uid, provider id)
    BackendLink(String, String),
    BackendSignOut,
}

impl Call {
    fn is_backend(&self) -> bool {
        matches!(
            self,
            Self::BackendSignIn(_) | Self::BackendLink(..) | Self::BackendSignOut
        )
    }
}

#[derive(Default)]
pub struct CallLog {
    calls: Mutex<Vec<Call>>,
}

impl CallLog {
    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn backend_calls(&self) -> usize {
        self.calls().iter().filter(|call| call.is_backend()).count()
    }
}

pub fn google_result(id_token: &str) -> RawProviderResult {
    RawProviderResult::Google(GoogleSignInResult {
        id_token: id_token.to_string(),
    })
}

/// Native bridge answering with scripted results
pub struct MockBridge {
    log: Arc<CallLog>,
    events: PhoneEvents,
    sign_in: Mutex<Result<RawProviderResult, BridgeError>>,
    link: Mutex<Result<RawProviderResult, BridgeError>>,
    sign_out: Mutex<Result<(), BridgeError>>,
    session: Mutex<Option<UserCredential>>,
    last_request: Mutex<Option<SignInRequest>>,
}

impl MockBridge {
    /// A bridge and a backend recording into the same log.
    pub fn with_backend() -> (Arc<MockBridge>, Arc<MockBackend>) {
        let log = Arc::new(CallLog::default());
        let not_scripted = || Err(BridgeError::Native("not scripted".to_string()));
        let bridge = MockBridge {
            log: log.clone(),
            events: PhoneEvents::with_capacity(4),
            sign_in: Mutex::new(not_scripted()),
            link: Mutex::new(not_scripted()),
            sign_out: Mutex::new(Ok(())),
            session: Mutex::new(None),
            last_request: Mutex::new(None),
        };
        let backend = MockBackend {
            log,
            current_user: Mutex::new(None),
            sign_in: Mutex::new(Ok(AuthUser::new("mock-user"))),
            last_credential: Mutex::new(None),
        };
        (Arc::new(bridge), Arc::new(backend))
    }

    pub fn log(&self) -> &CallLog {
        &self.log
    }

    pub fn set_sign_in(&self, result: Result<RawProviderResult, BridgeError>) {
        *self.sign_in.lock().unwrap() = result;
    }

    pub fn set_link(&self, result: Result<RawProviderResult, BridgeError>) {
        *self.link.lock().unwrap() = result;
    }

    pub fn set_sign_out(&self, result: Result<(), BridgeError>) {
        *self.sign_out.lock().unwrap() = result;
    }

    /// Session handed back with every sign-in and link, as a bridge that
    /// completes flows against the backend itself would.
    pub fn set_session(&self, session: Option<UserCredential>) {
        *self.session.lock().unwrap() = session;
    }

    pub fn last_request(&self) -> Option<SignInRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl NativeBridge for MockBridge {
    fn platform(&self) -> Platform {
        Platform::Native
    }

    fn events(&self) -> &PhoneEvents {
        &self.events
    }

    async fn sign_in(&self, request: &SignInRequest) -> Result<RawProviderResult, BridgeError> {
        self.log.record(Call::BridgeSignIn(request.provider_id));
        *self.last_request.lock().unwrap() = Some(request.clone());
        self.sign_in.lock().unwrap().clone()
    }

    async fn link(&self, request: &SignInRequest) -> Result<RawProviderResult, BridgeError> {
        self.log.record(Call::BridgeLink(request.provider_id));
        *self.last_request.lock().unwrap() = Some(request.clone());
        self.link.lock().unwrap().clone()
    }

    async fn sign_in_with_session(
        &self,
        request: &SignInRequest,
    ) -> Result<BridgeResponse, BridgeError> {
        let result = self.sign_in(request).await?;
        let session = self.session.lock().unwrap().clone();
        Ok(BridgeResponse { result, session })
    }

    async fn link_with_session(
        &self,
        request: &SignInRequest,
    ) -> Result<BridgeResponse, BridgeError> {
        let result = self.link(request).await?;
        let session = self.session.lock().unwrap().clone();
        Ok(BridgeResponse { result, session })
    }

    async fn sign_out(&self) -> Result<(), BridgeError> {
        self.log.record(Call::BridgeSignOut);
        self.sign_out.lock().unwrap().clone()
    }
}

/// Backend that accepts any credential unless told otherwise
pub struct MockBackend {
    log: Arc<CallLog>,
    current_user: Mutex<Option<AuthUser>>,
    sign_in: Mutex<Result<AuthUser, BackendError>>,
    last_credential: Mutex<Option<AuthCredential>>,
}

impl MockBackend {
    pub fn set_current_user(&self, user: Option<AuthUser>) {
        *self.current_user.lock().unwrap() = user;
    }

    pub fn set_sign_in(&self, result: Result<AuthUser, BackendError>) {
        *self.sign_in.lock().unwrap() = result;
    }

    pub fn last_credential(&self) -> Option<AuthCredential> {
        self.last_credential.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthBackend for MockBackend {
    fn current_user(&self) -> Option<AuthUser> {
        self.current_user.lock().unwrap().clone()
    }

    async fn sign_in_with_credential(
        &self,
        credential: AuthCredential,
    ) -> Result<UserCredential, BackendError> {
        self.log
            .record(Call::BackendSignIn(credential.provider_id().to_string()));
        let user = self.sign_in.lock().unwrap().clone()?;
        self.set_current_user(Some(user.clone()));
        let provider_id = credential.provider_id().to_string();
        *self.last_credential.lock().unwrap() = Some(credential);

        Ok(UserCredential {
            user,
            provider_id: Some(provider_id),
            operation_type: OperationType::SignIn,
            credential: None,
        })
    }

    async fn link_with_credential(
        &self,
        user: &AuthUser,
        credential: AuthCredential,
    ) -> Result<UserCredential, BackendError> {
        let provider_id = credential.provider_id().to_string();
        self.log
            .record(Call::BackendLink(user.uid.clone(), provider_id.clone()));
        *self.last_credential.lock().unwrap() = Some(credential);

        Ok(UserCredential {
            user: user.clone(),
            provider_id: Some(provider_id),
            operation_type: OperationType::Link,
            credential: None,
        })
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        self.log.record(Call::BackendSignOut);
        self.set_current_user(None);
        Ok(())
    }
}
