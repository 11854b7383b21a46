use serde::Serialize;

use crate::backend::UserCredential;
use crate::provider::RawProviderResult;

/// Outcome of a finished sign-in or link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialResult {
    /// Backend session the credential produced
    pub session: UserCredential,
    /// Provider payload exactly as the bridge returned it
    pub result: RawProviderResult,
}
