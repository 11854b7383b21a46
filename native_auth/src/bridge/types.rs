use serde::{Deserialize, Serialize};
use std::fmt;

use crate::backend::UserCredential;
use crate::provider::RawProviderResult;

/// Where a bridge runs its provider flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Native SDKs return raw tokens
    Native,
    /// Browser popups and SMS confirmation driven through the backend
    Web,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => f.write_str("native"),
            Self::Web => f.write_str("web"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeOperation {
    SignIn,
    Link,
    SignOut,
}

impl fmt::Display for BridgeOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignIn => f.write_str("sign-in"),
            Self::Link => f.write_str("link"),
            Self::SignOut => f.write_str("sign-out"),
        }
    }
}

/// Raw provider result, plus the backend session when the bridge already
/// completed the flow against the backend itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeResponse {
    pub result: RawProviderResult,
    pub session: Option<UserCredential>,
}

impl BridgeResponse {
    pub fn with_session(result: RawProviderResult, session: UserCredential) -> Self {
        Self {
            result,
            session: Some(session),
        }
    }
}

impl From<RawProviderResult> for BridgeResponse {
    fn from(result: RawProviderResult) -> Self {
        Self {
            result,
            session: None,
        }
    }
}
