use thiserror::Error;

use crate::backend::BackendError;
use crate::provider::ProviderId;

use super::types::{BridgeOperation, Platform};

/// Failures reported by a [`NativeBridge`](super::NativeBridge).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// Opaque failure from the native layer (connectivity, permission denial, ...)
    #[error("Native error: {0}")]
    Native(String),

    #[error("Sign-in cancelled by the user")]
    Cancelled,

    #[error("No user to link to")]
    NoUserToLink,

    #[error("Phone and verification data must be provided for the '{0}' provider")]
    MissingOptions(ProviderId),

    #[error("The '{provider_id}' provider does not support {operation} on {platform}")]
    UnsupportedOperation {
        provider_id: ProviderId,
        operation: BridgeOperation,
        platform: Platform,
    },

    #[error("Invalid provider result: {0}")]
    InvalidResult(String),

    #[error("Listener removed before an event arrived")]
    ListenerRemoved,

    #[error("Unknown bridge event: {0}")]
    UnknownEvent(String),

    #[error("Serde error: {0}")]
    Serde(String),

    /// Error from the backend driven by the web fallback
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),
}
