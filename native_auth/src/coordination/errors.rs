//! Error types for the orchestration layer

use thiserror::Error;

use crate::backend::BackendError;
use crate::bridge::{BridgeError, BridgeOperation};
use crate::provider::{ProviderError, ProviderId};

/// Errors returned by [`AuthClient`](super::AuthClient)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The identifier is not a registered provider
    #[error("The '{0}' provider was not supported")]
    ProviderNotFound(String),

    /// The phone provider was called without phone options
    #[error("Phone and verification data must be provided for the '{0}' provider")]
    MissingOptions(ProviderId),

    /// A link was requested while nobody is signed in
    #[error("No user to link to")]
    NoUserToLink,

    /// Error from the native layer
    #[error("Native bridge error: {0}")]
    NativeBridge(BridgeError),

    /// The backend rejected the credential
    #[error("Backend credential error: {0}")]
    BackendCredential(BackendError),

    /// The provider has no implementation of this operation on this platform
    #[error("The '{provider_id}' provider does not support {operation}")]
    UnsupportedOperation {
        provider_id: ProviderId,
        operation: BridgeOperation,
    },

    /// The bridge answered with something no credential can be built from
    #[error("Invalid provider result: {0}")]
    InvalidResult(String),
}

impl AuthError {
    /// Log the error and return self
    pub fn log(self) -> Self {
        match &self {
            Self::ProviderNotFound(id) => tracing::error!("Provider not found: {}", id),
            Self::MissingOptions(id) => tracing::error!("Missing options for {}", id),
            Self::NoUserToLink => tracing::error!("No user to link to"),
            Self::NativeBridge(err) => tracing::error!("Native bridge error: {}", err),
            Self::BackendCredential(err) => tracing::error!("Backend credential error: {}", err),
            Self::UnsupportedOperation {
                provider_id,
                operation,
            } => tracing::error!("Unsupported {} for {}", operation, provider_id),
            Self::InvalidResult(msg) => tracing::error!("Invalid provider result: {}", msg),
        }
        self
    }
}

// Custom From implementations that automatically log errors

impl From<ProviderError> for AuthError {
    fn from(err: ProviderError) -> Self {
        let error = match err {
            ProviderError::NotFound(id) => Self::ProviderNotFound(id),
            ProviderError::MissingOptions(id) => Self::MissingOptions(id),
            err @ (ProviderError::ResultMismatch { .. } | ProviderError::InvalidPayload(_)) => {
                Self::InvalidResult(err.to_string())
            }
        };
        tracing::error!("{}", error);
        error
    }
}

impl From<BridgeError> for AuthError {
    fn from(err: BridgeError) -> Self {
        let error = match err {
            BridgeError::NoUserToLink => Self::NoUserToLink,
            BridgeError::MissingOptions(id) => Self::MissingOptions(id),
            BridgeError::UnsupportedOperation {
                provider_id,
                operation,
                ..
            } => Self::UnsupportedOperation {
                provider_id,
                operation,
            },
            err => Self::NativeBridge(err),
        };
        tracing::error!("{}", error);
        error
    }
}

impl From<BackendError> for AuthError {
    fn from(err: BackendError) -> Self {
        let error = Self::BackendCredential(err);
        tracing::error!("{}", error);
        error
    }
}
