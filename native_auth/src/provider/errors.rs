use thiserror::Error;

use super::types::ProviderId;

/// Errors raised while resolving a provider or turning its raw result into a
/// backend credential. None of these involve I/O.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The identifier is not one of the registered providers
    #[error("The '{0}' provider was not supported")]
    NotFound(String),

    /// The provider needs sign-in options and none were given
    #[error("Phone and verification data must be provided for the '{0}' provider")]
    MissingOptions(ProviderId),

    /// The bridge answered with a result for a different provider
    #[error("Cannot build a '{expected}' credential from a '{actual}' result")]
    ResultMismatch {
        expected: ProviderId,
        actual: ProviderId,
    },

    #[error("Invalid provider payload: {0}")]
    InvalidPayload(String),
}
