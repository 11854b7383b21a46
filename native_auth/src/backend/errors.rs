use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    #[error("Provider already linked: {0}")]
    ProviderAlreadyLinked(String),

    /// The credential already belongs to a different account
    #[error("Credential already in use: {0}")]
    CredentialAlreadyInUse(String),

    #[error("No signed-in user")]
    NoCurrentUser,

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Invalid verification code")]
    InvalidVerificationCode,

    #[error("Verification session not found: {0}")]
    VerificationNotFound(String),

    #[error("Popup closed by user: {0}")]
    PopupClosed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
