mod errors;
mod registry;
mod types;

pub use errors::ProviderError;
pub use registry::{CredentialBuilder, ProviderEntry, apple_provider, entry, lookup};
pub use types::{
    AppleSignInResult, FacebookSignInResult, GoogleSignInResult, PhoneSignInOptions,
    PhoneSignInResult, ProviderId, RawProviderResult, SignInRequest, TwitterSignInResult,
};
