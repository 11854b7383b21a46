use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::errors::ProviderError;

/// Identity providers the bridge can drive.
///
/// Serialises to the wire identifiers shared with the native plugin
/// (`"google.com"`, `"apple.com"`, `"facebook.com"`, `"twitter.com"`, `"phone"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderId {
    #[serde(rename = "google.com")]
    Google,
    #[serde(rename = "apple.com")]
    Apple,
    #[serde(rename = "facebook.com")]
    Facebook,
    #[serde(rename = "twitter.com")]
    Twitter,
    #[serde(rename = "phone")]
    Phone,
}

impl ProviderId {
    pub const ALL: [ProviderId; 5] = [
        Self::Google,
        Self::Apple,
        Self::Facebook,
        Self::Twitter,
        Self::Phone,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google.com",
            Self::Apple => "apple.com",
            Self::Facebook => "facebook.com",
            Self::Twitter => "twitter.com",
            Self::Phone => "phone",
        }
    }

    /// Whether a sign-in for this provider needs [`PhoneSignInOptions`].
    pub const fn requires_options(&self) -> bool {
        matches!(self, Self::Phone)
    }
}

impl AsRef<str> for ProviderId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|provider| provider.as_str() == s)
            .ok_or_else(|| ProviderError::NotFound(s.to_string()))
    }
}

/// Options for the phone provider. No other provider takes options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneSignInOptions {
    pub phone: String,
    /// SMS code, when the caller already has it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_code: Option<String>,
    /// Id of the element that hosts the challenge widget on the web
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
}

impl PhoneSignInOptions {
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            ..Default::default()
        }
    }

    pub fn with_verification_code(mut self, code: impl Into<String>) -> Self {
        self.verification_code = Some(code.into());
        self
    }

    pub fn with_container(mut self, container: impl Into<String>) -> Self {
        self.container = Some(container.into());
        self
    }
}

/// Request handed to the bridge for a sign-in or link attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub provider_id: ProviderId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<PhoneSignInOptions>,
}

impl SignInRequest {
    /// Builds a request, enforcing that only the phone provider carries options.
    ///
    /// Options given to any other provider are dropped.
    pub fn new(
        provider_id: ProviderId,
        data: Option<PhoneSignInOptions>,
    ) -> Result<Self, ProviderError> {
        let data = match (provider_id.requires_options(), data) {
            (true, None) => return Err(ProviderError::MissingOptions(provider_id)),
            (true, Some(data)) => Some(data),
            (false, Some(_)) => {
                tracing::warn!("Ignoring sign-in options passed to the {} provider", provider_id);
                None
            }
            (false, None) => None,
        };
        Ok(Self { provider_id, data })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleSignInResult {
    pub id_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacebookSignInResult {
    pub id_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitterSignInResult {
    pub id_token: String,
    pub secret: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppleSignInResult {
    pub id_token: String,
    #[serde(default)]
    pub raw_nonce: String,
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub secret: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneSignInResult {
    pub verification_id: String,
    /// Absent until the SMS code has been entered or auto-retrieved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_code: Option<String>,
}

/// Provider-specific payload produced by a sign-in or link attempt.
///
/// The JSON form is tagged by `providerId` and matches what the native plugin
/// sends, e.g. `{"providerId":"google.com","idToken":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "providerId")]
pub enum RawProviderResult {
    #[serde(rename = "google.com")]
    Google(GoogleSignInResult),
    #[serde(rename = "apple.com")]
    Apple(AppleSignInResult),
    #[serde(rename = "facebook.com")]
    Facebook(FacebookSignInResult),
    #[serde(rename = "twitter.com")]
    Twitter(TwitterSignInResult),
    #[serde(rename = "phone")]
    Phone(PhoneSignInResult),
}

impl RawProviderResult {
    pub fn provider_id(&self) -> ProviderId {
        match self {
            Self::Google(_) => ProviderId::Google,
            Self::Apple(_) => ProviderId::Apple,
            Self::Facebook(_) => ProviderId::Facebook,
            Self::Twitter(_) => ProviderId::Twitter,
            Self::Phone(_) => ProviderId::Phone,
        }
    }

    /// Parses a payload received from a native host.
    pub fn from_json(value: Value) -> Result<Self, ProviderError> {
        serde_json::from_value(value).map_err(|e| ProviderError::InvalidPayload(e.to_string()))
    }
}
