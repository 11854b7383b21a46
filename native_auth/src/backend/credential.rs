use serde::{Deserialize, Serialize};

/// Credential asserting an identity proven by an OAuth-style provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthCredential {
    pub provider_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// OAuth 1.0 token secret (Twitter)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_nonce: Option<String>,
    /// Scopes requested on the provider object that produced this credential
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,
}

impl OAuthCredential {
    /// The token identifying the subject: the id token when present, otherwise
    /// the access token.
    pub fn subject_token(&self) -> Option<&str> {
        self.id_token
            .as_deref()
            .or(self.access_token.as_deref())
            .filter(|token| !token.is_empty())
    }
}

/// Credential produced by a phone verification flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneAuthCredential {
    verification_id: String,
    verification_code: String,
}

impl PhoneAuthCredential {
    pub fn new(verification_id: impl Into<String>, verification_code: impl Into<String>) -> Self {
        Self {
            verification_id: verification_id.into(),
            verification_code: verification_code.into(),
        }
    }

    pub fn verification_id(&self) -> &str {
        &self.verification_id
    }

    pub fn verification_code(&self) -> &str {
        &self.verification_code
    }
}

/// Backend credential built from a raw provider result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "signInMethod")]
pub enum AuthCredential {
    #[serde(rename = "oauth")]
    OAuth(OAuthCredential),
    #[serde(rename = "phone")]
    Phone(PhoneAuthCredential),
}

impl AuthCredential {
    pub fn provider_id(&self) -> &str {
        match self {
            Self::OAuth(credential) => &credential.provider_id,
            Self::Phone(_) => crate::provider::ProviderId::Phone.as_str(),
        }
    }

    pub fn as_oauth(&self) -> Option<&OAuthCredential> {
        match self {
            Self::OAuth(credential) => Some(credential),
            Self::Phone(_) => None,
        }
    }

    pub fn as_phone(&self) -> Option<&PhoneAuthCredential> {
        match self {
            Self::Phone(credential) => Some(credential),
            Self::OAuth(_) => None,
        }
    }
}
