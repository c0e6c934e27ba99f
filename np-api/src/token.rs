/// Opaque credential proving the user's identity to the now playing endpoint.
///
/// The token is trusted as-is: there is no format validation and no expiry.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a raw credential
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw credential
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

// Keeps the credential out of logs.
impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AccessToken(<{} chars>)", self.0.chars().count())
    }
}
