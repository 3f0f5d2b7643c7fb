/*
[INPUT]:  Username/password pair or API key
[OUTPUT]: Authorization header value for Shipwire requests
[POS]:    Auth layer - credential model and header derivation
[UPDATE]: When Shipwire adds or changes authorization schemes
*/

use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

/// Credentials used to authorize every Shipwire call.
///
/// A username with a password authenticates with HTTP Basic; a username on
/// its own is treated as a Shipwire API key.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Credentials {
    Basic { username: String, password: String },
    ApiKey(String),
    #[default]
    Anonymous,
}

impl Credentials {
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::from_parts(Some(&username.into()), Some(&password.into()))
    }

    pub fn api_key(key: impl Into<String>) -> Self {
        Self::from_parts(Some(&key.into()), None)
    }

    /// Pick the scheme from whichever parts are present and non-empty.
    pub fn from_parts(username: Option<&str>, password: Option<&str>) -> Self {
        let username = username.filter(|value| !value.is_empty());
        let password = password.filter(|value| !value.is_empty());

        match (username, password) {
            (Some(username), Some(password)) => Credentials::Basic {
                username: username.to_string(),
                password: password.to_string(),
            },
            (Some(key), None) => Credentials::ApiKey(key.to_string()),
            _ => Credentials::Anonymous,
        }
    }

    /// `Authorization` header value, or `None` when there is nothing to send.
    pub fn authorization_header(&self) -> Option<String> {
        match self {
            Credentials::Basic { username, password } => Some(format!(
                "Basic {}",
                BASE64.encode(format!("{username}:{password}"))
            )),
            Credentials::ApiKey(key) => Some(format!("ShipwireKey {key}")),
            Credentials::Anonymous => None,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Credentials::Anonymous)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Credentials::ApiKey(_) => f.debug_tuple("ApiKey").field(&"<redacted>").finish(),
            Credentials::Anonymous => f.write_str("Anonymous"),
        }
    }
}
