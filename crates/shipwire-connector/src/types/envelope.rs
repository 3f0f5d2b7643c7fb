/*
[INPUT]:  Raw JSON bodies returned by the Shipwire API
[OUTPUT]: Typed response envelopes and paged collections
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the envelope schema changes
*/

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Wrapper object around every Shipwire JSON response.
///
/// `status` is the API-level status. It can disagree with the HTTP status on
/// successful transport (a 200 carrying `"status": 400`), which is why it is
/// checked separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<R = serde_json::Value> {
    pub status: u16,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub resource_location: Option<String>,
    pub resource: Option<R>,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub errors: Vec<ApiMessage>,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub warnings: Vec<ApiMessage>,
}

impl<R> Envelope<R> {
    /// True when the API signalled a failure in the body
    pub fn is_api_error(&self) -> bool {
        self.status >= 300
    }

    /// `"code: message"` for every entry in `errors`, joined with `"; "`
    pub fn error_summary(&self) -> Option<String> {
        if self.errors.is_empty() {
            return None;
        }
        Some(
            self.errors
                .iter()
                .map(ApiMessage::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        )
    }

    pub fn message_or_default(&self) -> String {
        self.message.clone().unwrap_or_default()
    }

    /// Same envelope carrying `resource` instead
    pub fn with_resource<T>(self, resource: Option<T>) -> Envelope<T> {
        Envelope {
            status: self.status,
            message: self.message,
            resource_location: self.resource_location,
            resource,
            errors: self.errors,
            warnings: self.warnings,
        }
    }
}

impl Envelope {
    /// Convert the raw `resource` into `R`
    pub fn into_typed<R: DeserializeOwned>(mut self) -> serde_json::Result<Envelope<R>> {
        let resource = self
            .resource
            .take()
            .map(serde_json::from_value)
            .transpose()?;
        Ok(self.with_resource(resource))
    }
}

/// Entry of the `errors` or `warnings` arrays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default, deserialize_with = "serde_helpers::string_or_number")]
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl std::fmt::Display for ApiMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// `resource` payload of listing endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection<T> {
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default = "Vec::new")]
    pub items: Vec<CollectionItem<T>>,
}

impl<T> Collection<T> {
    pub fn resources(&self) -> impl Iterator<Item = &T> {
        self.items.iter().map(|item| &item.resource)
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionItem<T> {
    #[serde(default)]
    pub resource_location: Option<String>,
    pub resource: T,
}

mod serde_helpers {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(String::new()),
            Value::String(raw) => Ok(raw),
            other => Ok(other.to_string()),
        }
    }

    pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
    }
}
