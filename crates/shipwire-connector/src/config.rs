/*
[INPUT]:  YAML configuration file or string
[OUTPUT]: Parsed connector configuration (credentials, environment, transport)
[POS]:    Configuration layer - host-supplied connector setup
[UPDATE]: When adding new configuration options
*/

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::auth::Credentials;
use crate::http::client::{DEFAULT_API_VERSION, DEFAULT_USER_AGENT};
use crate::http::{ClientConfig, Result, ShipwireError};
use crate::types::Environment;

/// Connector settings a host application can keep in a YAML file
#[derive(Clone, PartialEq, Deserialize, Serialize)]
pub struct ShipwireConfig {
    /// Account username, or the API key when no password is given
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub environment: Environment,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Overrides the environment's base URL
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl ShipwireConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|err| {
            ShipwireError::Config(format!("failed to read {}: {err}", path.display()))
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|err| ShipwireError::Config(format!("invalid shipwire config: {err}")))
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::from_parts(self.username.as_deref(), self.password.as_deref())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            user_agent: self.user_agent.clone(),
            api_version: self.api_version.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

impl fmt::Debug for ShipwireConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShipwireConfig")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("environment", &self.environment)
            .field("api_version", &self.api_version)
            .field("user_agent", &self.user_agent)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("base_url", &self.base_url)
            .finish()
    }
}
