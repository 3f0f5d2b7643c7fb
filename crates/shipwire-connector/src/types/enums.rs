/*
[INPUT]:  Environment names from configuration or callers
[OUTPUT]: Typed environment selection with base URLs
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When Shipwire adds or moves API hosts
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::http::ShipwireError;

const LIVE_BASE_URL: &str = "https://api.shipwire.com";
const SANDBOX_BASE_URL: &str = "https://api.beta.shipwire.com";

/// Shipwire deployment a connector talks to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Live,
    Sandbox,
}

impl Environment {
    pub const fn base_url(self) -> &'static str {
        match self {
            Environment::Live => LIVE_BASE_URL,
            Environment::Sandbox => SANDBOX_BASE_URL,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Environment::Live => "live",
            Environment::Sandbox => "sandbox",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ShipwireError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(Environment::Live),
            "sandbox" => Ok(Environment::Sandbox),
            other => Err(ShipwireError::Config(format!(
                "unknown Shipwire environment '{other}', expected 'live' or 'sandbox'"
            ))),
        }
    }
}
