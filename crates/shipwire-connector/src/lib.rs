/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Shipwire connector crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod config;
pub mod http;
pub mod types;

pub use auth::Credentials;
pub use config::ShipwireConfig;

// Re-export commonly used types from http
pub use http::{
    ApiRequest,
    ClientConfig,
    Connector,
    Pagination,
    Params,
    Result,
    Returns,
    ShipwireError,
};

// Re-export all types
pub use types::*;
