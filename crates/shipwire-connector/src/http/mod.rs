/*
[INPUT]:  Connector configuration and API resources
[OUTPUT]: Typed envelopes, resources and classified errors
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoint groups or changing connector behavior
*/

pub mod client;
pub mod error;
pub mod request;
pub mod returns;
pub mod route;

pub use error::{Result, ShipwireError};
pub use request::{ApiRequest, Pagination, Params};
pub use returns::Returns;

pub use client::{ClientConfig, Connector};
