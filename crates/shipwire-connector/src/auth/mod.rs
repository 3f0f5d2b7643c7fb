/*
[INPUT]:  Username, password or API key
[OUTPUT]: Authorization header values
[POS]:    Auth layer - handles Shipwire API authentication
[UPDATE]: When auth schemes change
*/

pub mod credentials;

pub use credentials::Credentials;
