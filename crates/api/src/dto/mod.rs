//! Request and response bodies of the HTTP API.
//!
//! Field names are camelCase on the wire to match the web client.

pub mod request;
pub mod response;
