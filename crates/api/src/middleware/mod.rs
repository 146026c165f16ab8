//! Request correlation for logs.

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, RequestId, RequestIdLayer, make_request_span};
