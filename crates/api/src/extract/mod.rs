//! Request extractors shared by the handlers.

pub mod json_object;

pub use json_object::{JsonObject, NOT_A_JSON_OBJECT};
