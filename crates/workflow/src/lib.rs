//! Workflow layer for carelink
//!
//! Application use cases and the port traits they depend on. Every
//! workflow validates its input and then makes a single port call; the
//! concrete IO lives in the infrastructure crate.

pub mod errors;
pub mod ports;
pub mod workflows;

pub use errors::{Service, WorkflowError};
pub use ports::WorkflowResult;
