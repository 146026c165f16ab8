//! Types shared across the domain modules.

mod errors;

pub use errors::DomainError;
