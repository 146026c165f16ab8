//! Firestore REST adapter for user profiles.

pub mod document;
pub mod repository;
pub mod token;

pub use repository::FirestoreProfileRepository;
pub use token::{AccessTokenSource, MetadataTokenCache};
