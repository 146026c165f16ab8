//! Infrastructure layer for the carelink backend
//!
//! This crate provides concrete implementations of the ports defined in
//! the workflow layer. It talks to SendGrid, Google Maps Web Services,
//! Firestore and Firebase Authentication over HTTPS.

pub mod adapters;
pub mod config;
pub mod errors;
