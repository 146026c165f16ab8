//! Domain layer for carelink
//!
//! Value objects and validation rules for the three request surfaces:
//! outgoing mail, user profiles and place lookups. Everything here is pure;
//! no function performs IO.

pub mod common;
pub mod mail;
pub mod places;
pub mod profile;
