//! Workflow implementations.
//!
//! Each workflow checks configuration, validates input with the domain
//! types and then performs one port call.
//!
//! # Modules
//!
//! - [`mail`]: mail dispatch
//! - [`places`]: place search, geocoding and directions passthrough
//! - [`profile`]: profile read/update and username availability

pub mod mail;
pub mod places;
pub mod profile;


pub use mail::send_mail;
pub use places::{directions, geocode, search_places};
pub use profile::{
    CheckUsernameCommand, UpdateProfileCommand, UsernameAvailability, check_username,
    get_profile, update_profile,
};
