pub mod fallback;
pub mod health;
pub mod mail;
pub mod places;
pub mod profile;

pub use fallback::{method_not_allowed, not_found};
pub use health::health_check;
pub use mail::send_mail;
pub use places::{directions, geocode, search_places};
pub use profile::{check_username, get_profile, update_profile};
