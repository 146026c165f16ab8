//! User profile domain.
//!
//! A profile is keyed by the identity token subject ([`UserId`]) and holds a
//! handful of optional fields. It is created by the first update and
//! changed afterwards by partial merge ([`ProfilePatch`]).

mod aggregate;
mod attributes;
mod errors;
mod identifier;
mod patch;
mod username;

pub use aggregate::UserProfile;
pub use attributes::{AgeBand, InterestTopic};
pub use errors::ProfileValidationError;
pub use identifier::UserId;
pub use patch::{FieldUpdate, MAX_LOCATION_LENGTH, ProfilePatch};
pub use username::Username;
