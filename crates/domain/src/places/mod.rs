//! Place, geocoding and directions lookups.

mod category;
mod errors;
mod query;
mod route;

pub use category::PlaceCategory;
pub use errors::PlacesValidationError;
pub use query::{Coordinates, PlaceQuery, SearchRadius};
pub use route::{DirectionsQuery, GeocodeQuery, TravelMode};
