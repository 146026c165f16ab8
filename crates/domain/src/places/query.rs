//! Place search input.

use std::fmt;
use std::str::FromStr;

use super::{PlaceCategory, PlacesValidationError};

// =============================================================================
// Coordinates
// =============================================================================

/// A latitude/longitude pair used to bias searches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// # Errors
    ///
    /// Rejects values outside the WGS84 ranges or non-finite numbers.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, PlacesValidationError> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        if valid {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            Err(PlacesValidationError::InvalidLocation {
                value: format!("{latitude},{longitude}"),
            })
        }
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl FromStr for Coordinates {
    type Err = PlacesValidationError;

    /// Parses `"lat,lng"`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || PlacesValidationError::InvalidLocation {
            value: value.to_string(),
        };
        let (latitude, longitude) = value.split_once(',').ok_or_else(invalid)?;
        let latitude = latitude.trim().parse::<f64>().map_err(|_| invalid())?;
        let longitude = longitude.trim().parse::<f64>().map_err(|_| invalid())?;
        Self::new(latitude, longitude).map_err(|_| invalid())
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{},{}", self.latitude, self.longitude)
    }
}

// =============================================================================
// SearchRadius
// =============================================================================

/// Search radius in metres, clamped to what the provider accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRadius(u32);

impl SearchRadius {
    pub const DEFAULT: Self = Self(5_000);
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 50_000;

    #[must_use]
    pub fn new(metres: u32) -> Self {
        Self(metres.clamp(Self::MIN, Self::MAX))
    }

    #[must_use]
    pub const fn metres(self) -> u32 {
        self.0
    }
}

impl Default for SearchRadius {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for SearchRadius {
    type Err = PlacesValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .trim()
            .parse::<u32>()
            .map(Self::new)
            .map_err(|_| PlacesValidationError::InvalidRadius {
                value: value.to_string(),
            })
    }
}

// =============================================================================
// PlaceQuery
// =============================================================================

/// A normalised free-text place search.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceQuery {
    text: String,
    near: Option<Coordinates>,
    radius: SearchRadius,
}

impl PlaceQuery {
    pub const MAX_LENGTH: usize = 200;

    /// Collapses whitespace in `text` and checks its length.
    ///
    /// # Errors
    ///
    /// Rejects blank text or text longer than [`PlaceQuery::MAX_LENGTH`].
    pub fn new(
        text: &str,
        near: Option<Coordinates>,
        radius: SearchRadius,
    ) -> Result<Self, PlacesValidationError> {
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if text.is_empty() {
            return Err(PlacesValidationError::MissingQuery);
        }
        if text.chars().count() > Self::MAX_LENGTH {
            return Err(PlacesValidationError::QueryTooLong {
                max: Self::MAX_LENGTH,
            });
        }
        Ok(Self { text, near, radius })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn near(&self) -> Option<Coordinates> {
        self.near
    }

    #[must_use]
    pub const fn radius(&self) -> SearchRadius {
        self.radius
    }

    /// Category hint for this query's text.
    #[must_use]
    pub fn category(&self) -> Option<PlaceCategory> {
        PlaceCategory::infer(&self.text)
    }
}

// =============================================================================
// Tests
// =============================================================================
