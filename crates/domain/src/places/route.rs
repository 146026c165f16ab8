//! Geocoding and directions input.

use std::fmt;
use std::str::FromStr;

use super::PlacesValidationError;

// =============================================================================
// GeocodeQuery
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeQuery {
    address: String,
}

impl GeocodeQuery {
    /// # Errors
    ///
    /// Rejects a blank address.
    pub fn new(address: &str) -> Result<Self, PlacesValidationError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(PlacesValidationError::MissingAddress);
        }
        Ok(Self {
            address: address.to_string(),
        })
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }
}

// =============================================================================
// TravelMode
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl TravelMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Bicycling => "bicycling",
            Self::Transit => "transit",
        }
    }
}

impl FromStr for TravelMode {
    type Err = PlacesValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "" | "driving" => Ok(Self::Driving),
            "walking" => Ok(Self::Walking),
            "bicycling" => Ok(Self::Bicycling),
            "transit" => Ok(Self::Transit),
            _ => Err(PlacesValidationError::InvalidTravelMode {
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

// =============================================================================
// DirectionsQuery
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionsQuery {
    origin: String,
    destination: String,
    mode: TravelMode,
}

impl DirectionsQuery {
    /// # Errors
    ///
    /// Rejects a blank origin or destination.
    pub fn new(
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> Result<Self, PlacesValidationError> {
        let (origin, destination) = (origin.trim(), destination.trim());
        if origin.is_empty() || destination.is_empty() {
            return Err(PlacesValidationError::MissingEndpoints);
        }
        Ok(Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            mode,
        })
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    #[must_use]
    pub const fn mode(&self) -> TravelMode {
        self.mode
    }
}
