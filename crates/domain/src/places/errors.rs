use thiserror::Error;

/// Reasons a lookup request is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacesValidationError {
    #[error("Query text is required.")]
    MissingQuery,

    #[error("Query text must be at most {max} characters.")]
    QueryTooLong { max: usize },

    #[error("Invalid location: {value}")]
    InvalidLocation { value: String },

    #[error("Invalid radius: {value}")]
    InvalidRadius { value: String },

    #[error("Address is required.")]
    MissingAddress,

    #[error("Origin and destination are required.")]
    MissingEndpoints,

    #[error("Invalid travel mode: {value}")]
    InvalidTravelMode { value: String },
}

impl PlacesValidationError {
    /// Query parameter the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingQuery | Self::QueryTooLong { .. } => "q",
            Self::InvalidLocation { .. } => "near",
            Self::InvalidRadius { .. } => "radius",
            Self::MissingAddress => "address",
            Self::MissingEndpoints => "origin",
            Self::InvalidTravelMode { .. } => "mode",
        }
    }
}
