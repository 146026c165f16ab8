use thiserror::Error;

/// Reasons a profile request is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileValidationError {
    #[error("Username is required.")]
    MissingUsername,

    #[error("Username must be at least {min} characters.")]
    UsernameTooShort { min: usize },

    #[error("Username must be at most {max} characters.")]
    UsernameTooLong { max: usize },

    #[error("Username is already taken.")]
    UsernameTaken,

    #[error("{field} must be at most {max} characters.")]
    LocationTooLong { field: &'static str, max: usize },

    #[error("Invalid age: {value}")]
    InvalidAge { value: String },

    #[error("Invalid interest: {value}")]
    InvalidInterest { value: String },

    #[error("No profile fields to update.")]
    EmptyPatch,
}

impl ProfileValidationError {
    /// Request field the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingUsername
            | Self::UsernameTooShort { .. }
            | Self::UsernameTooLong { .. }
            | Self::UsernameTaken => "username",
            Self::LocationTooLong { field, .. } => *field,
            Self::InvalidAge { .. } => "age",
            Self::InvalidInterest { .. } => "interest",
            Self::EmptyPatch => "body",
        }
    }
}
