use std::fmt;

use super::ProfileValidationError;

/// Display name chosen by the user.
///
/// Trimmed, 3 to 60 characters (Unicode scalar values). Uniqueness is
/// case-insensitive and compares [`Username::canonical`] forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub const MIN_LENGTH: usize = 3;
    pub const MAX_LENGTH: usize = 60;

    /// # Errors
    ///
    /// Returns a length error when the trimmed value is out of bounds.
    pub fn new(raw: &str) -> Result<Self, ProfileValidationError> {
        let trimmed = raw.trim();
        let length = trimmed.chars().count();

        if length < Self::MIN_LENGTH {
            return Err(ProfileValidationError::UsernameTooShort {
                min: Self::MIN_LENGTH,
            });
        }
        if length > Self::MAX_LENGTH {
            return Err(ProfileValidationError::UsernameTooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Lowercase form used for uniqueness lookups.
    #[must_use]
    pub fn canonical(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}
