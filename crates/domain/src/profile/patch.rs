//! Partial profile updates.

use super::{AgeBand, InterestTopic, ProfileValidationError, Username};

/// Longest accepted country or city value, in characters.
pub const MAX_LOCATION_LENGTH: usize = 100;

// =============================================================================
// FieldUpdate
// =============================================================================

/// What a patch does to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// Field absent from the request; stored value is untouched.
    Keep,
    /// Replace the stored value.
    Set(T),
    /// Remove the stored value.
    Clear,
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        Self::Keep
    }
}

impl<T> FieldUpdate<T> {
    #[must_use]
    pub const fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }

    #[must_use]
    pub const fn as_set(&self) -> Option<&T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Keep | Self::Clear => None,
        }
    }

    /// Applies the update to a current value.
    #[must_use]
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Self::Keep => current,
            Self::Set(value) => Some(value),
            Self::Clear => None,
        }
    }
}

// =============================================================================
// ProfilePatch
// =============================================================================

/// A validated set of profile changes.
///
/// Blank strings clear the optional text and enum fields. A username can be
/// changed but not cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub username: FieldUpdate<Username>,
    pub country: FieldUpdate<String>,
    pub city: FieldUpdate<String>,
    pub age: FieldUpdate<AgeBand>,
    pub interest: FieldUpdate<InterestTopic>,
}

impl ProfilePatch {
    /// Validates raw request fields. `None` means the field was not sent.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field, or
    /// [`ProfileValidationError::EmptyPatch`] when nothing was sent.
    pub fn from_fields(
        username: Option<&str>,
        country: Option<&str>,
        city: Option<&str>,
        age: Option<&str>,
        interest: Option<&str>,
    ) -> Result<Self, ProfileValidationError> {
        let patch = Self {
            username: username
                .map(Username::new)
                .transpose()?
                .map_or(FieldUpdate::Keep, FieldUpdate::Set),
            country: location("country", country)?,
            city: location("city", city)?,
            age: enumerated(age)?,
            interest: enumerated(interest)?,
        };

        if patch.is_empty() {
            return Err(ProfileValidationError::EmptyPatch);
        }
        Ok(patch)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.username.is_keep()
            && self.country.is_keep()
            && self.city.is_keep()
            && self.age.is_keep()
            && self.interest.is_keep()
    }

    /// Stored field names touched by this patch, always ending in `updatedAt`.
    ///
    /// `usernameLower` travels with `username`.
    #[must_use]
    pub fn field_paths(&self) -> Vec<&'static str> {
        let mut paths = Vec::with_capacity(7);
        if !self.username.is_keep() {
            paths.extend(["username", "usernameLower"]);
        }
        if !self.country.is_keep() {
            paths.push("country");
        }
        if !self.city.is_keep() {
            paths.push("city");
        }
        if !self.age.is_keep() {
            paths.push("age");
        }
        if !self.interest.is_keep() {
            paths.push("interest");
        }
        paths.push("updatedAt");
        paths
    }
}

fn location(
    field: &'static str,
    raw: Option<&str>,
) -> Result<FieldUpdate<String>, ProfileValidationError> {
    match raw.map(str::trim) {
        None => Ok(FieldUpdate::Keep),
        Some("") => Ok(FieldUpdate::Clear),
        Some(value) if value.chars().count() > MAX_LOCATION_LENGTH => {
            Err(ProfileValidationError::LocationTooLong {
                field,
                max: MAX_LOCATION_LENGTH,
            })
        }
        Some(value) => Ok(FieldUpdate::Set(value.to_string())),
    }
}

fn enumerated<T>(raw: Option<&str>) -> Result<FieldUpdate<T>, ProfileValidationError>
where
    T: std::str::FromStr<Err = ProfileValidationError>,
{
    match raw.map(str::trim) {
        None => Ok(FieldUpdate::Keep),
        Some("") => Ok(FieldUpdate::Clear),
        Some(value) => value.parse().map(FieldUpdate::Set),
    }
}

// =============================================================================
// Tests
// =============================================================================
