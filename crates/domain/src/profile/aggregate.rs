use chrono::{DateTime, Utc};

use super::{AgeBand, InterestTopic, ProfilePatch, UserId, Username};

/// A stored user profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub user_id: UserId,
    pub username: Option<Username>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub age: Option<AgeBand>,
    pub interest: Option<InterestTopic>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// Profile for a user who has never saved one.
    #[must_use]
    pub const fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            username: None,
            country: None,
            city: None,
            age: None,
            interest: None,
            updated_at: None,
        }
    }

    /// Applies a patch and stamps the update time.
    #[must_use]
    pub fn merge(self, patch: ProfilePatch, now: DateTime<Utc>) -> Self {
        Self {
            user_id: self.user_id,
            username: patch.username.apply(self.username),
            country: patch.country.apply(self.country),
            city: patch.city.apply(self.city),
            age: patch.age.apply(self.age),
            interest: patch.interest.apply(self.interest),
            updated_at: Some(now),
        }
    }
}
