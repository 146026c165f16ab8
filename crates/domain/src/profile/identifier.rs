use std::fmt;

/// Subject of a verified identity token; also the profile document id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Wraps a token subject. Returns `None` for a blank subject.
    #[must_use]
    pub fn new(subject: impl Into<String>) -> Option<Self> {
        let subject = subject.into();
        if subject.trim().is_empty() {
            None
        } else {
            Some(Self(subject))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}
