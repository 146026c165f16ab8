//! Recipient parsing.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::MailValidationError;

/// Maximum number of recipients accepted in one request.
pub const MAX_RECIPIENTS: usize = 5;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

// =============================================================================
// EmailAddress
// =============================================================================

/// An address that passed the simple `local@domain.tld` shape check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validates a single, already trimmed address.
    ///
    /// # Errors
    ///
    /// Returns [`MailValidationError::InvalidAddress`] when the address does
    /// not match the pattern.
    pub fn new(address: impl Into<String>) -> Result<Self, MailValidationError> {
        let address = address.into();
        if EMAIL_PATTERN.is_match(&address) {
            Ok(Self(address))
        } else {
            Err(MailValidationError::InvalidAddress { address })
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

// =============================================================================
// RecipientsInput
// =============================================================================

/// `to` as a client sent it: one comma-separated string or a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipientsInput {
    Joined(String),
    Listed(Vec<String>),
}

impl RecipientsInput {
    /// An empty string counts as not sent; a list counts as sent even when
    /// it is empty.
    #[must_use]
    pub fn is_present(&self) -> bool {
        match self {
            Self::Joined(joined) => !joined.is_empty(),
            Self::Listed(_) => true,
        }
    }

    /// # Errors
    ///
    /// Same as [`RecipientList::parse`]; list entries are joined with commas
    /// first.
    pub fn parse(&self) -> Result<RecipientList, MailValidationError> {
        match self {
            Self::Joined(joined) => RecipientList::parse(joined),
            Self::Listed(entries) => RecipientList::parse(&entries.join(",")),
        }
    }
}

impl From<String> for RecipientsInput {
    fn from(joined: String) -> Self {
        Self::Joined(joined)
    }
}

impl From<&str> for RecipientsInput {
    fn from(joined: &str) -> Self {
        Self::Joined(joined.to_string())
    }
}

impl From<Vec<String>> for RecipientsInput {
    fn from(entries: Vec<String>) -> Self {
        Self::Listed(entries)
    }
}

// =============================================================================
// RecipientList
// =============================================================================

/// Between one and [`MAX_RECIPIENTS`] valid addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientList(Vec<EmailAddress>);

impl RecipientList {
    /// Parses a comma-separated recipient string.
    ///
    /// Entries are trimmed and blank entries dropped before the count and
    /// address checks run, so `"a@x.io, ,b@x.io"` holds two recipients.
    ///
    /// # Errors
    ///
    /// Fails on an empty list, more than [`MAX_RECIPIENTS`] entries, or the
    /// first entry that is not a valid address.
    pub fn parse(raw: &str) -> Result<Self, MailValidationError> {
        let entries: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .collect();

        if entries.is_empty() {
            return Err(MailValidationError::EmptyRecipientList);
        }
        if entries.len() > MAX_RECIPIENTS {
            return Err(MailValidationError::TooManyRecipients {
                count: entries.len(),
            });
        }

        entries
            .into_iter()
            .map(EmailAddress::new)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    #[must_use]
    pub fn addresses(&self) -> &[EmailAddress] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
