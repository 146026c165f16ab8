//! Enumerated profile attributes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ProfileValidationError;

// =============================================================================
// AgeBand
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBand {
    #[serde(rename = "under-18")]
    Under18,
    #[serde(rename = "18-24")]
    From18To24,
    #[serde(rename = "25-34")]
    From25To34,
    #[serde(rename = "35-44")]
    From35To44,
    #[serde(rename = "45-54")]
    From45To54,
    #[serde(rename = "55-64")]
    From55To64,
    #[serde(rename = "65+")]
    From65,
}

impl AgeBand {
    pub const ALL: [Self; 7] = [
        Self::Under18,
        Self::From18To24,
        Self::From25To34,
        Self::From35To44,
        Self::From45To54,
        Self::From55To64,
        Self::From65,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Under18 => "under-18",
            Self::From18To24 => "18-24",
            Self::From25To34 => "25-34",
            Self::From35To44 => "35-44",
            Self::From45To54 => "45-54",
            Self::From55To64 => "55-64",
            Self::From65 => "65+",
        }
    }
}

impl FromStr for AgeBand {
    type Err = ProfileValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|band| band.as_str() == value.trim())
            .ok_or_else(|| ProfileValidationError::InvalidAge {
                value: value.to_string(),
            })
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

// =============================================================================
// InterestTopic
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InterestTopic {
    MentalHealth,
    PhysicalActivity,
    Nutrition,
    Sleep,
    Community,
    Volunteering,
}

impl InterestTopic {
    pub const ALL: [Self; 6] = [
        Self::MentalHealth,
        Self::PhysicalActivity,
        Self::Nutrition,
        Self::Sleep,
        Self::Community,
        Self::Volunteering,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MentalHealth => "mental-health",
            Self::PhysicalActivity => "physical-activity",
            Self::Nutrition => "nutrition",
            Self::Sleep => "sleep",
            Self::Community => "community",
            Self::Volunteering => "volunteering",
        }
    }
}

impl FromStr for InterestTopic {
    type Err = ProfileValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|topic| topic.as_str() == value.trim())
            .ok_or_else(|| ProfileValidationError::InvalidInterest {
                value: value.to_string(),
            })
    }
}

impl fmt::Display for InterestTopic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

// =============================================================================
// Tests
// =============================================================================
