//! Keyword-triggered category hints.

/// Place type filter inferred from the words of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceCategory {
    Hospital,
    Pharmacy,
    Doctor,
    Dentist,
    Physiotherapist,
    Gym,
    Park,
    Library,
}

// Rules are tried in order; the first rule with a matching word wins.
const RULES: [(PlaceCategory, &[&str]); 8] = [
    (PlaceCategory::Hospital, &["hospital", "hospitals", "emergency", "er"]),
    (PlaceCategory::Pharmacy, &["pharmacy", "pharmacies", "chemist", "chemists"]),
    (
        PlaceCategory::Doctor,
        &["gp", "gps", "doctor", "doctors", "clinic", "clinics", "medical"],
    ),
    (PlaceCategory::Dentist, &["dentist", "dentists", "dental"]),
    (
        PlaceCategory::Physiotherapist,
        &["physio", "physios", "physiotherapy", "physiotherapist"],
    ),
    (PlaceCategory::Gym, &["gym", "gyms", "fitness"]),
    (PlaceCategory::Park, &["park", "parks", "walk", "walking", "trail", "trails"]),
    (PlaceCategory::Library, &["library", "libraries"]),
];

impl PlaceCategory {
    /// Infers a category from free text, matching whole words
    /// case-insensitively.
    #[must_use]
    pub fn infer(text: &str) -> Option<Self> {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|character: char| !character.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .collect();

        RULES
            .iter()
            .find(|(_, keywords)| words.iter().any(|word| keywords.contains(word)))
            .map(|(category, _)| *category)
    }

    /// Provider type identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hospital => "hospital",
            Self::Pharmacy => "pharmacy",
            Self::Doctor => "doctor",
            Self::Dentist => "dentist",
            Self::Physiotherapist => "physiotherapist",
            Self::Gym => "gym",
            Self::Park => "park",
            Self::Library => "library",
        }
    }
}
