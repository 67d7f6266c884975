//! Mood identifiers and their display metadata.

use std::fmt;
use std::str::FromStr;

/// One of the six moods a user can pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoodKey {
    Happy,
    Sad,
    Chill,
    Angry,
    Excited,
    Lonely,
}

impl MoodKey {
    /// All moods in selector display order
    pub const ALL: [MoodKey; 6] = [
        MoodKey::Happy,
        MoodKey::Sad,
        MoodKey::Chill,
        MoodKey::Angry,
        MoodKey::Excited,
        MoodKey::Lonely,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodKey::Happy => "happy",
            MoodKey::Sad => "sad",
            MoodKey::Chill => "chill",
            MoodKey::Angry => "angry",
            MoodKey::Excited => "excited",
            MoodKey::Lonely => "lonely",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MoodKey::Happy => "Happy",
            MoodKey::Sad => "Sad",
            MoodKey::Chill => "Chill",
            MoodKey::Angry => "Angry",
            MoodKey::Excited => "Excited",
            MoodKey::Lonely => "Lonely",
        }
    }

    /// Glyph shown on the mood card
    pub fn glyph(&self) -> &'static str {
        match self {
            MoodKey::Happy => "☺",
            MoodKey::Sad => "☹",
            MoodKey::Chill => "❄",
            MoodKey::Angry => "♨",
            MoodKey::Excited => "⚡",
            MoodKey::Lonely => "☾",
        }
    }
}

impl fmt::Display for MoodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known mood
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mood: {0}")]
pub struct UnknownMood(pub String);

impl FromStr for MoodKey {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        MoodKey::ALL
            .into_iter()
            .find(|m| m.as_str() == lowered)
            .ok_or_else(|| UnknownMood(s.to_string()))
    }
}
