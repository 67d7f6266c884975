//! Content bundle data structures
//!
//! A bundle is what a mood produces: a quote, an affirmation, a short song
//! list and an optional background image. The JSON shape matches what gets
//! written to local storage for favorites.

use serde::{Deserialize, Serialize};

/// A recommended song
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub artist: String,
}

impl Song {
    pub fn new(title: &str, artist: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
        }
    }
}

/// Quote, affirmation and songs for one mood
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBundle {
    pub quote: String,
    pub affirmation: String,
    pub songs: Vec<Song>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

impl ContentBundle {
    /// Favorites identity: songs and image are not part of it
    pub fn identity(&self) -> (&str, &str) {
        (&self.quote, &self.affirmation)
    }

    pub fn same_identity(&self, other: &ContentBundle) -> bool {
        self.identity() == other.identity()
    }
}
