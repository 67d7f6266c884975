//! Enums used throughout MoodMuse
//!
//! This module contains the enum types used for navigation and for
//! describing where a session is in its mood/generation lifecycle.

/// Which screen the view layer is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    MoodSelector, // Grid of mood cards
    Results,      // Quote, affirmation and songs for the selected mood
    Favorites,    // Saved bundles
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::MoodSelector => "How are you feeling today?",
            Screen::Results => "Your Personalized Inspiration",
            Screen::Favorites => "Favorites",
        }
    }
}

/// Session phase derived from store state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,         // No mood selected yet
    MoodSelected, // Mood picked, nothing generated for it
    Generating,   // Generation in flight
    Ready,        // Content available
    Failed,       // Last generation failed
}
