//! Data models for MoodMuse
//!
//! This module contains the core data structures:
//! - Mood keys and their display metadata
//! - Content bundles (quote, affirmation, songs)
//! - Enums for navigation and session phase

pub mod content;
pub mod enums;
pub mod mood;

// Re-exports for convenient access
pub use content::{ContentBundle, Song};
pub use enums::{Phase, Screen};
pub use mood::MoodKey;
