//! Theme module for MoodMuse
//!
//! Centralized color palette and styling constants: a soft dark background
//! with one pastel accent per mood.

use ratatui::style::Color;

use crate::models::MoodKey;

// ============================================================================
// Background Colors
// ============================================================================

/// Primary background color (#14121c)
pub const BG_PRIMARY: Color = Color::Rgb(20, 18, 28);

/// Card background color (#1e1b29)
pub const BG_CARD: Color = Color::Rgb(30, 27, 41);

/// Subtle border color (#2e2a3d)
pub const BORDER_SUBTLE: Color = Color::Rgb(46, 42, 61);

// ============================================================================
// Accent & Status Colors
// ============================================================================

/// Primary accent, used for focus rings and the key hint bar (#a78bfa)
pub const ACCENT: Color = Color::Rgb(167, 139, 250);

/// Favorite star (#fbbf24)
pub const FAVORITE: Color = Color::Rgb(251, 191, 36);

/// Red error color (#f87171)
pub const RED_ERROR: Color = Color::Rgb(248, 113, 113);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Muted text color for labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

/// Accent color for a mood card
pub fn mood_color(mood: MoodKey) -> Color {
    match mood {
        MoodKey::Happy => Color::Rgb(253, 224, 71),   // amber
        MoodKey::Sad => Color::Rgb(147, 197, 253),    // blue
        MoodKey::Chill => Color::Rgb(134, 239, 172),  // green
        MoodKey::Angry => Color::Rgb(252, 165, 165),  // red
        MoodKey::Excited => Color::Rgb(216, 180, 254), // purple
        MoodKey::Lonely => Color::Rgb(165, 180, 252), // indigo
    }
}
