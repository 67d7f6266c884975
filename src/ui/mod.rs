//! UI module for MoodMuse
//!
//! Rendering for the three screens (mood selector, results, favorites) plus
//! the shared header and key hint bar. Rendering only reads store snapshots.

mod favorites;
mod helpers;
mod results;
mod selector;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::models::Screen;
use crate::theme::{ACCENT, BG_PRIMARY, TEXT_PRIMARY};

use favorites::render_favorites;
use results::render_results;
use selector::render_mood_selector;

/// Draw one frame for the current app state
pub fn draw(frame: &mut Frame, app: &App) {
    let state = app.store.snapshot();
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(BG_PRIMARY)),
        area,
    );

    // Header, content area, bottom bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(3),    // Screen content
            Constraint::Length(1), // Key hints (single line)
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        app.screen.title(),
        Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, layout[0]);

    let content_area = layout[1].inner(Margin::new(2, 0));
    match app.screen {
        Screen::MoodSelector => render_mood_selector(content_area, app, frame),
        Screen::Results => render_results(content_area, app, &state, frame),
        Screen::Favorites => {
            render_favorites(content_area, &state.favorites, app.favorites_cursor, frame)
        }
    }

    let hints = Paragraph::new(key_hints(app.screen))
        .style(Style::default().fg(Color::Black).bg(ACCENT));
    frame.render_widget(hints, layout[2]);
}

/// Keybinding hints for a screen
pub fn key_hints(screen: Screen) -> &'static str {
    match screen {
        Screen::MoodSelector => {
            " ←↑↓→: Move | Space: Select | Enter: Continue | v: Favorites | q: Quit "
        }
        Screen::Results => {
            " f: Favorite | r: New suggestions | m: Another mood | v: Favorites | q: Quit "
        }
        Screen::Favorites => " ↑↓: Move | d: Remove | Esc: Back | q: Quit ",
    }
}
