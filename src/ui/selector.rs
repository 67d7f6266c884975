//! Mood selector screen: a grid of mood cards

use ratatui::{
    prelude::*,
    symbols::border,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, GRID_COLUMNS};
use crate::models::MoodKey;
use crate::theme::{mood_color, ACCENT, BG_CARD, BORDER_SUBTLE, TEXT_MUTED, TEXT_PRIMARY};

/// Render the mood grid in `area`
pub fn render_mood_selector(area: Rect, app: &App, frame: &mut Frame) {
    let selected = app.store.selected_mood();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Subtitle
            Constraint::Min(6),    // Card grid
        ])
        .split(area);

    let subtitle = Paragraph::new(Line::from(Span::styled(
        "Select a mood to get personalized inspiration",
        Style::default().fg(TEXT_MUTED),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(subtitle, layout[0]);

    let rows = MoodKey::ALL.len().div_ceil(GRID_COLUMNS);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(layout[1]);

    for (row, row_area) in row_areas.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(*row_area);

        for (col, cell) in cells.iter().enumerate() {
            let index = row * GRID_COLUMNS + col;
            let Some(mood) = MoodKey::ALL.get(index).copied() else {
                continue;
            };
            render_mood_card(
                *cell,
                mood,
                app.mood_cursor == index,
                selected == Some(mood),
                frame,
            );
        }
    }
}

fn render_mood_card(area: Rect, mood: MoodKey, focused: bool, selected: bool, frame: &mut Frame) {
    let color = mood_color(mood);
    let border_color = if focused { ACCENT } else { BORDER_SUBTLE };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(BG_CARD));
    if selected {
        block = block.title(Line::from(" ✓ ").alignment(Alignment::Right));
    }

    let mut name_style = Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD);
    if focused {
        name_style = name_style.fg(color);
    }

    let content = vec![
        Line::from(Span::styled(mood.glyph(), Style::default().fg(color))),
        Line::from(Span::styled(mood.label(), name_style)),
    ];

    // Vertically center the two content lines
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let top_pad = inner.height.saturating_sub(2) / 2;
    let content_area = Rect {
        y: inner.y + top_pad,
        height: inner.height.saturating_sub(top_pad),
        ..inner
    };
    frame.render_widget(
        Paragraph::new(content).alignment(Alignment::Center),
        content_area,
    );
}
