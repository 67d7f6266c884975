//! Results screen: loading, error, and the generated bundle

use std::time::Instant;

use ratatui::{
    prelude::*,
    symbols::border,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{ContentBundle, MoodKey, Phase};
use crate::store::MoodState;
use crate::theme::{
    mood_color, ACCENT, BG_CARD, BORDER_SUBTLE, FAVORITE, RED_ERROR, TEXT_MUTED, TEXT_PRIMARY,
    TEXT_SECONDARY,
};
use crate::utils::{format_duration, spinner_frame};

use super::helpers::{centered_rect, truncate};

/// Render the results screen for the current store state
pub fn render_results(area: Rect, app: &App, state: &MoodState, frame: &mut Frame) {
    match state.phase() {
        Phase::Generating => render_loading(area, app, frame),
        Phase::Failed => render_error(area, state.error.as_deref().unwrap_or_default(), frame),
        _ => match (&state.current_content, state.selected_mood) {
            (Some(content), Some(mood)) => {
                render_bundle(area, mood, content, state.is_favorite(content), frame)
            }
            _ => render_empty(area, frame),
        },
    }
}

fn render_loading(area: Rect, app: &App, frame: &mut Frame) {
    let elapsed = app
        .generation_started
        .map(|start| Instant::now().duration_since(start))
        .unwrap_or_default();

    let lines = vec![
        Line::from(Span::styled(
            "Finding inspiration for your mood...",
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(spinner_frame(app.animation_tick), Style::default().fg(ACCENT)),
            Span::styled(
                format!(" {}", format_duration(elapsed)),
                Style::default().fg(TEXT_MUTED),
            ),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered_rect(50, 3, area),
    );
}

fn render_error(area: Rect, message: &str, frame: &mut Frame) {
    let lines = vec![
        Line::from(Span::styled(
            "Something went wrong",
            Style::default().fg(RED_ERROR).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(message.to_string(), Style::default().fg(TEXT_PRIMARY))),
        Line::default(),
        Line::from(Span::styled(
            "r: Try again | m: Pick another mood",
            Style::default().fg(TEXT_MUTED),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        centered_rect(60, 5, area),
    );
}

fn render_empty(area: Rect, frame: &mut Frame) {
    let line = Line::from(Span::styled(
        "Nothing here yet. Press m to pick a mood.",
        Style::default().fg(TEXT_MUTED),
    ));
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        centered_rect(50, 1, area),
    );
}

fn card(title: &str, accent: Color) -> Block<'static> {
    Block::default()
        .title(Span::styled(format!(" {} ", title), Style::default().fg(accent)))
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_CARD))
}

fn render_bundle(
    area: Rect,
    mood: MoodKey,
    content: &ContentBundle,
    is_favorite: bool,
    frame: &mut Frame,
) {
    let color = mood_color(mood);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                                  // Mood badge
            Constraint::Length(6),                                  // Quote + affirmation
            Constraint::Length(content.songs.len() as u16 * 2 + 2), // Songs
            Constraint::Fill(1),
        ])
        .split(area);

    let badge = Line::from(vec![
        Span::styled(format!("{} ", mood.glyph()), Style::default().fg(color)),
        Span::styled(
            format!("{} Mood", mood.label()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(badge).alignment(Alignment::Center), layout[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[1]);

    let star = if is_favorite { "★ Saved" } else { "☆ Save (f)" };
    let quote_block = card("Quote", color).title(
        Line::from(Span::styled(format!(" {} ", star), Style::default().fg(FAVORITE)))
            .alignment(Alignment::Right),
    );
    let quote = Paragraph::new(Span::styled(
        format!("\u{201c}{}\u{201d}", content.quote),
        Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::ITALIC),
    ))
    .block(quote_block)
    .wrap(Wrap { trim: true });
    frame.render_widget(quote, cards[0]);

    let affirmation = Paragraph::new(Span::styled(
        content.affirmation.clone(),
        Style::default().fg(TEXT_PRIMARY),
    ))
    .block(card("Affirmation", color))
    .wrap(Wrap { trim: true });
    frame.render_widget(affirmation, cards[1]);

    let inner_width = layout[2].width.saturating_sub(4) as usize;
    let mut song_lines = Vec::with_capacity(content.songs.len() * 2);
    for song in &content.songs {
        song_lines.push(Line::from(Span::styled(
            truncate(&song.title, inner_width),
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        )));
        song_lines.push(Line::from(Span::styled(
            truncate(&song.artist, inner_width),
            Style::default().fg(TEXT_SECONDARY),
        )));
    }
    frame.render_widget(
        Paragraph::new(song_lines).block(card("Recommended Songs", color)),
        layout[2],
    );
}
