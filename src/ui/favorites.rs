//! Favorites screen

use ratatui::{
    prelude::*,
    symbols::border,
    widgets::{Block, Borders, Paragraph},
};

use crate::models::ContentBundle;
use crate::theme::{ACCENT, BG_CARD, BORDER_SUBTLE, FAVORITE, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};

use super::helpers::{truncate, wrap_text};

/// Render saved bundles as a list of cards, highlighting `cursor`
pub fn render_favorites(area: Rect, favorites: &[ContentBundle], cursor: usize, frame: &mut Frame) {
    if favorites.is_empty() {
        let line = Line::from(Span::styled(
            "No favorites yet. Press f on a result to save it.",
            Style::default().fg(TEXT_MUTED),
        ));
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
        return;
    }

    let cursor = cursor.min(favorites.len() - 1);
    let inner_width = area.width.saturating_sub(6) as usize;
    let mut y = area.y;
    let bottom = area.y + area.height;

    // Keep the cursor card on screen by skipping cards above it when needed
    let card_height = |b: &ContentBundle| wrap_text(&b.quote, inner_width).len() as u16 + 3;
    let mut first = 0;
    while first < cursor {
        let needed: u16 = favorites[first..=cursor].iter().map(card_height).sum();
        if needed <= area.height {
            break;
        }
        first += 1;
    }

    for (index, bundle) in favorites.iter().enumerate().skip(first) {
        let height = card_height(bundle);
        if y + height > bottom {
            break;
        }

        let focused = index == cursor;
        let block = Block::default()
            .title(Span::styled(" ★ ", Style::default().fg(FAVORITE)))
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(if focused { ACCENT } else { BORDER_SUBTLE }))
            .style(Style::default().bg(BG_CARD));

        let mut lines: Vec<Line> = wrap_text(&bundle.quote, inner_width)
            .into_iter()
            .map(|l| {
                Line::from(Span::styled(
                    l,
                    Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::ITALIC),
                ))
            })
            .collect();
        lines.push(Line::from(Span::styled(
            truncate(&bundle.affirmation, inner_width),
            Style::default().fg(TEXT_SECONDARY),
        )));

        let card_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        frame.render_widget(Paragraph::new(lines).block(block), card_area);
        y += height;
    }
}
