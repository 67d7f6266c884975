//! Application state and input handling for the MoodMuse TUI.
//!
//! `App` holds the view-side state (current screen, cursors, animation tick)
//! next to a handle on the `MoodStore`. All session state changes go through
//! the store; `App` only decides which store operation a key maps to.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use crate::models::{MoodKey, Screen};
use crate::store::MoodStore;

/// Moods per row in the selector grid
pub const GRID_COLUMNS: usize = 3;

const ANIMATION_INTERVAL: Duration = Duration::from_millis(120);

/// Application state
pub struct App {
    pub store: MoodStore,
    pub screen: Screen,
    // Screen to return to when leaving favorites
    pub previous_screen: Screen,
    // Highlighted card in the mood grid (index into MoodKey::ALL)
    pub mood_cursor: usize,
    // Highlighted row in the favorites list
    pub favorites_cursor: usize,
    pub should_quit: bool,
    // Animation state
    pub animation_tick: u64,
    pub last_animation_update: Instant,
    // When the most recent generation was started (for the elapsed timer)
    pub generation_started: Option<Instant>,
}

impl App {
    pub fn new(store: MoodStore) -> Self {
        // Start the cursor on the already-selected mood, if any
        let mood_cursor = store
            .selected_mood()
            .and_then(|m| MoodKey::ALL.iter().position(|k| *k == m))
            .unwrap_or(0);

        Self {
            store,
            screen: Screen::MoodSelector,
            previous_screen: Screen::MoodSelector,
            mood_cursor,
            favorites_cursor: 0,
            should_quit: false,
            animation_tick: 0,
            last_animation_update: Instant::now(),
            generation_started: None,
        }
    }

    /// Mood under the selector cursor
    pub fn highlighted_mood(&self) -> MoodKey {
        MoodKey::ALL[self.mood_cursor.min(MoodKey::ALL.len() - 1)]
    }

    /// Advance the animation tick when enough time has passed
    pub fn tick(&mut self) {
        if self.last_animation_update.elapsed() >= ANIMATION_INTERVAL {
            self.animation_tick = self.animation_tick.wrapping_add(1);
            self.last_animation_update = Instant::now();
        }
    }

    /// Route a key press to the handler for the current screen
    pub fn handle_key(&mut self, code: KeyCode) {
        if code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::MoodSelector => self.handle_selector_key(code),
            Screen::Results => self.handle_results_key(code),
            Screen::Favorites => self.handle_favorites_key(code),
        }
    }

    fn handle_selector_key(&mut self, code: KeyCode) {
        let count = MoodKey::ALL.len();
        match code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.mood_cursor = self.mood_cursor.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.mood_cursor = (self.mood_cursor + 1).min(count - 1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.mood_cursor = self.mood_cursor.saturating_sub(GRID_COLUMNS);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.mood_cursor + GRID_COLUMNS < count {
                    self.mood_cursor += GRID_COLUMNS;
                }
            }
            KeyCode::Char(' ') => {
                self.store.select_mood(self.highlighted_mood());
            }
            KeyCode::Enter => {
                self.store.select_mood(self.highlighted_mood());
                self.start_generation();
                self.screen = Screen::Results;
            }
            KeyCode::Char('v') => self.open_favorites(),
            _ => {}
        }
    }

    fn handle_results_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('f') => {
                if self.store.is_loading() || self.store.error().is_some() {
                    return;
                }
                if let Some(content) = self.store.current_content() {
                    let saved = self.store.toggle_favorite(&content);
                    tracing::debug!(saved, "favorite toggled");
                }
            }
            KeyCode::Char('r') => {
                if !self.store.is_loading() {
                    self.start_generation();
                }
            }
            KeyCode::Char('m') | KeyCode::Esc => {
                self.screen = Screen::MoodSelector;
            }
            KeyCode::Char('v') => self.open_favorites(),
            _ => {}
        }
    }

    fn handle_favorites_key(&mut self, code: KeyCode) {
        let count = self.store.favorites().len();
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.favorites_cursor = self.favorites_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.favorites_cursor + 1 < count {
                    self.favorites_cursor += 1;
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                let favorites = self.store.favorites();
                if let Some(bundle) = favorites.get(self.favorites_cursor) {
                    self.store.remove_from_favorites(bundle);
                }
                let remaining = self.store.favorites().len();
                self.favorites_cursor = self.favorites_cursor.min(remaining.saturating_sub(1));
            }
            KeyCode::Esc | KeyCode::Char('b') => {
                self.screen = self.previous_screen;
            }
            _ => {}
        }
    }

    fn open_favorites(&mut self) {
        self.previous_screen = self.screen;
        self.favorites_cursor = 0;
        self.screen = Screen::Favorites;
    }

    /// Run generation in the background so the UI keeps drawing
    fn start_generation(&mut self) {
        self.generation_started = Some(Instant::now());
        let store = self.store.clone();
        tokio::spawn(async move {
            store.generate_content().await;
        });
    }
}
