mod app;
mod catalog;
mod cli;
mod error;
mod logging;
mod models;
mod persistence;
mod provider;
mod store;
mod theme;
mod ui;
mod utils;

use std::io::{self, stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;

use crate::app::App;
use crate::cli::CliConfig;
use crate::persistence::{FavoritesStore, LocalStorage, MemoryStorage, SqliteStorage};
use crate::provider::{ContentProvider, SimulatedProvider};
use crate::store::MoodStore;

#[tokio::main]
async fn main() -> io::Result<()> {
    let config = cli::parse_args()?;
    // Held until exit so buffered log lines are flushed
    let _log_guard = match logging::init(&config.log_dir()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        }
    };
    tracing::info!(data_dir = %config.data_dir.display(), "starting moodmuse");

    let store = build_store(&config);
    if let Some(mood) = config.mood {
        store.select_mood(mood);
    }
    let mut app = App::new(store);

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    tracing::info!("exiting moodmuse");
    result
}

/// Wire the provider and favorites storage into a store
fn build_store(config: &CliConfig) -> MoodStore {
    let storage: Box<dyn LocalStorage> = if config.ephemeral {
        Box::new(MemoryStorage::new())
    } else {
        match SqliteStorage::open(&config.database_path()) {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                tracing::warn!(error = %e, "cannot open favorites database, using memory");
                Box::new(MemoryStorage::new())
            }
        }
    };

    let provider: Arc<dyn ContentProvider> = if config.offline {
        Arc::new(SimulatedProvider::offline(config.latency))
    } else {
        Arc::new(SimulatedProvider::new(config.latency))
    };

    MoodStore::new(provider, FavoritesStore::new(storage))
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        app.tick();
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle input
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }
    }

    Ok(())
}
