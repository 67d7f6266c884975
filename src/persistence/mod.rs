//! Durable storage for favorites.
//!
//! - `storage`: string key/value backends (SQLite on disk, in-memory)
//! - `favorites`: the favorites adapter that reads and writes one key

mod favorites;
mod storage;

pub use favorites::FavoritesStore;
pub use storage::{LocalStorage, MemoryStorage, SqliteStorage};
