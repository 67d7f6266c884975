//! CLI argument parsing for MoodMuse.

mod args;

pub use args::{parse_args, CliConfig};
