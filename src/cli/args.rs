//! CLI argument parsing and configuration.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crate::models::MoodKey;
use crate::provider::DEFAULT_LATENCY;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration from CLI arguments
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub latency: Duration,
    pub ephemeral: bool,
    pub offline: bool,
    /// Mood preselected when the app opens
    pub mood: Option<MoodKey>,
}

impl CliConfig {
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("storage.sqlite3")
    }

    /// Directory holding the daily log files
    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.clone()
    }
}

/// What the command line asked for
#[derive(Debug, PartialEq)]
pub enum ParsedArgs {
    Run(CliConfig),
    Help,
    Version,
}

/// Default data directory: platform data dir joined with `moodmuse`
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("moodmuse")
}

/// Print usage information
pub fn print_usage() {
    eprintln!("MoodMuse - Quotes, affirmations and songs for how you feel");
    eprintln!();
    eprintln!("Usage: moodmuse [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --data-dir <PATH>   Directory for favorites and logs");
    eprintln!("                      (default: {})", default_data_dir().display());
    eprintln!(
        "  --latency <MS>      Simulated generation latency (default: {})",
        DEFAULT_LATENCY.as_millis()
    );
    eprintln!("  --ephemeral         Keep favorites in memory only");
    eprintln!("  --offline           Simulate an unreachable content service");
    eprintln!("  --mood <NAME>       Start with a mood selected (happy, sad, chill,");
    eprintln!("                      angry, excited, lonely)");
    eprintln!("  -h, --help          Show this help message");
    eprintln!("  -V, --version       Show version");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  moodmuse                      # Favorites saved to the default data dir");
    eprintln!("  moodmuse --latency 0          # Instant results");
    eprintln!("  moodmuse --ephemeral          # Nothing written to disk");
    eprintln!("  moodmuse --mood chill         # Skip straight to a mood");
}

/// Parse process arguments, handling help and version
pub fn parse_args() -> io::Result<CliConfig> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match parse_args_from(&args) {
        Ok(ParsedArgs::Run(config)) => Ok(config),
        Ok(ParsedArgs::Help) => {
            print_usage();
            std::process::exit(0);
        }
        Ok(ParsedArgs::Version) => {
            println!("moodmuse {}", VERSION);
            std::process::exit(0);
        }
        Err(e) => {
            print_usage();
            Err(e)
        }
    }
}

/// Parse an argument list (without the program name)
pub fn parse_args_from(args: &[String]) -> io::Result<ParsedArgs> {
    let mut data_dir: Option<PathBuf> = None;
    let mut latency = DEFAULT_LATENCY;
    let mut ephemeral = false;
    let mut offline = false;
    let mut mood = None;

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if arg == "-h" || arg == "--help" {
            return Ok(ParsedArgs::Help);
        } else if arg == "-V" || arg == "--version" {
            return Ok(ParsedArgs::Version);
        } else if arg == "--ephemeral" {
            ephemeral = true;
            i += 1;
        } else if arg == "--offline" {
            offline = true;
            i += 1;
        } else if arg == "--data-dir" {
            i += 1;
            let value = args.get(i).ok_or_else(|| missing_value("--data-dir"))?;
            data_dir = Some(PathBuf::from(value));
            i += 1;
        } else if arg == "--latency" {
            i += 1;
            let value = args.get(i).ok_or_else(|| missing_value("--latency"))?;
            let millis: u64 = value.parse().map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Invalid latency value: {}", value),
                )
            })?;
            latency = Duration::from_millis(millis);
            i += 1;
        } else if arg == "--mood" {
            i += 1;
            let value = args.get(i).ok_or_else(|| missing_value("--mood"))?;
            let parsed: MoodKey = value
                .parse()
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("{}", e)))?;
            mood = Some(parsed);
            i += 1;
        } else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unknown argument: {}", arg),
            ));
        }
    }

    Ok(ParsedArgs::Run(CliConfig {
        data_dir: data_dir.unwrap_or_else(default_data_dir),
        latency,
        ephemeral,
        offline,
        mood,
    }))
}

fn missing_value(flag: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("Missing value for {}", flag),
    )
}
