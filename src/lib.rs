//! Vinyl Scrobbler CLI Library
//!
//! This library provides functionality for scrobbling vinyl records to
//! Last.fm. A release is looked up on Discogs, its tracklist is normalized
//! into per-track durations, and one back-dated listen event per track is
//! submitted to Last.fm so that the final track lands at "now".
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `discogs` - Discogs database API client
//! - `lastfm` - Last.fm API client (request signing, auth, scrobbling)
//! - `management` - Session-key cache and the append-only scrobble log
//! - `types` - Data structures and type definitions
//! - `utils` - Duration parsing, timestamp scheduling and helpers
//!
//! # Example
//!
//! ```
//! use needledrop::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> needledrop::Res<()> {
//!     config::load_env().await?;
//!     // Use CLI functions...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod discogs;
pub mod lastfm;
pub mod management;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Used for general information and status updates throughout the
/// application. Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// info!("Fetching release {}...", release_id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used to provide positive feedback when operations complete
/// successfully. Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// success!("Scrobbled {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Used for unrecoverable errors: missing configuration, failed
/// authentication, a release that cannot be fetched. The program exits
/// with code 1 immediately after printing; code after this macro will
/// not execute.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues that don't require program termination,
/// such as a single failed track submission or a session-log write
/// failure. Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// warning!("Failed to scrobble \"{}\": {}", title, err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
