//! Spotify Chat Action Server Library
//!
//! This library connects a dialogue manager to the Spotify Web API. The dialogue
//! manager hands over a parsed utterance (intent, entities, raw text), the matching
//! action pulls a song or playlist name out of it, resolves the name through the
//! search endpoint and starts playback on the first available device.
//!
//! # Modules
//!
//! - `actions` - Intent handlers and the reply collector
//! - `api` - HTTP endpoints of the action server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `extract` - Content name extraction from utterances
//! - `management` - Access token lifecycle
//! - `reply` - Reply keys and status code classification
//! - `server` - Action server bootstrap
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spotact::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> spotact::Res<()> {
//!     config::load_env().await?;
//!     let settings = config::Settings::from_env()?;
//!     server::start_action_server(settings).await?;
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod api;
pub mod cli;
pub mod config;
pub mod extract;
pub mod management;
pub mod reply;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Used for general information and status updates, such as incoming
/// action calls and token refreshes.
///
/// # Example
///
/// ```
/// info!("Running action {}", name);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only used by the binary for unrecoverable startup failures. Library code
/// returns errors instead.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
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
/// Used for recoverable issues: failed upstream calls, fallbacks taken,
/// or status codes that the reply mapping cannot describe precisely.
///
/// # Example
///
/// ```
/// warning!("Playlist search returned no items, trying tracks");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
