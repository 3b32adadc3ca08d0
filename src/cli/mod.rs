//! # CLI Module
//!
//! Command implementations behind the `spotact` binary.
//!
//! - [`serve`] - runs the action server the dialogue manager talks to
//! - [`invoke`] - runs one action locally against a typed utterance, handy for
//!   checking credentials and entity offsets without a dialogue manager
//! - [`devices`] - lists the playback devices Spotify currently knows about
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotact serve
//! spotact invoke action_play_music --text "play song imagine" --entity song:5:9
//! spotact devices
//! ```
//!
//! Commands report through the crate's output macros and terminate with
//! `error!` when configuration or credentials are unusable.

mod devices;
mod invoke;
mod serve;

pub use devices::devices;
pub use invoke::invoke;
pub use serve::serve;

use crate::{config::Settings, error};

fn load_settings() -> Settings {
    match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => error!("Invalid configuration: {}", e),
    }
}
