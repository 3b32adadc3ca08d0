//! Configuration management for the Spotify action server.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Secrets (the refresh token and the client credential)
//! are never compiled in; they have to be supplied through the environment.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf, time::Duration};

use crate::utils;

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:5055";
pub const DEFAULT_MARKET: &str = "RU";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from `spotact/.env` inside the platform-specific
/// local data directory:
/// - Linux: `~/.local/share/spotact/.env`
/// - macOS: `~/Library/Application Support/spotact/.env`
/// - Windows: `%LOCALAPPDATA%/spotact/.env`
///
/// A missing `.env` file is not an error, since deployments commonly inject
/// the variables directly. A file that exists but cannot be parsed is.
///
/// # Errors
///
/// Returns an error string if the parent directory cannot be created or the
/// `.env` file is malformed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
    }
    Ok(())
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotact/.env");
    path
}

/// Returns the address the action server binds to (`SERVER_ADDRESS`).
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the Spotify Web API base URL (`SPOTIFY_API_URL`).
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns the token exchange URL (`SPOTIFY_API_TOKEN_URL`).
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}

/// Returns the long-lived refresh token (`SPOTIFY_REFRESH_TOKEN`).
///
/// # Errors
///
/// Fails if the variable is not set or empty.
pub fn spotify_refresh_token() -> Result<String, String> {
    required("SPOTIFY_REFRESH_TOKEN")
}

/// Returns the base64 encoded `client_id:client_secret` pair used for the
/// `Authorization: Basic` header of the refresh call.
///
/// `SPOTIFY_CLIENT_CREDENTIAL` is used verbatim when present. Otherwise the
/// credential is encoded from `SPOTIFY_API_AUTH_CLIENT_ID` and
/// `SPOTIFY_API_AUTH_CLIENT_SECRET`.
///
/// # Errors
///
/// Fails if neither form is configured.
pub fn spotify_client_credential() -> Result<String, String> {
    if let Ok(credential) = required("SPOTIFY_CLIENT_CREDENTIAL") {
        return Ok(credential);
    }

    let client_id = required("SPOTIFY_API_AUTH_CLIENT_ID").map_err(|_| {
        "SPOTIFY_CLIENT_CREDENTIAL or SPOTIFY_API_AUTH_CLIENT_ID/SPOTIFY_API_AUTH_CLIENT_SECRET must be set"
            .to_string()
    })?;
    let client_secret = required("SPOTIFY_API_AUTH_CLIENT_SECRET")?;
    Ok(utils::encode_client_credential(&client_id, &client_secret))
}

/// Returns the market used for browse endpoints (`SPOTIFY_MARKET`).
pub fn spotify_market() -> String {
    env::var("SPOTIFY_MARKET").unwrap_or_else(|_| DEFAULT_MARKET.to_string())
}

/// Returns the timeout applied to every outbound HTTP call
/// (`SPOTIFY_HTTP_TIMEOUT_SECS`).
///
/// # Errors
///
/// Fails if the variable is set but is not a positive integer.
pub fn http_timeout() -> Result<Duration, String> {
    match env::var("SPOTIFY_HTTP_TIMEOUT_SECS") {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
            _ => Err(format!(
                "SPOTIFY_HTTP_TIMEOUT_SECS must be a positive number of seconds, got '{}'",
                raw
            )),
        },
        Err(_) => Ok(Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS)),
    }
}

fn required(name: &str) -> Result<String, String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(format!("{} must be set", name)),
    }
}

/// Resolved runtime configuration.
///
/// Built once at startup from the environment and handed to the components
/// that need it, so tests can point everything at a fake API instead.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub token_url: String,
    pub refresh_token: String,
    pub client_credential: String,
    pub market: String,
    pub server_addr: String,
    pub http_timeout: Duration,
}

impl Settings {
    /// Collects every setting from the environment.
    ///
    /// # Errors
    ///
    /// Fails when a required secret is missing or a value cannot be parsed.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            api_url: spotify_apiurl(),
            token_url: spotify_apitoken_url(),
            refresh_token: spotify_refresh_token()?,
            client_credential: spotify_client_credential()?,
            market: spotify_market(),
            server_addr: server_addr(),
            http_timeout: http_timeout()?,
        })
    }
}
