//! Configuration management for jamcli.
//!
//! Configuration values come from environment variables, optionally seeded
//! from a `.env` file in the local data directory. Precedence:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (everything except the client id)

use std::{env, path::PathBuf, time::Duration};

use log::debug;

use crate::errors::{Error, Result};

pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";
pub const DEFAULT_SCOPE: &str = "playlist-modify-public playlist-modify-private";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";
pub const DEFAULT_AUTH_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_SEARCH_LIMIT: u32 = 20;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file is looked up at:
/// - Linux: `~/.local/share/jamcli/.env`
/// - macOS: `~/Library/Application Support/jamcli/.env`
/// - Windows: `%LOCALAPPDATA%/jamcli/.env`
///
/// The directory is created when missing. A missing `.env` file is not an
/// error since every value can also come from the process environment; a
/// file that exists but cannot be parsed is.
pub async fn load_env() -> Result<()> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if !path.is_file() {
        debug!("no env file at {}", path.display());
        return Ok(());
    }

    dotenv::from_path(&path)
        .map_err(|e| Error::Configuration(format!("{}: {}", path.display(), e)))?;
    debug!("loaded env file {}", path.display());
    Ok(())
}

pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("jamcli/.env");
    path
}

/// Runtime settings for the OAuth flow and the Web API client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Client id of the registered Spotify application.
    pub client_id: String,
    /// Callback URL registered with the application.
    pub redirect_uri: String,
    /// Space separated OAuth scopes.
    pub scope: String,
    pub auth_url: String,
    pub token_url: String,
    /// Web API base URL without trailing slash.
    pub api_url: String,
    /// Bind address of the local callback server.
    pub server_addr: String,
    pub auth_timeout: Duration,
    pub search_limit: u32,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Fails when `SPOTIFY_API_AUTH_CLIENT_ID` is unset or empty, or when a
    /// numeric setting cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let client_id = var("SPOTIFY_API_AUTH_CLIENT_ID").ok_or_else(|| {
            Error::Configuration(format!(
                "SPOTIFY_API_AUTH_CLIENT_ID must be set (see {})",
                env_path().display()
            ))
        })?;

        Ok(Self {
            client_id,
            redirect_uri: var_or("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI),
            scope: var_or("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE),
            auth_url: var_or("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL),
            token_url: var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL),
            api_url: var_or("SPOTIFY_API_URL", DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            server_addr: var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            auth_timeout: Duration::from_secs(parse_var(
                "AUTH_TIMEOUT_SECS",
                DEFAULT_AUTH_TIMEOUT_SECS,
            )?),
            search_limit: parse_var("SEARCH_LIMIT", DEFAULT_SEARCH_LIMIT)?,
        })
    }

    /// Configuration pointing every endpoint at `base_url`, used against
    /// local stub servers.
    pub fn with_base_url(client_id: &str, base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            client_id: client_id.to_string(),
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            scope: DEFAULT_SCOPE.to_string(),
            auth_url: format!("{base}/authorize"),
            token_url: format!("{base}/api/token"),
            api_url: format!("{base}/v1"),
            server_addr: DEFAULT_SERVER_ADDRESS.to_string(),
            auth_timeout: Duration::from_secs(DEFAULT_AUTH_TIMEOUT_SECS),
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn var_or(key: &str, default: &str) -> String {
    var(key).unwrap_or_else(|| default.to_string())
}

fn parse_var<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    match var(key) {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|e| Error::Configuration(format!("{key}={raw}: {e}"))),
        None => Ok(default),
    }
}
