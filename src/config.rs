//! Configuration management for the vinyl scrobbler.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and a `.env` file. All credentials are read once
//! at startup and never mutated: the Last.fm API key/secret pair, the
//! Last.fm account used for the password-based session flow, and the
//! Discogs personal access token.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//!
//! Presence of the variables a command needs is checked with [`validate`]
//! before any core logic runs; a missing variable is a fatal startup
//! error.

use std::{env, path::PathBuf};

/// Last.fm API key used on every call.
pub const ENV_LASTFM_API_KEY: &str = "LASTFM_API_KEY";
/// Last.fm shared secret used to sign state-changing calls.
pub const ENV_LASTFM_API_SECRET: &str = "LASTFM_API_SECRET";
/// Last.fm account name, only needed for `auth --mobile`.
pub const ENV_LASTFM_USERNAME: &str = "LASTFM_USERNAME";
/// Last.fm account password, only needed for `auth --mobile`.
pub const ENV_LASTFM_PASSWORD: &str = "LASTFM_PASSWORD";
/// Discogs personal access token.
pub const ENV_DISCOGS_TOKEN: &str = "DISCOGS_TOKEN";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from `needledrop/.env` in the platform-specific
/// local data directory. Variables already present in the process
/// environment take precedence; a missing `.env` file is not an error so
/// that a fully environment-configured invocation keeps working.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/needledrop/.env`
/// - macOS: `~/Library/Application Support/needledrop/.env`
/// - Windows: `%LOCALAPPDATA%/needledrop/.env`
///
/// # Errors
///
/// Returns an error string if the parent directory cannot be created or
/// an existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("needledrop/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Checks that every named environment variable is present and non-empty.
///
/// Called by each CLI command for exactly the variables it needs, before
/// any network call or core computation. Returns an error message listing
/// all missing variables so the user can fix them in one pass.
pub fn validate(vars: &[&str]) -> Result<(), String> {
    let missing: Vec<&str> = vars
        .iter()
        .copied()
        .filter(|v| env::var(v).map(|s| s.trim().is_empty()).unwrap_or(true))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(format!(
            "Missing environment variable(s): {}. See the .env.example in the needledrop data directory.",
            missing.join(", ")
        ))
    }
}

/// Returns the Last.fm API key.
///
/// # Panics
///
/// Panics if the `LASTFM_API_KEY` environment variable is not set. Run
/// [`validate`] first for a readable startup error.
pub fn lastfm_api_key() -> String {
    env::var(ENV_LASTFM_API_KEY).expect("LASTFM_API_KEY must be set")
}

/// Returns the Last.fm shared secret.
///
/// The secret is appended to the canonical parameter string before
/// hashing and must never appear in logs or request bodies.
///
/// # Panics
///
/// Panics if the `LASTFM_API_SECRET` environment variable is not set.
pub fn lastfm_api_secret() -> String {
    env::var(ENV_LASTFM_API_SECRET).expect("LASTFM_API_SECRET must be set")
}

/// Returns the Last.fm account name for the password-based session flow.
///
/// # Panics
///
/// Panics if the `LASTFM_USERNAME` environment variable is not set.
pub fn lastfm_username() -> String {
    env::var(ENV_LASTFM_USERNAME).expect("LASTFM_USERNAME must be set")
}

/// Returns the Last.fm account password for the password-based session flow.
///
/// # Panics
///
/// Panics if the `LASTFM_PASSWORD` environment variable is not set.
pub fn lastfm_password() -> String {
    env::var(ENV_LASTFM_PASSWORD).expect("LASTFM_PASSWORD must be set")
}

/// Returns the Discogs personal access token.
///
/// Tokens are created at <https://www.discogs.com/settings/developers>.
///
/// # Panics
///
/// Panics if the `DISCOGS_TOKEN` environment variable is not set.
pub fn discogs_token() -> String {
    env::var(ENV_DISCOGS_TOKEN).expect("DISCOGS_TOKEN must be set")
}
