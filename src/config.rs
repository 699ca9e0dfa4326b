//! Runtime configuration sourced from environment variables.

use std::{env, path::PathBuf, str::FromStr, time::Duration};

use tracing::warn;

/// Default exponent applied to past selection counts.
pub const DEFAULT_ALPHA: f64 = 1.5;
const DEFAULT_DB_NAME: &str = "game_chooser_db";
const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 27017;
const DEFAULT_DB_TIMEOUT_SECS: u64 = 5;
const DEFAULT_CATALOG_PATH: &str = "games.csv";
/// Steam store search endpoint used for thumbnails.
pub const DEFAULT_SEARCH_URL: &str = "https://store.steampowered.com/api/storesearch/";
const DEFAULT_COUNTRY_CODE: &str = "us";
const DEFAULT_THUMBNAIL_TIMEOUT_SECS: u64 = 5;
const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
/// Immutable configuration for a single picker run.
pub struct AppConfig {
    /// Game store connection.
    pub database: DatabaseConfig,
    /// CSV catalog imported at the start of each run.
    pub catalog_path: PathBuf,
    /// Suppression exponent for the selection policy.
    pub alpha: f64,
    /// Thumbnail lookup and webhook settings.
    pub announcer: AnnouncerConfig,
}

#[derive(Debug, Clone)]
/// Connection parameters for the game store.
pub struct DatabaseConfig {
    /// Database holding the `games` collection.
    pub name: String,
    /// Authentication user. Authentication is only attempted when both user and
    /// password are set.
    pub user: String,
    /// Authentication password.
    pub password: String,
    /// Server host name.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Bound on connecting and on selecting a server for each operation.
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
/// Settings for the thumbnail lookup and webhook announcement.
pub struct AnnouncerConfig {
    /// Target webhook; announcements are skipped when unset.
    pub webhook_url: Option<String>,
    /// Store search endpoint queried for thumbnails.
    pub search_url: String,
    /// Country code sent with each search.
    pub country_code: String,
    /// Bound on the thumbnail lookup.
    pub thumbnail_timeout: Duration,
    /// Bound on the webhook post.
    pub webhook_timeout: Duration,
}

impl DatabaseConfig {
    /// User and password to authenticate with, when both are set.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        (!self.user.is_empty() && !self.password.is_empty())
            .then_some((self.user.as_str(), self.password.as_str()))
    }
}

impl AppConfig {
    /// Load the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load the configuration through `lookup`, falling back to defaults for unset
    /// variables and logging a warning for values that fail to parse.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());
        let secs = |key: &str, default: u64| Duration::from_secs(parse_or(&lookup, key, default));

        let alpha = parse_or(&lookup, "ALPHA", DEFAULT_ALPHA);
        let alpha = if alpha.is_finite() && alpha >= 0.0 {
            alpha
        } else {
            warn!(
                alpha,
                default = DEFAULT_ALPHA,
                "ALPHA must be finite and non-negative; using default"
            );
            DEFAULT_ALPHA
        };

        Self {
            database: DatabaseConfig {
                name: text("MONGO_DB", DEFAULT_DB_NAME),
                user: text("MONGO_USER", ""),
                password: text("MONGO_PASSWORD", ""),
                host: text("MONGO_HOST", DEFAULT_DB_HOST),
                port: parse_or(&lookup, "MONGO_PORT", DEFAULT_DB_PORT),
                timeout: secs("DB_TIMEOUT_SECS", DEFAULT_DB_TIMEOUT_SECS),
            },
            catalog_path: PathBuf::from(text("GAMES_CSV", DEFAULT_CATALOG_PATH)),
            alpha,
            announcer: AnnouncerConfig {
                webhook_url: lookup("DISCORD_WEBHOOK").filter(|url| !url.trim().is_empty()),
                search_url: text("THUMBNAIL_SEARCH_URL", DEFAULT_SEARCH_URL),
                country_code: text("THUMBNAIL_COUNTRY", DEFAULT_COUNTRY_CODE),
                thumbnail_timeout: secs("THUMBNAIL_TIMEOUT_SECS", DEFAULT_THUMBNAIL_TIMEOUT_SECS),
                webhook_timeout: secs("WEBHOOK_TIMEOUT_SECS", DEFAULT_WEBHOOK_TIMEOUT_SECS),
            },
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Parse `key` when set, keeping `default` for unset or malformed values.
fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Debug,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!(key, value = %raw, ?default, "failed to parse setting; using default");
                default
            }
        },
        None => default,
    }
}
