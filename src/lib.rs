//! Library crate for game-picker, exposing modules for binaries and integration tests.

pub mod config;
pub mod dao;
mod dto;
pub mod error;
pub mod services;

use std::path::Path;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Optional file of `KEY=value` lines loaded before the configuration is read.
pub const DOTENV_PATH: &str = ".env";

/// Export the variables of the env file at `path` without overriding ones already set.
///
/// A missing file is not an error. Runs before tracing is up, so any other failure is
/// handed back for the caller to log.
pub fn load_env_file(path: &Path) -> Option<dotenvy::Error> {
    match dotenvy::from_path(path) {
        Ok(()) => None,
        Err(err) if err.not_found() => None,
        Err(err) => Some(err),
    }
}

/// Configure tracing subscribers, honouring `RUST_LOG` and defaulting to `info`.
pub fn init_tracing() {
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use std::{env, fs};

    use super::*;

    #[test]
    fn missing_env_file_is_ignored() {
        assert!(load_env_file(Path::new("definitely/not/here/.env")).is_none());
    }

    #[test]
    fn env_file_exports_unset_variables() {
        let path = env::temp_dir().join(format!("game-picker-{}.env", std::process::id()));
        fs::write(&path, "GAME_PICKER_DOTENV_MARKER=loaded\n").unwrap();

        assert!(load_env_file(&path).is_none());
        assert_eq!(env::var("GAME_PICKER_DOTENV_MARKER").as_deref(), Ok("loaded"));

        fs::remove_file(&path).unwrap();
    }
}
