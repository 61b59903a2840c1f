//! Startup configuration.
//!
//! The bot needs a single secret, the Telegram token, read from the process
//! environment. Secrets may also be kept in an env file which is loaded
//! before the environment is read.
//!
//! # Lookup order
//!
//! 1. variables already set in the process environment (never overridden)
//! 2. `$ESIM_BOT_CONFIG_DIR/.env.local`, defaulting to
//!    `~/.esim-bot/config/.env.local`
//! 3. `.env.local`, or failing that `.env`, in the working directory
//!
//! # Environment Variables
//!
//! - `TELEGRAM_BOT_TOKEN`: bot token from @BotFather (required)
//! - `ESIM_BOT_HOME`: override the base directory
//! - `ESIM_BOT_CONFIG_DIR`: override the config directory

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::error::{ConfigError, Result};

/// Environment variable holding the bot token.
pub const TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

/// Environment variable for a custom base directory.
pub const HOME_DIR_ENV: &str = "ESIM_BOT_HOME";

/// Environment variable for a custom config directory.
pub const CONFIG_DIR_ENV: &str = "ESIM_BOT_CONFIG_DIR";

/// Default base directory name under home.
const DEFAULT_HOME_DIR: &str = ".esim-bot";

const CONFIG_SUBDIR: &str = "config";
const ENV_FILE_NAME: &str = ".env.local";

static HOME_DIR_CACHE: OnceLock<PathBuf> = OnceLock::new();

/// Get the base directory.
///
/// `ESIM_BOT_HOME` if set, else `~/.esim-bot`, else `.esim-bot` in the
/// working directory.
pub fn home_dir() -> PathBuf {
    HOME_DIR_CACHE
        .get_or_init(|| {
            std::env::var(HOME_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    dirs::home_dir()
                        .map(|h| h.join(DEFAULT_HOME_DIR))
                        .unwrap_or_else(|| PathBuf::from(DEFAULT_HOME_DIR))
                })
        })
        .clone()
}

/// Get the config directory.
pub fn config_dir() -> PathBuf {
    std::env::var(CONFIG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(CONFIG_SUBDIR))
}

/// Get the env file holding secrets.
pub fn env_file() -> PathBuf {
    config_dir().join(ENV_FILE_NAME)
}

/// Load a single env file. Returns `Ok(false)` when the file does not exist.
pub fn load_env_file(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    dotenvy::from_path(path).map_err(|source| ConfigError::EnvFile {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "Loaded env file");
    Ok(true)
}

/// Load every env file in lookup order, returning the ones that were read.
///
/// Unreadable files are logged and skipped; a broken optional file must
/// not prevent startup when the token is already in the environment.
pub fn load_env() -> Vec<PathBuf> {
    let mut loaded = Vec::new();

    let primary = env_file();
    match load_env_file(&primary) {
        Ok(true) => loaded.push(primary),
        Ok(false) => {}
        Err(e) => warn!(error = %e, "Skipping env file"),
    }

    for local in [".env.local", ".env"] {
        let path = PathBuf::from(local);
        match load_env_file(&path) {
            Ok(true) => {
                loaded.push(path);
                break;
            }
            Ok(false) => {}
            Err(e) => warn!(error = %e, "Skipping env file"),
        }
    }

    loaded
}

/// Read the bot token. Blank values count as missing.
pub fn bot_token() -> Option<String> {
    std::env::var(TOKEN_ENV)
        .ok()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_dir_env_override() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var(CONFIG_DIR_ENV, dir.path());

        let resolved = config_dir();
        let secrets = env_file();
        std::env::remove_var(CONFIG_DIR_ENV);

        assert_eq!(resolved, dir.path());
        assert_eq!(secrets, dir.path().join(".env.local"));
    }

    #[test]
    fn test_env_file_name() {
        assert!(env_file().ends_with(".env.local"));
    }

    #[test]
    fn test_load_missing_env_file() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_env_file(&dir.path().join("absent.env")).unwrap();
        assert!(!loaded);
    }

    #[test]
    fn test_load_env_file_sets_variables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env.local");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "ESIM_BOT_TEST_ONLY_VAR=from-file").unwrap();

        assert!(load_env_file(&path).unwrap());
        assert_eq!(
            std::env::var("ESIM_BOT_TEST_ONLY_VAR").as_deref(),
            Ok("from-file")
        );
    }

    #[test]
    fn test_load_env_file_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.env");
        std::fs::write(&path, "NOT VALID LINE WITHOUT EQUALS\n").unwrap();

        let err = load_env_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::EnvFile { .. }));
        assert!(err.to_string().contains("broken.env"));
    }
}
