//! Configuration management for abiguess.
//!
//! This crate loads, saves, and updates the small set of tunables the
//! backtracking decoder in `abiguess-core` is willing to take from the
//! outside world: everything else about the engine stays a pure function
//! of its byte input.

/// Error types for the configuration module
pub mod error;

use crate::error::Error;
#[allow(deprecated)]
use std::env::home_dir;
use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// The [`Configuration`] struct represents the persisted settings for the abiguess CLI. The
/// core inference engine never reads this directly - it is threaded in by the CLI as plain
/// function arguments, keeping `abiguess-core` configuration-free.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Refuse to search calldata longer than this many 32-byte words.
    pub max_calldata_words: usize,

    /// The upper bound a decoded word must stay under to be treated as a plausible offset or
    /// length. Defaults to `u64::MAX` (i.e. "no tighter than the buffer-length bound already
    /// enforces"); lower it to `2^53 - 1` to replay the original JavaScript implementation's
    /// `Number.isSafeInteger` semantics exactly.
    pub safe_integer_bound: u64,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration { max_calldata_words: 4096, safe_integer_bound: u64::MAX }
    }
}

#[allow(deprecated)]
fn config_path() -> Result<PathBuf, Error> {
    let mut home = home_dir().ok_or_else(|| {
        Error::Generic(
            "failed to get home directory. does your os support `std::env::home_dir()`?"
                .to_string(),
        )
    })?;
    home.push(".abiguess");
    home.push("config.toml");
    Ok(home)
}

impl Configuration {
    /// Returns the current configuration, creating a default one on disk if none exists.
    pub fn load() -> Result<Self, Error> {
        let path = config_path()?;

        if !path.exists() {
            let config = Configuration::default();
            config.save()?;
            return Ok(config);
        }

        let contents = fs::read_to_string(&path)
            .map_err(|e| Error::Generic(format!("failed to read config file: {e}")))?;

        let config: Configuration = toml::from_str(&contents)
            .map_err(|e| Error::ParseError(format!("failed to parse config file: {e}")))?;

        Ok(config)
    }

    /// Saves the current configuration to disk.
    pub fn save(&self) -> Result<(), Error> {
        let path = config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Generic(format!("failed to create config dir: {e}")))?;
        }

        fs::write(
            &path,
            toml::to_string(&self)
                .map_err(|e| Error::ParseError(format!("failed to serialize config: {e}")))?,
        )
        .map_err(|e| Error::Generic(format!("failed to write config file: {e}")))?;

        Ok(())
    }

    /// Deletes the configuration file at `$HOME/.abiguess/config.toml`.
    pub fn delete() -> Result<(), Error> {
        let path = config_path()?;
        if path.exists() {
            fs::remove_file(&path)
                .map_err(|e| Error::Generic(format!("failed to delete config file: {e}")))?;
        }
        Ok(())
    }

    /// Update a single key/value pair in the configuration.
    pub fn update(&mut self, key: &str, value: &str) -> Result<(), Error> {
        match key {
            "max_calldata_words" => {
                self.max_calldata_words = value
                    .parse()
                    .map_err(|_| Error::Generic(format!("'{value}' is not a valid usize")))?;
            }
            "safe_integer_bound" => {
                self.safe_integer_bound = value
                    .parse()
                    .map_err(|_| Error::Generic(format!("'{value}' is not a valid u64")))?;
            }
            _ => {
                return Err(Error::Generic(format!(
                    "invalid key: '{key}' is not a valid configuration key."
                )))
            }
        }

        debug!("updating configuration key '{}' to '{}'", key, value);
        self.save()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // the config file lives at a fixed path ($HOME/.abiguess/config.toml), so tests that
    // touch it must not run concurrently with one another.
    static CONFIG_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_configuration() {
        let config = Configuration::default();
        assert_eq!(config.max_calldata_words, 4096);
        assert_eq!(config.safe_integer_bound, u64::MAX);
    }

    #[test]
    fn test_save_and_load_configuration() {
        let _guard = CONFIG_LOCK.lock().expect("lock poisoned");
        Configuration::delete().expect("failed to delete config file");

        let mut config = Configuration::default();
        config.max_calldata_words = 128;
        config.save().expect("failed to save config");

        let loaded = Configuration::load().expect("failed to load config");
        assert_eq!(loaded.max_calldata_words, 128);

        Configuration::delete().expect("failed to delete config file");
    }

    #[test]
    fn test_update_rejects_unknown_key() {
        let _guard = CONFIG_LOCK.lock().expect("lock poisoned");
        let mut config = Configuration::default();
        assert!(config.update("not_a_real_key", "1").is_err());
    }

    #[test]
    fn test_update_rejects_bad_value() {
        let _guard = CONFIG_LOCK.lock().expect("lock poisoned");
        let mut config = Configuration::default();
        assert!(config.update("max_calldata_words", "not-a-number").is_err());
    }
}
