//! Well-known folio locations under the user's home directory

use std::path::PathBuf;

use crate::constants::ui::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONTENT_FILE_NAME, LOGS_DIR_NAME};

/// Root config directory (~/.folio), falling back to the working directory
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Log directory (~/.folio/logs)
pub fn logs_dir() -> PathBuf {
    config_dir().join(LOGS_DIR_NAME)
}

/// Default config file (~/.folio/config.toml)
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

/// Default portfolio content file (~/.folio/portfolio.toml)
pub fn content_file() -> PathBuf {
    config_dir().join(CONTENT_FILE_NAME)
}
