use crate::error::{AssistantError, Result};
use crate::store::fs::DEFAULT_BOOK_FILE;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_UPCOMING_DAYS: i64 = 7;
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Environment variable overriding the assistant's home directory.
pub const HOME_ENV: &str = "ASSISTANT_HOME";

/// Configuration for the assistant, stored in `<home>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AssistantConfig {
    /// File name of the address book inside the home directory
    #[serde(default = "default_book_file")]
    pub book_file: String,

    /// Contacts per page for `show all`
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Window used by `birthdays` when no day count is given
    #[serde(default = "default_upcoming_days")]
    pub upcoming_days: i64,

    /// Log level for the log file (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_book_file() -> String {
    DEFAULT_BOOK_FILE.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_upcoming_days() -> i64 {
    DEFAULT_UPCOMING_DAYS
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            book_file: default_book_file(),
            page_size: DEFAULT_PAGE_SIZE,
            upcoming_days: DEFAULT_UPCOMING_DAYS,
            log_level: default_log_level(),
        }
    }
}

impl AssistantConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AssistantError::Io)?;
        let config: AssistantConfig =
            serde_json::from_str(&content).map_err(AssistantError::Serialization)?;
        Ok(config)
    }
}

/// Resolves the home directory: an explicit path wins, then the platform data
/// directory. (`ASSISTANT_HOME` is read by the CLI layer into `explicit`.)
pub fn resolve_home(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    ProjectDirs::from("com", "assistant", "assistant")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AssistantError::Store("Could not determine a data directory".into()))
}
