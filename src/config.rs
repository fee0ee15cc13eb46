use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::types::{DbError, DbResult};

pub const DEFAULT_PROMPT: &str = "sql> ";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings for the interactive shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub prompt: String,
    pub echo_input: bool,
    pub log_filter: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            echo_input: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ShellConfig {
    /// Load config from a JSON file. A missing file gives the defaults.
    pub fn load_config(path: impl AsRef<Path>) -> DbResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text)
            .map_err(|e| DbError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save_config(&self, path: impl AsRef<Path>) -> DbResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| DbError::Config(e.to_string()))?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
