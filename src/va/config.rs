use crate::error::{Result, VaError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_HISTORY_LIMIT: usize = 50;
const DEFAULT_PROMPT: &str = "va> ";

/// Configuration for va, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VaConfig {
    /// Where notes and todos are kept (defaults to `~/.va_state.json`)
    #[serde(default)]
    pub state_file: Option<PathBuf>,

    /// How many recent lines `history` shows
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Prompt printed before each line is read
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for VaConfig {
    fn default() -> Self {
        Self {
            state_file: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl VaConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(VaError::Io)?;
        let config: VaConfig = serde_json::from_str(&content).map_err(VaError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.history_limit == 0 {
            return Err(VaError::Config(
                "history_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
