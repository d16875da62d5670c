use crate::commands::builtin_registry;
use crate::config::VaConfig;
use crate::context::Session;
use crate::dispatch::Dispatcher;
use crate::error::{Result, VaError};
use crate::store::fs::FileStore;
use directories::{BaseDirs, ProjectDirs};
use std::path::{Path, PathBuf};

/// State file name in the home directory when nothing else is configured.
pub const STATE_FILENAME: &str = ".va_state.json";
/// Overrides the state file location.
pub const STATE_ENV: &str = "VA_STATE";
/// Overrides the directory holding `config.json`.
pub const CONFIG_DIR_ENV: &str = "VA_CONFIG_DIR";

pub struct VaContext {
    pub dispatcher: Dispatcher<FileStore>,
    pub session: Session<FileStore>,
    pub config: VaConfig,
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = env_path(CONFIG_DIR_ENV) {
        return Ok(dir);
    }
    ProjectDirs::from("com", "va", "va")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| VaError::Config("could not determine config directory".to_string()))
}

/// Pick the state file: explicit override, then config, then `~/.va_state.json`.
pub fn resolve_state_path(
    env_override: Option<PathBuf>,
    config: &VaConfig,
    home: Option<&Path>,
) -> Result<PathBuf> {
    if let Some(path) = env_override {
        return Ok(path);
    }
    if let Some(path) = &config.state_file {
        return Ok(path.clone());
    }
    home.map(|h| h.join(STATE_FILENAME))
        .ok_or_else(|| VaError::Config("could not determine home directory".to_string()))
}

/// Load configuration and state and build the command table.
pub fn initialize() -> Result<VaContext> {
    let config_dir = config_dir()?;
    let config = VaConfig::load(&config_dir).unwrap_or_else(|e| {
        log::warn!(
            "ignoring config in {}: {}",
            config_dir.display(),
            e
        );
        VaConfig::default()
    });

    let base_dirs = BaseDirs::new();
    let state_path = resolve_state_path(
        env_path(STATE_ENV),
        &config,
        base_dirs.as_ref().map(|b| b.home_dir()),
    )?;
    log::debug!("using state file {}", state_path.display());

    let dispatcher = Dispatcher::new(builtin_registry()?);
    let session = Session::open(FileStore::new(state_path), config.history_limit);

    Ok(VaContext {
        dispatcher,
        session,
        config,
    })
}
