use super::StateStore;
use crate::error::{Result, VaError};
use crate::model::AppState;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_state(&self) -> Result<Option<AppState>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(VaError::Io)?;
        let state: AppState = serde_json::from_str(&content).map_err(VaError::Serialization)?;
        Ok(Some(state))
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(VaError::Io)?;
            }
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl StateStore for FileStore {
    fn load(&self) -> AppState {
        match self.read_state() {
            Ok(Some(state)) => {
                log::debug!(
                    "loaded {} notes and {} todos from {}",
                    state.notes.len(),
                    state.todos.len(),
                    self.path.display()
                );
                state
            }
            Ok(None) => {
                log::debug!("no state at {}, starting fresh", self.path.display());
                AppState::new()
            }
            Err(e) => {
                log::info!(
                    "could not read state at {} ({}), starting fresh",
                    self.path.display(),
                    e
                );
                AppState::new()
            }
        }
    }

    fn save(&mut self, state: &AppState) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(state).map_err(VaError::Serialization)?;

        // Write beside the target and rename so a crash never leaves half a file.
        let tmp = self.temp_path();
        fs::write(&tmp, content).map_err(VaError::Io)?;
        fs::rename(&tmp, &self.path).map_err(VaError::Io)?;

        log::debug!("saved state to {}", self.path.display());
        Ok(())
    }
}
