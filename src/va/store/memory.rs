use super::StateStore;
use crate::error::{Result, VaError};
use crate::model::AppState;

/// In-memory storage for testing.
/// Holds the serialized document, so loads go through the same decoding as files.
#[derive(Default)]
pub struct InMemoryStore {
    document: Option<String>,
    saves: usize,
    read_only: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a raw document, e.g. a corrupt one.
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: Some(document.into()),
            ..Self::default()
        }
    }

    /// A store whose every save fails, like a state file on a read-only disk.
    pub fn failing() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// Number of successful saves since creation.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl StateStore for InMemoryStore {
    fn load(&self) -> AppState {
        self.document
            .as_deref()
            .and_then(|doc| serde_json::from_str(doc).ok())
            .unwrap_or_default()
    }

    fn save(&mut self, state: &AppState) -> Result<()> {
        if self.read_only {
            return Err(VaError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "store is read-only",
            )));
        }
        let doc = serde_json::to_string_pretty(state).map_err(VaError::Serialization)?;
        self.document = Some(doc);
        self.saves += 1;
        Ok(())
    }
}
