use chrono::{DateTime, Local, SubsecRound};
use serde::{Deserialize, Serialize};

/// All persisted times are local and truncated to whole seconds.
pub type Timestamp = DateTime<Local>;

pub fn now() -> Timestamp {
    Local::now().trunc_subsecs(0)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub when: Timestamp,
    pub text: String,
}

impl Note {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            when: now(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub text: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default = "now")]
    pub created: Timestamp,
}

impl Todo {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
            created: now(),
        }
    }
}

/// The document written to the state file.
///
/// Both lists are append-only: entries are never removed or reordered, so the
/// 1-based number shown to the user is always `slot + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub todos: Vec<Todo>,
    #[serde(default = "now")]
    pub created: Timestamp,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            todos: Vec::new(),
            created: now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
