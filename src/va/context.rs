//! # Session
//!
//! The one context object a running assistant owns: the loaded [`AppState`],
//! the store it came from, and the input history. It is created once at
//! start-up and passed by `&mut` to the dispatcher and every command.
//!
//! Commands can read the state freely, but can only change it through
//! [`Session::mutate`], which saves right after the change. That makes "every
//! successful mutation is on disk" a property of the type rather than a rule
//! each command has to remember.

use crate::error::Result;
use crate::model::AppState;
use crate::store::StateStore;

pub struct Session<S: StateStore> {
    store: S,
    state: AppState,
    history: Vec<String>,
    history_limit: usize,
}

impl<S: StateStore> Session<S> {
    pub fn open(store: S, history_limit: usize) -> Self {
        let state = store.load();
        Self {
            store,
            state,
            history: Vec::new(),
            history_limit: history_limit.max(1),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply `change` to the state and save it.
    ///
    /// All or nothing: if `change` or the save fails, the state is put back the
    /// way it was and nothing new is on disk.
    pub fn mutate<T>(&mut self, change: impl FnOnce(&mut AppState) -> Result<T>) -> Result<T> {
        let before = self.state.clone();
        let saved = change(&mut self.state).and_then(|out| {
            self.store.save(&self.state)?;
            Ok(out)
        });
        if saved.is_err() {
            self.state = before;
        }
        saved
    }

    /// Remember an input line. Only the last `history_limit` lines are kept.
    pub fn record(&mut self, line: &str) {
        self.history.push(line.to_string());
        let excess = self.history.len().saturating_sub(self.history_limit);
        self.history.drain(..excess);
    }

    /// The kept lines, oldest first.
    pub fn recent_history(&self) -> &[String] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VaError;
    use crate::model::Note;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn mutate_saves_after_change() {
        let mut session = Session::open(InMemoryStore::new(), 50);
        session
            .mutate(|state| {
                state.notes.push(Note::new("hello"));
                Ok(())
            })
            .unwrap();

        assert_eq!(session.store().saves(), 1);
        assert_eq!(session.store().load().notes[0].text, "hello");
    }

    #[test]
    fn failed_mutation_is_not_saved() {
        let mut session = Session::open(InMemoryStore::new(), 50);
        let result: Result<()> =
            session.mutate(|_| Err(VaError::InvalidIndex("7".to_string())));

        assert!(result.is_err());
        assert_eq!(session.store().saves(), 0);
    }

    #[test]
    fn failed_mutation_rolls_back_partial_changes() {
        let mut session = Session::open(InMemoryStore::new(), 50);
        let result: Result<()> = session.mutate(|state| {
            state.notes.push(Note::new("half done"));
            Err(VaError::InvalidIndex("7".to_string()))
        });

        assert!(result.is_err());
        assert!(session.state().notes.is_empty());
    }

    #[test]
    fn failed_save_rolls_back_the_change() {
        let mut session = Session::open(InMemoryStore::failing(), 50);
        let result = session.mutate(|state| {
            state.notes.push(Note::new("lost"));
            Ok(())
        });

        assert!(matches!(result, Err(VaError::Io(_))));
        assert!(session.state().notes.is_empty());
        assert_eq!(session.store().saves(), 0);
    }

    #[test]
    fn open_loads_existing_state() {
        let mut store = InMemoryStore::new();
        let mut state = AppState::new();
        state.notes.push(Note::new("persisted"));
        store.save(&state).unwrap();

        let session = Session::open(store, 50);
        assert_eq!(session.state(), &state);
    }

    #[test]
    fn recent_history_is_bounded() {
        let mut session = Session::open(InMemoryStore::new(), 3);
        for i in 1..=5 {
            session.record(&format!("line {}", i));
        }
        assert_eq!(session.recent_history(), ["line 3", "line 4", "line 5"]);
        assert_eq!(session.history.len(), 3);
    }
}
