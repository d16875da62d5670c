//! # Storage Layer
//!
//! The assistant keeps a single document, [`AppState`], holding every note and
//! todo. The [`StateStore`] trait abstracts where that document lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one pretty-printed JSON file
//!   (`~/.va_state.json` unless configured otherwise).
//! - [`memory::InMemoryStore`]: Keeps the serialized document in memory. Used by
//!   tests, it still goes through serde so round-trips behave like the real file.
//!
//! ## Contract
//!
//! - `load` never fails. A missing or unreadable document yields a fresh
//!   [`AppState`]; the recovery is logged, not reported.
//! - `save` overwrites the whole document. Callers save after every mutation,
//!   see [`crate::context::Session::mutate`].

use crate::error::Result;
use crate::model::AppState;

pub mod fs;
pub mod memory;

pub trait StateStore {
    /// Load the persisted state, falling back to a fresh default.
    fn load(&self) -> AppState;

    /// Persist the full state, replacing whatever was stored before.
    fn save(&mut self, state: &AppState) -> Result<()>;
}
