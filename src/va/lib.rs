//! # va Architecture
//!
//! va is a small interactive assistant: it reads a line, runs the matching
//! command, and keeps notes and todos in a JSON file between runs. The library
//! holds everything except the terminal; the binary's `cli` module is a thin
//! read loop on top of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Prompt, read loop, Ctrl+C, rendering, screen clearing    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Dispatch Layer (dispatch.rs, intent.rs, registry.rs)       │
//! │  - Tokenizes a line, resolves name → alias → intent         │
//! │  - Turns every failure into a one-line message              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per command, returns `Result<CmdResult>`    │
//! │  - Reads and mutates state through the `Session`            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `StateStore` trait                                       │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//!
//! There is no global state. [`init::initialize`] builds one
//! [`context::Session`] (state, store, history) and one
//! [`dispatch::Dispatcher`] (the immutable command table). The read loop owns
//! both and lends the session to each command for the duration of a call.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: unit tests against `InMemoryStore` through
//!    `commands::fixtures::CommandFixture`.
//! 2. **Dispatch**: line-level tests covering aliases, intent fallback and
//!    error reporting.
//! 3. **CLI**: rendering tests in the binary, plus end-to-end runs of the
//!    binary with piped stdin in `tests/`.
//!
//! ## Module Overview
//!
//! - [`commands`]: Built-in commands and their result types
//! - [`config`]: Configuration file
//! - [`context`]: The per-process session
//! - [`dispatch`]: Line → command → outcome
//! - [`error`]: Error types
//! - [`init`]: Start-up wiring (paths, config, registry)
//! - [`intent`]: Keyword fallback
//! - [`model`]: Notes, todos and the persisted document
//! - [`registry`]: Command table with aliases and help
//! - [`store`]: Storage abstraction and implementations

pub mod commands;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod init;
pub mod intent;
pub mod model;
pub mod registry;
pub mod store;
