//! # Built-in Commands
//!
//! Each command is a plain function matching [`crate::registry::Handler`]: it gets the
//! [`crate::registry::CmdContext`] and its arguments, and returns a [`CmdResult`] describing what
//! should be shown. Commands never print. The CLI layer renders results.
//!
//! Missing input (e.g. `note` with no text) is answered with a usage hint as
//! a warning message. Invalid
//! input that makes the command fail (e.g. `todo done 9` with two todos)
//! comes back as an `Err`, which the dispatcher reports as
//! `Error running '<cmd>': <message>`.

use crate::error::Result;
use crate::model::{Note, Todo};
use crate::registry::{HelpView, Registry};
use crate::store::StateStore;

pub mod clear;
pub mod exit;
pub mod help;
pub mod history;
pub mod note;
pub mod say;
pub mod time;
pub mod todo;

/// Name of the note-taking command, which gets special treatment in the intent fallback.
pub const NOTE_COMMAND: &str = "note";

/// Register every built-in command. Fails if the table has a name collision.
pub fn builtin_registry<S: StateStore>() -> Result<Registry<S>> {
    Registry::<S>::builder()
        .register("help", &["?"], help::HELP, help::run)
        .register("time", &["date"], time::HELP, time::run)
        .register("say", &[], say::HELP, say::run)
        .register(NOTE_COMMAND, &["addnote", "n"], note::HELP, note::run)
        .register("todo", &["t", "task"], todo::HELP, todo::run)
        .register("history", &[], history::HELP, history::run)
        .register("clear", &[], clear::HELP, clear::run)
        .register("exit", &["quit", "q"], exit::HELP, exit::run)
        .build()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Something the terminal has to do beyond printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ClearScreen,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNote {
    pub index: usize,
    pub note: Note,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTodo {
    pub index: usize,
    pub todo: Todo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub index: usize,
    pub line: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CmdResult {
    /// Plain output lines (echoes, the time of day).
    pub lines: Vec<String>,
    pub listed_notes: Vec<DisplayNote>,
    pub listed_todos: Vec<DisplayTodo>,
    pub history: Vec<HistoryEntry>,
    pub help: Option<HelpView>,
    pub action: Option<Action>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_listed_todos(mut self, todos: Vec<DisplayTodo>) -> Self {
        self.listed_todos = todos;
        self
    }

    pub fn with_history(mut self, history: Vec<HistoryEntry>) -> Self {
        self.history = history;
        self
    }

    pub fn with_help(mut self, help: HelpView) -> Self {
        self.help = Some(help);
        self
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn wants_exit(&self) -> bool {
        self.action == Some(Action::Exit)
    }
}

/// Shorthand used by every handler's tests.
#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::context::Session;
    use crate::registry::{CmdContext, Handler};
    use crate::store::memory::InMemoryStore;

    pub struct CommandFixture {
        pub session: Session<InMemoryStore>,
        pub registry: Registry<InMemoryStore>,
    }

    impl Default for CommandFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CommandFixture {
        pub fn new() -> Self {
            Self::with_store(InMemoryStore::new())
        }

        pub fn with_store(store: InMemoryStore) -> Self {
            Self {
                session: Session::open(store, 50),
                registry: builtin_registry().expect("builtin registry builds"),
            }
        }

        /// Run `handler` with whitespace-split `args`.
        pub fn run(&mut self, handler: Handler<InMemoryStore>, args: &str) -> Result<CmdResult> {
            let args: Vec<String> = args.split_whitespace().map(String::from).collect();
            let mut ctx = CmdContext {
                session: &mut self.session,
                registry: &self.registry,
            };
            handler(&mut ctx, &args)
        }
    }
}
