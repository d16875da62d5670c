//! # Dispatcher
//!
//! Turns one input line into at most one command invocation:
//!
//! ```text
//! line ──tokenize──► tokens ──resolve──► command + args ──run──► Outcome
//!          │                    │  (name, alias, then intent)      │
//!          ▼                    ▼                                  ▼
//!     Parse error        Unknown command            Error running '<cmd>'
//! ```
//!
//! Every failure becomes an [`Outcome::Rejected`] with a one-line message, so
//! the read loop just renders the outcome and reads the next line. The only
//! way out of the loop is an [`Action::Exit`] in a command result.
//!
//! [`Action::Exit`]: crate::commands::Action::Exit

use crate::commands::{CmdMessage, CmdResult, NOTE_COMMAND};
use crate::context::Session;
use crate::error::{Result, VaError};
use crate::intent::{guess_intent, strip_stop_words};
use crate::registry::{CmdContext, Registry};
use crate::store::StateStore;

/// How a command was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The first token is a command name or alias.
    Direct,
    /// The first token was unknown; a keyword in the line matched a rule.
    Intent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub command: String,
    pub args: Vec<String>,
    pub route: Route,
}

#[derive(Debug)]
pub enum Outcome {
    /// Blank line; nothing happened.
    Empty,
    Ran { command: String, result: CmdResult },
    Rejected(CmdMessage),
}

impl Outcome {
    pub fn wants_exit(&self) -> bool {
        matches!(self, Outcome::Ran { result, .. } if result.wants_exit())
    }
}

/// Split a line the way a POSIX shell would, honoring quotes and escapes.
/// `#` is ordinary text, never the start of a comment.
pub fn tokenize(line: &str) -> Result<Vec<String>> {
    shell_words::split(&escape_word_hashes(line)).map_err(|e| VaError::Parse(e.to_string()))
}

/// Backslash every unquoted `#` that starts a word, so `shell_words` keeps it.
fn escape_word_hashes(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut word_start = true;

    for c in line.chars() {
        if escaped {
            escaped = false;
            word_start = false;
            out.push(c);
            continue;
        }
        match (quote, c) {
            (Some('\''), '\'') | (Some('"'), '"') => quote = None,
            (Some('"'), '\\') | (None, '\\') => escaped = true,
            (Some(_), _) => {}
            (None, '\'' | '"') => quote = Some(c),
            (None, '#') if word_start => out.push('\\'),
            (None, _) => {}
        }
        word_start = quote.is_none() && !escaped && c.is_whitespace();
        out.push(c);
    }
    out
}

pub struct Dispatcher<S: StateStore> {
    registry: Registry<S>,
}

impl<S: StateStore> Dispatcher<S> {
    pub fn new(registry: Registry<S>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry<S> {
        &self.registry
    }

    /// Find the command for `tokens`. `tokens` must not be empty.
    pub fn resolve(&self, tokens: &[String]) -> Option<Resolved> {
        let (word, rest) = tokens.split_first()?;

        if let Some(name) = self.registry.resolve(word) {
            return Some(Resolved {
                command: name.to_string(),
                args: rest.to_vec(),
                route: Route::Direct,
            });
        }

        let guess = guess_intent(tokens)?;
        if self.registry.entry(guess).is_none() {
            log::warn!("intent rule points at unregistered command '{}'", guess);
            return None;
        }

        let mut args = strip_stop_words(rest);
        if guess == NOTE_COMMAND && args.is_empty() {
            args = vec![tokens.join(" ")];
        }
        Some(Resolved {
            command: guess.to_string(),
            args,
            route: Route::Intent,
        })
    }

    /// Handle one line of input against `session`.
    pub fn dispatch(&self, session: &mut Session<S>, line: &str) -> Outcome {
        let line = line.trim();
        if line.is_empty() {
            return Outcome::Empty;
        }
        session.record(line);

        let tokens = match tokenize(line) {
            Ok(tokens) => tokens,
            Err(e) => return Outcome::Rejected(CmdMessage::error(e.to_string())),
        };
        let Some(word) = tokens.first() else {
            return Outcome::Empty;
        };

        let Some(resolved) = self.resolve(&tokens) else {
            log::debug!("no command for {:?}", tokens);
            return Outcome::Rejected(CmdMessage::error(format!(
                "Unknown command: {}. Try 'help'.",
                word
            )));
        };
        log::debug!(
            "running '{}' ({:?}) with {:?}",
            resolved.command,
            resolved.route,
            resolved.args
        );

        self.invoke(session, resolved)
    }

    fn invoke(&self, session: &mut Session<S>, resolved: Resolved) -> Outcome {
        let Some(entry) = self.registry.entry(&resolved.command) else {
            return Outcome::Rejected(CmdMessage::error(format!(
                "Unknown command: {}. Try 'help'.",
                resolved.command
            )));
        };

        let mut ctx = CmdContext {
            session,
            registry: &self.registry,
        };
        match (entry.handler)(&mut ctx, &resolved.args) {
            Ok(result) => Outcome::Ran {
                command: resolved.command,
                result,
            },
            Err(e) => {
                log::debug!("'{}' failed: {:?}", resolved.command, e);
                Outcome::Rejected(CmdMessage::error(format!(
                    "Error running '{}': {}",
                    resolved.command, e
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{builtin_registry, Action};
    use crate::store::memory::InMemoryStore;

    fn setup() -> (Dispatcher<InMemoryStore>, Session<InMemoryStore>) {
        let dispatcher = Dispatcher::new(builtin_registry().unwrap());
        let session = Session::open(InMemoryStore::new(), 50);
        (dispatcher, session)
    }

    fn tokens(line: &str) -> Vec<String> {
        tokenize(line).unwrap()
    }

    fn rejection(outcome: Outcome) -> String {
        match outcome {
            Outcome::Rejected(message) => message.content,
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn tokenizer_honors_quotes() {
        assert_eq!(
            tokens(r#"note "buy milk" 'and eggs'"#),
            ["note", "buy milk", "and eggs"]
        );
    }

    #[test]
    fn tokenizer_keeps_hash_words() {
        assert_eq!(
            tokens("note call mom #urgent"),
            ["note", "call", "mom", "#urgent"]
        );
        assert_eq!(tokens("# hi"), ["#", "hi"]);
        assert_eq!(
            tokens(r##"say "a #b" c#d '#e' \#f"##),
            ["say", "a #b", "c#d", "#e", "#f"]
        );
    }

    #[test]
    fn direct_resolution_uses_aliases() {
        let (dispatcher, _) = setup();
        let resolved = dispatcher.resolve(&tokens("t add fix bug")).unwrap();
        assert_eq!(resolved.command, "todo");
        assert_eq!(resolved.args, ["add", "fix", "bug"]);
        assert_eq!(resolved.route, Route::Direct);
    }

    #[test]
    fn direct_resolution_keeps_stop_words() {
        let (dispatcher, _) = setup();
        let resolved = dispatcher.resolve(&tokens("say the end")).unwrap();
        assert_eq!(resolved.args, ["the", "end"]);
    }

    #[test]
    fn intent_note_with_only_stop_words_uses_whole_line() {
        let (dispatcher, _) = setup();
        let resolved = dispatcher.resolve(&tokens("remember the")).unwrap();
        assert_eq!(resolved.command, "note");
        assert_eq!(resolved.route, Route::Intent);
        assert_eq!(resolved.args, ["remember the"]);

        let resolved = dispatcher.resolve(&tokens("jot")).unwrap();
        assert_eq!(resolved.args, ["jot"]);
    }

    #[test]
    fn intent_strips_stop_words_from_remaining_tokens() {
        let (dispatcher, _) = setup();
        let resolved = dispatcher
            .resolve(&tokens("please remember call mom"))
            .unwrap();
        assert_eq!(resolved.command, "note");
        assert_eq!(resolved.args, ["remember", "call", "mom"]);
    }

    #[test]
    fn intent_for_other_commands_may_have_no_args() {
        let (dispatcher, _) = setup();
        let resolved = dispatcher.resolve(&tokens("clock")).unwrap();
        assert_eq!(resolved.command, "time");
        assert!(resolved.args.is_empty());

        let resolved = dispatcher.resolve(&tokens("what time")).unwrap();
        assert_eq!(resolved.command, "time");
        assert_eq!(resolved.args, ["time"]);
    }

    #[test]
    fn note_keyword_beats_todo_keyword() {
        let (dispatcher, _) = setup();
        let resolved = dispatcher
            .resolve(&tokens("remind me to jot something"))
            .unwrap();
        assert_eq!(resolved.command, "note");
    }

    #[test]
    fn unknown_line_resolves_to_nothing() {
        let (dispatcher, _) = setup();
        assert!(dispatcher.resolve(&tokens("frobnicate widgets")).is_none());
    }

    #[test]
    fn note_scenario_stores_text() {
        let (dispatcher, mut session) = setup();
        let outcome = dispatcher.dispatch(&mut session, "note buy milk");

        assert!(matches!(outcome, Outcome::Ran { ref command, .. } if command == "note"));
        assert_eq!(session.state().notes.len(), 1);
        assert_eq!(session.state().notes[0].text, "buy milk");
    }

    #[test]
    fn please_remember_falls_back_to_note() {
        let (dispatcher, mut session) = setup();
        dispatcher.dispatch(&mut session, "please remember call mom");
        dispatcher.dispatch(&mut session, "Remember me");

        let texts: Vec<_> = session.state().notes.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, ["remember call mom", "Remember me"]);
    }

    #[test]
    fn hash_words_are_stored_verbatim() {
        let (dispatcher, mut session) = setup();
        dispatcher.dispatch(&mut session, "note call mom #urgent");
        dispatcher.dispatch(&mut session, "todo add #42 fix login");

        assert_eq!(session.state().notes[0].text, "call mom #urgent");
        assert_eq!(session.state().todos[0].text, "#42 fix login");

        let message = rejection(dispatcher.dispatch(&mut session, "# just a hash"));
        assert_eq!(message, "Unknown command: #. Try 'help'.");
    }

    #[test]
    fn todo_scenario_marks_item_done() {
        let (dispatcher, mut session) = setup();
        dispatcher.dispatch(&mut session, "todo add fix bug");
        dispatcher.dispatch(&mut session, "todo done 1");

        let todos = &session.state().todos;
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].text, "fix bug");
        assert!(todos[0].done);
    }

    #[test]
    fn blank_lines_are_ignored_and_not_recorded() {
        let (dispatcher, mut session) = setup();
        assert!(matches!(dispatcher.dispatch(&mut session, ""), Outcome::Empty));
        assert!(matches!(
            dispatcher.dispatch(&mut session, "   \t "),
            Outcome::Empty
        ));
        assert!(session.recent_history().is_empty());
    }

    #[test]
    fn unbalanced_quotes_are_a_parse_error() {
        let (dispatcher, mut session) = setup();
        let message = rejection(dispatcher.dispatch(&mut session, r#"note "buy milk"#));

        assert!(message.starts_with("Parse error:"));
        assert!(session.state().notes.is_empty());
        assert_eq!(session.recent_history(), [r#"note "buy milk"#]);
    }

    #[test]
    fn unknown_command_is_reported() {
        let (dispatcher, mut session) = setup();
        let message = rejection(dispatcher.dispatch(&mut session, "frobnicate now"));
        assert_eq!(message, "Unknown command: frobnicate. Try 'help'.");
    }

    #[test]
    fn handler_errors_name_the_command() {
        let (dispatcher, mut session) = setup();
        dispatcher.dispatch(&mut session, "todo add only one");

        let message = rejection(dispatcher.dispatch(&mut session, "t done 5"));
        assert_eq!(message, "Error running 'todo': Invalid number: 5");
        assert!(!session.state().todos[0].done);
    }

    #[test]
    fn exit_outcome_requests_exit() {
        let (dispatcher, mut session) = setup();
        let outcome = dispatcher.dispatch(&mut session, "quit");
        assert!(outcome.wants_exit());

        let outcome = dispatcher.dispatch(&mut session, "say hi");
        assert!(!outcome.wants_exit());
    }

    #[test]
    fn exit_works_when_saving_is_broken() {
        let dispatcher = Dispatcher::new(builtin_registry().unwrap());
        let mut session = Session::open(InMemoryStore::failing(), 50);

        let message = rejection(dispatcher.dispatch(&mut session, "note lost"));
        assert!(message.starts_with("Error running 'note': IO error"));
        assert!(session.state().notes.is_empty());

        assert!(dispatcher.dispatch(&mut session, "exit").wants_exit());
    }

    #[test]
    fn clear_asks_for_screen_clear() {
        let (dispatcher, mut session) = setup();
        match dispatcher.dispatch(&mut session, "clear") {
            Outcome::Ran { result, .. } => assert_eq!(result.action, Some(Action::ClearScreen)),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn history_sees_previous_lines() {
        let (dispatcher, mut session) = setup();
        dispatcher.dispatch(&mut session, "say one");
        dispatcher.dispatch(&mut session, "nonsense");
        match dispatcher.dispatch(&mut session, "history") {
            Outcome::Ran { result, .. } => {
                let lines: Vec<_> = result.history.iter().map(|h| h.line.as_str()).collect();
                assert_eq!(lines, ["say one", "nonsense", "history"]);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }
}
