//! # Intent Fallback
//!
//! When the first word of a line is not a command, the whole line is checked
//! against a short, ordered list of keyword rules. The first rule sharing a
//! word with the input wins. There is no scoring: `remember this todo` is a
//! note because the note rule comes before the todo rule.

use once_cell::sync::Lazy;
use std::collections::HashSet;

struct IntentRule {
    keywords: HashSet<&'static str>,
    command: &'static str,
}

impl IntentRule {
    fn new(keywords: &[&'static str], command: &'static str) -> Self {
        Self {
            keywords: keywords.iter().copied().collect(),
            command,
        }
    }
}

static INTENT_RULES: Lazy<Vec<IntentRule>> = Lazy::new(|| {
    vec![
        IntentRule::new(&["note", "remember", "jot"], "note"),
        IntentRule::new(&["task", "todo", "remind"], "todo"),
        IntentRule::new(&["time", "date", "clock"], "time"),
        IntentRule::new(&["repeat", "say", "echo"], "say"),
        IntentRule::new(&["help"], "help"),
    ]
});

/// Filler words dropped from the arguments of a guessed command.
const STOP_WORDS: [&str; 4] = ["please", "me", "a", "the"];

/// Guess which command `tokens` are asking for. Matching ignores case.
pub fn guess_intent<T: AsRef<str>>(tokens: &[T]) -> Option<&'static str> {
    let words: HashSet<String> = tokens.iter().map(|t| t.as_ref().to_lowercase()).collect();
    INTENT_RULES
        .iter()
        .find(|rule| words.iter().any(|w| rule.keywords.contains(w.as_str())))
        .map(|rule| rule.command)
}

pub fn is_stop_word(token: &str) -> bool {
    let lower = token.to_lowercase();
    STOP_WORDS.contains(&lower.as_str())
}

/// Arguments for a guessed command: everything after the first token, minus
/// stop words.
pub fn strip_stop_words(args: &[String]) -> Vec<String> {
    args.iter().filter(|a| !is_stop_word(a)).cloned().collect()
}
