use colored::Colorize;
use unicode_width::UnicodeWidthStr;
use va::commands::{CmdMessage, CmdResult, DisplayNote, DisplayTodo, HistoryEntry, MessageLevel};
use va::registry::HelpView;

pub const BOX_WIDTH: usize = 72;
pub const NOTE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const BANNER: &str = "Command-line Virtual Assistant
Type 'help' to see commands. Ctrl+C or 'exit' to quit.
";

pub(super) fn print_banner() {
    println!("{}", BANNER.bold());
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_result(result: &CmdResult) {
    let mut out = result.lines.clone();
    out.extend(note_lines(&result.listed_notes));
    out.extend(todo_lines(&result.listed_todos));
    out.extend(history_lines(&result.history));
    if let Some(help) = &result.help {
        out.extend(help_lines(help));
    }
    for line in out {
        println!("{}", line);
    }
    print_messages(&result.messages);
}

pub fn note_lines(notes: &[DisplayNote]) -> Vec<String> {
    notes
        .iter()
        .map(|dn| {
            format!(
                "{}. {} — {}",
                dn.index,
                dn.note.when.format(NOTE_TIME_FORMAT),
                dn.note.text
            )
        })
        .collect()
}

pub fn todo_lines(todos: &[DisplayTodo]) -> Vec<String> {
    todos
        .iter()
        .map(|dt| {
            let check = if dt.todo.done { "[x]" } else { "[ ]" };
            format!("{:>2}. {} {}", dt.index, check, dt.todo.text)
        })
        .collect()
}

pub fn history_lines(history: &[HistoryEntry]) -> Vec<String> {
    history
        .iter()
        .map(|h| format!("{:>2}: {}", h.index, h.line))
        .collect()
}

pub fn help_lines(view: &HelpView) -> Vec<String> {
    match view {
        HelpView::Overview(entries) => {
            let width = entries.iter().map(|e| e.name.width()).max().unwrap_or(0);
            let mut lines = boxed("Commands:");
            lines.extend(entries.iter().map(|e| {
                let pad = " ".repeat(width.saturating_sub(e.name.width()));
                format!("  {}{}  {}", e.name, pad, e.summary)
            }));
            lines
        }
        HelpView::Command { name, text } => {
            let text = if text.is_empty() {
                "(no help text)"
            } else {
                text.as_str()
            };
            boxed(&format!("{}\n\n{}", name, text))
        }
    }
}

/// Draw `text` in a single-line box. Multi-line text keeps its lines, anything
/// else is wrapped on words to fit.
pub fn boxed(text: &str) -> Vec<String> {
    let body: Vec<String> = if text.contains('\n') {
        text.lines().map(String::from).collect()
    } else {
        wrap(text, BOX_WIDTH)
    };

    let rule = "─".repeat(BOX_WIDTH);
    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(format!("┌{}┐", rule));
    for line in body {
        let pad = " ".repeat(BOX_WIDTH.saturating_sub(line.width()));
        lines.push(format!("│{}{}│", line, pad));
    }
    lines.push(format!("└{}┘", rule));
    lines
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.width() + 1 + word.width() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
