use crate::commands::{CmdMessage, CmdResult, DisplayTodo};
use crate::error::{Result, VaError};
use crate::model::Todo;
use crate::registry::CmdContext;
use crate::store::StateStore;

pub const HELP: &str = "
todo add <text>     — add a todo
todo list           — list todos
todo done <number>  — mark done (by number)
";

const USAGE: &str = "Usage:\n  todo add <text>\n  todo list\n  todo done <number>";

pub fn run<S: StateStore>(ctx: &mut CmdContext<'_, S>, args: &[String]) -> Result<CmdResult> {
    let Some((sub, rest)) = args.split_first() else {
        return Ok(usage());
    };
    match sub.as_str() {
        "add" => add(ctx, rest),
        "list" => Ok(list(ctx)),
        "done" => done(ctx, rest),
        _ => Ok(usage()),
    }
}

fn usage() -> CmdResult {
    CmdResult::default().with_message(CmdMessage::warning(USAGE))
}

fn add<S: StateStore>(ctx: &mut CmdContext<'_, S>, args: &[String]) -> Result<CmdResult> {
    let text = args.join(" ").trim().to_string();
    if text.is_empty() {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::warning("Provide a task description.")));
    }
    ctx.session.mutate(|state| {
        state.todos.push(Todo::new(text));
        Ok(())
    })?;
    Ok(CmdResult::default().with_message(CmdMessage::success("Added.")))
}

fn list<S: StateStore>(ctx: &mut CmdContext<'_, S>) -> CmdResult {
    let todos = &ctx.session.state().todos;
    if todos.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info("(no todos)"));
    }
    let listed = todos
        .iter()
        .enumerate()
        .map(|(i, todo)| DisplayTodo {
            index: i + 1,
            todo: todo.clone(),
        })
        .collect();
    CmdResult::default().with_listed_todos(listed)
}

fn done<S: StateStore>(ctx: &mut CmdContext<'_, S>, args: &[String]) -> Result<CmdResult> {
    let raw = args.first().map(String::as_str).unwrap_or_default();
    let number = parse_number(raw)?;

    ctx.session.mutate(|state| {
        let slot = number
            .checked_sub(1)
            .and_then(|i| state.todos.get_mut(i))
            .ok_or_else(|| VaError::InvalidIndex(raw.to_string()))?;
        slot.done = true;
        Ok(())
    })?;
    Ok(CmdResult::default().with_message(CmdMessage::success("Marked done.")))
}

/// Todo numbers are plain decimal digits, nothing else.
fn parse_number(raw: &str) -> Result<usize> {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(VaError::Usage(
            "Provide the todo number to mark done.".to_string(),
        ));
    }
    raw.parse()
        .map_err(|_| VaError::InvalidIndex(raw.to_string()))
}
