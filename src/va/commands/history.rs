use crate::commands::{CmdResult, HistoryEntry};
use crate::error::Result;
use crate::registry::CmdContext;
use crate::store::StateStore;

pub const HELP: &str = "history — show recent commands";

pub fn run<S: StateStore>(ctx: &mut CmdContext<'_, S>, _args: &[String]) -> Result<CmdResult> {
    let entries = ctx
        .session
        .recent_history()
        .iter()
        .enumerate()
        .map(|(i, line)| HistoryEntry {
            index: i + 1,
            line: line.clone(),
        })
        .collect();
    Ok(CmdResult::default().with_history(entries))
}
