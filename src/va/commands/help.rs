use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::registry::CmdContext;
use crate::store::StateStore;

pub const HELP: &str = "help [command] — show help (for all commands or a specific one)";

pub fn run<S: StateStore>(ctx: &mut CmdContext<'_, S>, args: &[String]) -> Result<CmdResult> {
    let name = args.first().map(String::as_str);
    match ctx.registry.help(name) {
        Some(view) => Ok(CmdResult::default().with_help(view)),
        None => Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "No such command: {}",
            name.unwrap_or_default()
        )))),
    }
}
