use crate::commands::{Action, CmdMessage, CmdResult};
use crate::error::Result;
use crate::registry::CmdContext;
use crate::store::StateStore;

pub const HELP: &str = "exit — leave the assistant";

pub const FAREWELL: &str = "Bye!";

pub fn run<S: StateStore>(_ctx: &mut CmdContext<'_, S>, _args: &[String]) -> Result<CmdResult> {
    Ok(CmdResult::default()
        .with_message(CmdMessage::info(FAREWELL))
        .with_action(Action::Exit))
}
