use crate::commands::{Action, CmdResult};
use crate::error::Result;
use crate::registry::CmdContext;
use crate::store::StateStore;

pub const HELP: &str = "clear — clear the screen";

pub fn run<S: StateStore>(_ctx: &mut CmdContext<'_, S>, _args: &[String]) -> Result<CmdResult> {
    Ok(CmdResult::default().with_action(Action::ClearScreen))
}
