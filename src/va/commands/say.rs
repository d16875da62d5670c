use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::registry::CmdContext;
use crate::store::StateStore;

pub const HELP: &str = "say <text> — repeat back your text";

pub fn run<S: StateStore>(_ctx: &mut CmdContext<'_, S>, args: &[String]) -> Result<CmdResult> {
    if args.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::warning("Usage: say <text>")));
    }
    Ok(CmdResult::default().with_line(args.join(" ")))
}
