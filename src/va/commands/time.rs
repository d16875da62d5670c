use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::now;
use crate::registry::CmdContext;
use crate::store::StateStore;

pub const HELP: &str = "time — show current date/time";

pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn run<S: StateStore>(_ctx: &mut CmdContext<'_, S>, _args: &[String]) -> Result<CmdResult> {
    Ok(CmdResult::default().with_line(now().format(TIME_FORMAT).to_string()))
}
