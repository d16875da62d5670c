use super::render::{print_messages, print_result};
use console::Term;
use std::io::{self, BufRead, Write};
use va::commands::exit::FAREWELL;
use va::commands::{Action, CmdMessage};
use va::context::Session;
use va::dispatch::{Dispatcher, Outcome};
use va::error::Result;
use va::store::StateStore;

/// Prompt, read, dispatch, render, until `exit` or end of input.
pub(super) fn run_loop<S: StateStore>(
    dispatcher: &Dispatcher<S>,
    session: &mut Session<S>,
    prompt: &str,
) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                print_messages(&[CmdMessage::error("Parse error: input is not valid UTF-8")]);
                continue;
            }
            Err(e) => {
                log::warn!("stopped reading input: {}", e);
                break;
            }
        }

        let outcome = dispatcher.dispatch(session, &line);
        if show_outcome(&outcome) {
            return Ok(());
        }
    }

    // End of input behaves like `exit`.
    println!();
    println!("{}", FAREWELL);
    Ok(())
}

/// Render one outcome. Returns true when the loop should stop.
fn show_outcome(outcome: &Outcome) -> bool {
    match outcome {
        Outcome::Empty => false,
        Outcome::Rejected(message) => {
            print_messages(std::slice::from_ref(message));
            false
        }
        Outcome::Ran { result, .. } => {
            if result.action == Some(Action::ClearScreen) {
                if let Err(e) = Term::stdout().clear_screen() {
                    log::debug!("could not clear screen: {}", e);
                }
            }
            print_result(result);
            result.wants_exit()
        }
    }
}
