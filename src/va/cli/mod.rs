//! # CLI Layer
//!
//! This module is the terminal front-end for va. It is the **only** place that:
//! - Reads from stdin and writes to stdout
//! - Handles Ctrl+C
//! - Clears the screen
//! - Formats results for humans
//!
//! Everything it shows comes from a [`va::dispatch::Outcome`]; it never looks at
//! state or decides what a command means.
//!
//! ## Structure
//!
//! - `run()`: start-up (context, interrupt handler, banner), then the loop
//! - `repl`: the prompt/read/dispatch/render loop
//! - `render`: turning `CmdResult`s into lines, colors and boxes

mod render;
mod repl;

use va::commands::exit::FAREWELL;
use va::error::Result;
use va::init::{initialize, VaContext};

pub fn run() -> Result<()> {
    let VaContext {
        dispatcher,
        mut session,
        config,
    } = initialize()?;

    install_interrupt_handler();
    render::print_banner();

    repl::run_loop(&dispatcher, &mut session, &config.prompt)
}

/// Ctrl+C at the prompt ends the session like `exit` does. State is already on
/// disk after every change, so there is nothing to flush here.
fn install_interrupt_handler() {
    let installed = ctrlc::set_handler(|| {
        println!();
        println!("{}", FAREWELL);
        std::process::exit(0);
    });
    if let Err(e) = installed {
        log::warn!("could not install Ctrl+C handler: {}", e);
    }
}
