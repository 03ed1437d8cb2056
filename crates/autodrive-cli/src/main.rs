//! Interactive driver for the autodrive simulation.
//!
//! Prompts for a field size, lets the user add cars with their command
//! strings, runs the simulation, and prints where every car ended up.

mod input;
mod logging;
mod render;
mod session;

use anyhow::{Context, Result};
use std::io;

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    logging::init();
    let stdin = io::stdin();
    let stdout = io::stdout();
    session::Session::new(stdin.lock(), stdout.lock())
        .run()
        .context("terminal I/O failed")
}
