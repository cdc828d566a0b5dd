// main.rs
use std::io;

use anyhow::{Context, Result};
use colored::*;

use course_registration::app::Session;
use course_registration::cli::{parse_args, Args};
use course_registration::config::Config;
use course_registration::core::RosterStore;
use course_registration::shell::Shell;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Bad flags are reported and the process still exits with status 0
    let Some(args) = parse_args(std::env::args_os()) else {
        return;
    };

    // Faults are reported, never turned into a failing exit status
    if let Err(e) = run(&args) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = Config::new(args);
    let store = RosterStore::new(config.roster_file);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let shell = Shell::new(stdin.lock(), stdout.lock());

    let mut session = Session::start(shell, store).context("Failed to start session")?;
    session.run().context("Session ended unexpectedly")?;

    Ok(())
}
