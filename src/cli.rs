// src/cli.rs
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "course-registration")]
#[command(version)]
#[command(about = "Register students for courses and keep the roster in a JSON file")]
pub struct Args {
    /// Roster file to load and save (overrides the config file)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Config file path (defaults to <config dir>/course-registration/config.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Parse arguments without letting clap pick the exit status.
///
/// Usage errors, `--help` and `--version` are printed and yield `None`; the
/// caller then returns normally so the process still exits with status 0.
pub fn parse_args<I, T>(args: I) -> Option<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(args) {
        Ok(args) => Some(args),
        Err(e) => {
            if let Err(print_err) = e.print() {
                log::warn!("Failed to print usage: {}", print_err);
            }
            None
        }
    }
}
