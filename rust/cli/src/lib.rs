//! # studpoker CLI Library
//!
//! Command-line front end for the five-card stud engine. It shuffles and
//! deals tables, ranks fixed or user-supplied hands, and reports the
//! layered configuration.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments, dispatches the subcommand and returns the
//! process exit code. Output streams are injected so tests can capture them.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["studpoker", "deal", "5", "4", "--seed", "42"];
//! let code = studpoker_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `deal [CARDS_PER_HAND NUM_HANDS]`: Shuffle, deal, sort, rank and pick the winner(s)
//! - `demo`: Rank one reference hand of every category
//! - `classify CARD...`: Rank five card codes
//! - `cfg`: Display configuration settings and their sources

use clap::Parser;
use std::io::Write;

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, StudPokerCli};
use commands::{
    DealOptions, handle_cfg_command, handle_classify_command, handle_deal_command,
    handle_demo_command,
};
use error::CliError;

const COMMANDS: &[&str] = &["deal", "demo", "classify", "cfg"];

/// Main entry point for the CLI.
///
/// Help and version go to `out` with exit code 0. Parse errors and command
/// failures go to `err` with exit code 2.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    logging::init_logging();
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    match StudPokerCli::try_parse_from(&argv) {
        Err(e) => {
            use clap::error::ErrorKind;

            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write_usage(err, &e.to_string());
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => finish(dispatch(cli.cmd, out, err), err),
    }
}

fn dispatch(cmd: Commands, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    match cmd {
        Commands::Deal {
            cards_per_hand,
            num_hands,
            seed,
            format,
            no_deck,
        } => handle_deal_command(
            DealOptions {
                cards_per_hand,
                num_hands,
                seed,
                format,
                no_deck,
            },
            out,
            err,
        ),
        Commands::Demo { format } => handle_demo_command(format, out),
        Commands::Classify { cards } => handle_classify_command(&cards, out),
        Commands::Cfg => handle_cfg_command(out),
    }
}

fn finish(result: Result<(), CliError>, err: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn write_usage(err: &mut dyn Write, clap_message: &str) -> std::io::Result<()> {
    writeln!(err, "{}", clap_message)?;
    writeln!(err)?;
    writeln!(err, "Stud Poker CLI")?;
    writeln!(err, "Usage: studpoker <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: studpoker --help")
}
