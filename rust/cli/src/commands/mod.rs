//! Command handler modules for the studpoker CLI.
//!
//! Each subcommand lives in its own module with one public handler,
//! `handle_COMMAND_command(...) -> Result<(), CliError>`, that takes its
//! output streams as `&mut dyn Write`.

pub mod cfg;
pub mod classify;
pub mod deal;
pub mod demo;

pub use cfg::handle_cfg_command;
pub use classify::handle_classify_command;
pub use deal::{DealOptions, TableReport, handle_deal_command, play_table};
pub use demo::handle_demo_command;
