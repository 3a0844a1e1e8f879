//! Configuration command handler.
//!
//! Prints every resolved setting with the layer it came from (default,
//! file or env) as pretty JSON.

use std::io::Write;

use crate::config;
use crate::error::CliError;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } =
        config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "hands": {
            "value": config.hands,
            "source": sources.hands,
        },
        "show_deck": {
            "value": config.show_deck,
            "source": sources.show_deck,
        },
        "format": {
            "value": config.format,
            "source": sources.format,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
