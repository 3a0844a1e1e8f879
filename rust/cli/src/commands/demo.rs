//! Demo command handler: one fixed example hand of every category.

use std::io::Write;

use serde::Serialize;
use studpoker_engine::hand::{Hand, HandRank, reference_hands};

use crate::config::OutputFormat;
use crate::error::CliError;
use crate::formatters::format_hand_line;

#[derive(Debug, Serialize)]
struct DemoEntry {
    cards: Hand,
    rank: HandRank,
}

pub fn handle_demo_command(
    format: Option<OutputFormat>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    // Classify copies so the hands print in their original order.
    let entries: Vec<DemoEntry> = reference_hands()
        .into_iter()
        .map(|hand| {
            let mut sorted = hand;
            DemoEntry {
                cards: hand,
                rank: sorted.classify(),
            }
        })
        .collect();

    match format.unwrap_or(OutputFormat::Text) {
        OutputFormat::Text => {
            writeln!(out, "Poker Hands: test")?;
            for (seat, e) in entries.iter().enumerate() {
                writeln!(out, "{}", format_hand_line(seat, &e.cards, Some(e.rank), false))?;
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&entries).map_err(std::io::Error::other)?;
            writeln!(out, "{}", json)?;
        }
    }
    Ok(())
}
