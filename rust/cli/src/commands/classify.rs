//! Classify command handler: rank a hand typed on the command line.

use std::io::Write;

use crate::error::CliError;
use crate::formatters::format_cards;
use crate::validation::parse_hand;

pub fn handle_classify_command(codes: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let hand = parse_hand(codes).map_err(CliError::InvalidInput)?;
    let mut sorted = hand;
    let rank = sorted.classify();
    writeln!(out, "{} - {}", format_cards(hand.cards()), rank)?;
    Ok(())
}
