//! Deal command handler: the full table run.
//!
//! Builds the ordered deck, shuffles it, deals the requested hands in block
//! order, sorts and ranks them, and marks every winning seat. The same
//! seed always reproduces the same table.

use std::io::Write;

use serde::Serialize;
use studpoker_engine::cards::Card;
use studpoker_engine::errors::EngineError;
use studpoker_engine::hand::Hand;
use studpoker_engine::showdown::Showdown;
use studpoker_engine::table::Table;
use tracing::info;

use crate::config::{self, OutputFormat};
use crate::error::CliError;
use crate::formatters::{format_deck, format_hand_line};
use crate::ui;
use crate::validation::parse_table_args;

/// Options collected from the `deal` subcommand.
#[derive(Debug, Clone, Default)]
pub struct DealOptions {
    pub cards_per_hand: Option<String>,
    pub num_hands: Option<String>,
    pub seed: Option<u64>,
    pub format: Option<OutputFormat>,
    pub no_deck: bool,
}

/// Everything one table run produced, in the order it happened.
#[derive(Debug, Clone, Serialize)]
pub struct TableReport {
    pub seed: u64,
    pub ordered_deck: Vec<Card>,
    pub shuffled_deck: Vec<Card>,
    pub dealt: Vec<Hand>,
    pub sorted: Vec<Hand>,
    pub showdown: Showdown,
}

/// Run one table: shuffle with `seed`, deal `num_hands`, resolve the winners.
pub fn play_table(seed: u64, num_hands: usize) -> Result<TableReport, EngineError> {
    let mut table = Table::new(Some(seed));
    let ordered_deck = table.deck().cards().to_vec();
    table.shuffle();
    let shuffled_deck = table.deck().cards().to_vec();
    let dealt = table.deal(num_hands)?.to_vec();
    table.sort_hands();
    let sorted = table.hands().to_vec();
    let showdown = table.showdown()?;
    info!(seed, num_hands, winners = ?showdown.winners, "table played");
    Ok(TableReport {
        seed,
        ordered_deck,
        shuffled_deck,
        dealt,
        sorted,
        showdown,
    })
}

/// Handle the deal command.
///
/// Positional arguments, when given, must both be present; otherwise the
/// number of hands comes from configuration. Flags override configuration.
pub fn handle_deal_command(
    opts: DealOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;

    let num_hands = match (opts.cards_per_hand.as_deref(), opts.num_hands.as_deref()) {
        (Some(size), Some(hands)) => match parse_table_args(size, hands) {
            Ok(args) => {
                if args.hand_size_replaced {
                    ui::display_warning(
                        err,
                        &format!("stud poker deals 5 cards per hand; ignoring {}", size),
                    )?;
                }
                args.num_hands
            }
            Err(msg) => {
                ui::write_termination_reason(err)?;
                return Err(CliError::InvalidInput(msg));
            }
        },
        (None, None) => cfg.hands as usize,
        _ => {
            ui::write_termination_reason(err)?;
            return Err(CliError::InvalidInput(
                "expected two integers: cards per hand and number of hands".into(),
            ));
        }
    };

    let seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let report = play_table(seed, num_hands)?;

    match opts.format.unwrap_or(cfg.format) {
        OutputFormat::Text => write_text(&report, cfg.show_deck && !opts.no_deck, out)?,
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
            writeln!(out, "{}", json)?;
        }
    }
    Ok(())
}

fn write_text(report: &TableReport, show_deck: bool, out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "Seed: {}", report.seed)?;
    if show_deck {
        writeln!(out, "\nOriginal Ordered Deck:")?;
        writeln!(out, "{}", format_deck(&report.ordered_deck))?;
        writeln!(out, "\nRandom Shuffled Deck:")?;
        writeln!(out, "{}", format_deck(&report.shuffled_deck))?;
    }

    let showdown = &report.showdown;
    writeln!(out, "\nPlayer Hands: (dealt from top/front of deck)")?;
    for (seat, hand) in report.dealt.iter().enumerate() {
        writeln!(out, "{}", format_hand_line(seat, hand, None, false))?;
    }
    writeln!(out, "\nPlayer Hands: sorted")?;
    for (seat, hand) in report.sorted.iter().enumerate() {
        writeln!(out, "{}", format_hand_line(seat, hand, None, false))?;
    }
    writeln!(out, "\nPlayer Hands: ranked")?;
    for (seat, hand) in report.sorted.iter().enumerate() {
        let rank = showdown.ranks.get(seat).copied();
        writeln!(out, "{}", format_hand_line(seat, hand, rank, false))?;
    }
    writeln!(out, "\nPlayer Hands: winner(s)")?;
    for (seat, hand) in report.sorted.iter().enumerate() {
        let rank = showdown.ranks.get(seat).copied();
        let line = format_hand_line(seat, hand, rank, showdown.is_winner(seat));
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
