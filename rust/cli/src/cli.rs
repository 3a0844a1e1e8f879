//! Command-line argument definitions.

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "studpoker",
    version,
    about = "Five-card stud table: shuffle, deal, rank and pick the winners"
)]
pub struct StudPokerCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shuffle a deck, deal hands, rank them and show the winner(s)
    Deal {
        /// Cards per hand (stud poker always deals 5)
        #[arg(allow_hyphen_values = true)]
        cards_per_hand: Option<String>,
        /// Number of hands to deal, 1 through 10
        #[arg(allow_hyphen_values = true)]
        num_hands: Option<String>,
        /// RNG seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Skip printing the ordered and shuffled deck
        #[arg(long)]
        no_deck: bool,
    },
    /// Rank one fixed example hand of every category
    Demo {
        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Rank a hand given as five card codes, e.g. AH KH QH JH TH
    Classify {
        /// Card codes: rank (A 2-9 T J Q K) followed by suit (H D C S)
        #[arg(num_args = 0.., allow_hyphen_values = true)]
        cards: Vec<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
