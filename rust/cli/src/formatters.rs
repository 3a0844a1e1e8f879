//! Card, deck and hand formatters for terminal display.
//!
//! Pure functions over engine values; nothing here prints. Cards render
//! as `[ R-S ]` using the engine's one-letter rank and suit symbols.
//!
//! ## Example
//!
//! ```rust
//! use studpoker_engine::cards::{Card, Rank, Suit};
//! use studpoker_cli::formatters::format_card;
//!
//! let ace_hearts = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(format_card(&ace_hearts), "[ A-H ]");
//! ```

use studpoker_engine::cards::{Card, NUM_OF_RANKS};
use studpoker_engine::hand::{Hand, HandRank};

const CARD_SEPARATOR: &str = "  ";

/// Format a Card as `[ rank-suit ]`.
pub fn format_card(card: &Card) -> String {
    format!("[ {}-{} ]", card.rank.symbol(), card.suit.symbol())
}

pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(CARD_SEPARATOR)
}

/// Format a deck thirteen cards per line.
pub fn format_deck(cards: &[Card]) -> String {
    cards
        .chunks(NUM_OF_RANKS)
        .map(format_cards)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Seat label for display. The tenth seat is `T` so every label has the
/// same width.
pub fn player_label(seat: usize) -> String {
    if seat == 9 {
        "Player T".to_string()
    } else {
        format!("Player {}", seat + 1)
    }
}

/// One table line: label, cards, and optionally the rank and a winner tag.
pub fn format_hand_line(seat: usize, hand: &Hand, rank: Option<HandRank>, winner: bool) -> String {
    let mut line = format!("{} - {}", player_label(seat), format_cards(hand.cards()));
    if let Some(r) = rank {
        line.push_str(" - ");
        line.push_str(r.name());
    }
    if winner {
        line.push_str(" - Winner");
    }
    line
}
