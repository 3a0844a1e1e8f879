//! Parsing and validation of user-supplied table parameters and card codes.
//!
//! The engine trusts its callers; everything arriving from the command line
//! is checked here first and rejected with a message the user can act on.

use std::collections::HashSet;

use studpoker_engine::cards::Card;
use studpoker_engine::deck::{MAX_PLAYERS, MIN_PLAYERS};
use studpoker_engine::hand::{CARDS_PER_HAND, Hand};

/// Validated table parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableArgs {
    /// Number of hands to deal, 1 through 10
    pub num_hands: usize,
    /// True when the user asked for a hand size other than five
    pub hand_size_replaced: bool,
}

fn parse_positive(value: &str, what: &str) -> Result<usize, String> {
    match value.trim().parse::<i64>() {
        Ok(n) if n > 0 => Ok(n as usize),
        Ok(_) => Err(format!("{} must be greater than zero", what)),
        Err(_) => Err(format!("{} must be an integer, got '{}'", what, value)),
    }
}

/// Validate the two positional integers: cards per hand and number of hands.
///
/// Both must be positive. The hand size is always five in stud poker, so any
/// other positive value is accepted but flagged for a warning. The number of
/// hands must be within `1..=10`.
///
/// # Example
///
/// ```rust
/// # use studpoker_cli::validation::parse_table_args;
/// let args = parse_table_args("5", "4").unwrap();
/// assert_eq!(args.num_hands, 4);
/// assert!(!args.hand_size_replaced);
///
/// assert!(parse_table_args("5", "11").is_err());
/// assert!(parse_table_args("0", "3").is_err());
/// ```
pub fn parse_table_args(cards_per_hand: &str, num_hands: &str) -> Result<TableArgs, String> {
    let size = parse_positive(cards_per_hand, "cards per hand")?;
    let hands = parse_positive(num_hands, "number of hands")?;
    validate_num_hands(hands)?;
    Ok(TableArgs {
        num_hands: hands,
        hand_size_replaced: size != CARDS_PER_HAND,
    })
}

pub fn validate_num_hands(num_hands: usize) -> Result<(), String> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_hands) {
        return Err(format!(
            "number of hands must be {} through {}, got {}",
            MIN_PLAYERS, MAX_PLAYERS, num_hands
        ));
    }
    Ok(())
}

/// Parse exactly five distinct card codes (e.g. `AH TD 7c 10s KS`).
pub fn parse_hand(codes: &[String]) -> Result<Hand, String> {
    if codes.len() != CARDS_PER_HAND {
        return Err(format!(
            "a hand needs exactly {} cards, got {}",
            CARDS_PER_HAND,
            codes.len()
        ));
    }
    let mut seen = HashSet::new();
    let mut cards = Vec::with_capacity(CARDS_PER_HAND);
    for code in codes {
        let card: Card = code.parse().map_err(|e| format!("{}", e))?;
        if !seen.insert(card) {
            return Err(format!("duplicate card {}", card));
        }
        cards.push(card);
    }
    Hand::try_from(cards.as_slice()).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn accepts_one_through_ten_hands() {
        for n in 1..=10 {
            let args = parse_table_args("5", &n.to_string()).unwrap();
            assert_eq!(args.num_hands, n);
        }
    }

    #[test]
    fn rejects_out_of_range_hands() {
        assert!(parse_table_args("5", "0").is_err());
        assert!(parse_table_args("5", "11").is_err());
        assert!(parse_table_args("5", "-3").is_err());
        let msg = parse_table_args("5", "abc").unwrap_err();
        assert!(msg.contains("must be an integer"), "{}", msg);
    }

    #[test]
    fn other_hand_sizes_are_flagged() {
        let args = parse_table_args("7", "2").unwrap();
        assert!(args.hand_size_replaced);
        assert!(parse_table_args("-5", "2").is_err());
    }

    #[test]
    fn parses_five_distinct_cards() {
        let hand = parse_hand(&codes(&["AH", "td", "7c", "10s", "KS"])).unwrap();
        assert_eq!(hand.to_string(), "AH TD 7C TS KS");
    }

    #[test]
    fn rejects_bad_hands() {
        assert!(parse_hand(&codes(&["AH", "TD"])).is_err());
        assert!(parse_hand(&codes(&["AH", "TD", "7C", "TS", "ZZ"])).is_err());
        let msg = parse_hand(&codes(&["AH", "TD", "7C", "TS", "ah"])).unwrap_err();
        assert_eq!(msg, "duplicate card AH");
    }
}
