use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

pub const STD_DECK_SIZE: usize = 52;
pub const NUM_OF_SUITS: usize = 4;
pub const NUM_OF_RANKS: usize = 13;

const RANK_SYMBOLS: [char; NUM_OF_RANKS] = [
    'A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K',
];
const SUIT_SYMBOLS: [char; NUM_OF_SUITS] = ['H', 'D', 'C', 'S'];

/// Represents one of the four suits of the French deck.
/// Suits carry no ordering: no suit outranks another.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts (♥)
    Hearts,
    /// Diamonds (♦)
    Diamonds,
    /// Clubs (♣)
    Clubs,
    /// Spades (♠)
    Spades,
}

impl Suit {
    pub fn index(self) -> usize {
        self as usize
    }

    /// One-letter symbol: H, D, C or S.
    pub fn symbol(self) -> char {
        SUIT_SYMBOLS[self.index()]
    }

    pub fn from_symbol(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'H' => Some(Suit::Hearts),
            'D' => Some(Suit::Diamonds),
            'C' => Some(Suit::Clubs),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Represents the face value of a card.
/// Ace is the lowest rank; it only counts above King inside the
/// Ten-to-Ace straight flush.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (0)
    Ace = 0,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (10)
    Jack,
    /// Queen (11)
    Queen,
    /// King (12)
    King,
}

impl Rank {
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(v: u8) -> Result<Rank, EngineError> {
        all_ranks()
            .get(v as usize)
            .copied()
            .ok_or_else(|| EngineError::InvalidCard {
                value: format!("rank index {}", v),
            })
    }

    /// One-letter symbol: A, 2-9, T, J, Q or K.
    pub fn symbol(self) -> char {
        RANK_SYMBOLS[self.index() as usize]
    }

    pub fn from_symbol(c: char) -> Option<Rank> {
        let upper = c.to_ascii_uppercase();
        RANK_SYMBOLS
            .iter()
            .position(|&s| s == upper)
            .map(|i| all_ranks()[i])
    }
}

/// A single playing card. Two cards are the same card iff both rank and
/// suit match; rank-only ordering is available through [`Card::cmp_by_rank`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Ace through King)
    pub rank: Rank,
    /// The suit of the card
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn cmp_by_rank(&self, other: &Card) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = EngineError;

    /// Parses codes such as `AH`, `td` or `10S`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidCard {
            value: s.to_string(),
        };
        let code = s.trim();
        let mut chars: Vec<char> = code.chars().collect();
        let suit_char = chars.pop().ok_or_else(invalid)?;
        let rank = match chars.as_slice() {
            ['1', '0'] => Rank::Ten,
            [c] => Rank::from_symbol(*c).ok_or_else(invalid)?,
            _ => return Err(invalid()),
        };
        let suit = Suit::from_symbol(suit_char).ok_or_else(invalid)?;
        Ok(Card::new(rank, suit))
    }
}

pub fn all_suits() -> [Suit; NUM_OF_SUITS] {
    [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades]
}

pub fn all_ranks() -> [Rank; NUM_OF_RANKS] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

/// The 52 canonical cards, rank-major: every suit of the Ace, then every
/// suit of the Two, and so on up to the King.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(STD_DECK_SIZE);
    for &r in &all_ranks() {
        for &s in &all_suits() {
            v.push(Card::new(r, s));
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_index_round_trips_through_from_index() {
        for r in all_ranks() {
            assert_eq!(Rank::from_index(r.index()), Ok(r));
        }
        assert!(matches!(
            Rank::from_index(13),
            Err(EngineError::InvalidCard { .. })
        ));
    }

    #[test]
    fn symbols_match_display_tables() {
        let ranks: String = all_ranks().iter().map(|r| r.symbol()).collect();
        assert_eq!(ranks, "A23456789TJQK");
        let suits: String = all_suits().iter().map(|s| s.symbol()).collect();
        assert_eq!(suits, "HDCS");
    }

    #[test]
    fn parses_card_codes() {
        assert_eq!("AH".parse::<Card>(), Ok(Card::new(Rank::Ace, Suit::Hearts)));
        assert_eq!("td".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Diamonds)));
        assert_eq!("10S".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Spades)));
        assert_eq!(" 7c ".parse::<Card>(), Ok(Card::new(Rank::Seven, Suit::Clubs)));
        for bad in ["", "A", "1H", "AX", "ZZ", "AHS"] {
            assert!(bad.parse::<Card>().is_err(), "{:?} should not parse", bad);
        }
    }

    #[test]
    fn display_uses_one_letter_symbols() {
        assert_eq!(Card::new(Rank::Queen, Suit::Spades).to_string(), "QS");
        assert_eq!(Card::new(Rank::Two, Suit::Clubs).to_string(), "2C");
    }

    #[test]
    fn cmp_by_rank_ignores_suit() {
        let a = Card::new(Rank::Five, Suit::Hearts);
        let b = Card::new(Rank::Five, Suit::Spades);
        let c = Card::new(Rank::King, Suit::Hearts);
        assert_eq!(a.cmp_by_rank(&b), Ordering::Equal);
        assert_ne!(a, b);
        assert_eq!(a.cmp_by_rank(&c), Ordering::Less);
        assert_eq!(
            Card::new(Rank::Ace, Suit::Clubs).cmp_by_rank(&Card::new(Rank::Two, Suit::Clubs)),
            Ordering::Less
        );
    }

    #[test]
    fn full_deck_is_rank_major() {
        let deck = full_deck();
        assert_eq!(deck.len(), STD_DECK_SIZE);
        assert_eq!(deck[0], Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(deck[3], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(deck[4], Card::new(Rank::Two, Suit::Hearts));
        assert_eq!(deck[51], Card::new(Rank::King, Suit::Spades));
    }
}
