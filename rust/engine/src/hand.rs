use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::cards::{Card, Rank, Suit};
use crate::errors::EngineError;

pub const CARDS_PER_HAND: usize = 5;
pub const NUM_OF_HAND_RANKS: usize = 9;

const HAND_RANK_NAMES: [&str; NUM_OF_HAND_RANKS] = [
    "High Card",
    "One Pair",
    "Two Pairs",
    "Three of a Kind",
    "Straight",
    "Flush",
    "Full House",
    "Four of a Kind",
    "Straight Flush",
];

/// Category of a five-card hand, weakest first.
///
/// Categories are a pure ordinal: two hands in the same category compare
/// equal regardless of their cards.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HandRank {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandRank {
    pub fn all() -> [HandRank; NUM_OF_HAND_RANKS] {
        [
            HandRank::HighCard,
            HandRank::Pair,
            HandRank::TwoPair,
            HandRank::ThreeOfAKind,
            HandRank::Straight,
            HandRank::Flush,
            HandRank::FullHouse,
            HandRank::FourOfAKind,
            HandRank::StraightFlush,
        ]
    }

    /// Display name, e.g. "Full House".
    pub fn name(self) -> &'static str {
        HAND_RANK_NAMES[self as usize]
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Five cards owned by one player seat.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Hand([Card; CARDS_PER_HAND]);

impl Hand {
    pub const fn new(cards: [Card; CARDS_PER_HAND]) -> Self {
        Self(cards)
    }

    pub fn cards(&self) -> &[Card; CARDS_PER_HAND] {
        &self.0
    }

    /// Stable ascending sort by rank; cards of equal rank keep their order.
    pub fn sort(&mut self) {
        self.0.sort_by(Card::cmp_by_rank);
    }

    pub fn is_sorted(&self) -> bool {
        self.0.windows(2).all(|w| w[0].rank <= w[1].rank)
    }

    /// Sorts the hand, then classifies it.
    pub fn classify(&mut self) -> HandRank {
        classify(self)
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = EngineError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let arr: [Card; CARDS_PER_HAND] = cards
            .try_into()
            .map_err(|_| EngineError::InvalidHandSize { len: cards.len() })?;
        Ok(Hand(arr))
    }
}

impl From<[Card; CARDS_PER_HAND]> for Hand {
    fn from(cards: [Card; CARDS_PER_HAND]) -> Self {
        Hand(cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Classifies a hand into its [`HandRank`].
///
/// The hand is sorted by rank first and stays sorted afterwards. Categories
/// are tested strongest first and the first match wins.
///
/// ```
/// use studpoker_engine::cards::{Card, Rank, Suit};
/// use studpoker_engine::hand::{classify, Hand, HandRank};
///
/// let mut hand = Hand::new([
///     Card::new(Rank::King, Suit::Spades),
///     Card::new(Rank::Ten, Suit::Spades),
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::Queen, Suit::Spades),
///     Card::new(Rank::Jack, Suit::Spades),
/// ]);
/// assert_eq!(classify(&mut hand), HandRank::StraightFlush);
/// assert_eq!(hand.cards()[0].rank, Rank::Ace);
/// ```
pub fn classify(hand: &mut Hand) -> HandRank {
    hand.sort();
    let sorted = Sorted::new(hand.cards());
    let rank = if sorted.is_straight_flush() {
        HandRank::StraightFlush
    } else if sorted.is_four_of_a_kind() {
        HandRank::FourOfAKind
    } else if sorted.is_full_house() {
        HandRank::FullHouse
    } else if sorted.is_flush() {
        HandRank::Flush
    } else if sorted.is_straight() {
        HandRank::Straight
    } else if sorted.is_three_of_a_kind() {
        HandRank::ThreeOfAKind
    } else if sorted.is_two_pair() {
        HandRank::TwoPair
    } else if sorted.is_pair() {
        HandRank::Pair
    } else {
        HandRank::HighCard
    };
    trace!(hand = %hand, rank = %rank, "hand classified");
    rank
}

/// Classifies a copy of `cards`, leaving the caller's order alone.
pub fn rank_cards(cards: &[Card]) -> Result<HandRank, EngineError> {
    let mut hand = Hand::try_from(cards)?;
    Ok(classify(&mut hand))
}

/// Ranks and suits of a hand already sorted by rank.
struct Sorted {
    ranks: [u8; CARDS_PER_HAND],
    suits: [Suit; CARDS_PER_HAND],
}

impl Sorted {
    fn new(cards: &[Card; CARDS_PER_HAND]) -> Self {
        Self {
            ranks: cards.map(|c| c.rank.index()),
            suits: cards.map(|c| c.suit),
        }
    }

    fn same_suit(&self) -> bool {
        self.suits.iter().all(|&s| s == self.suits[0])
    }

    fn consecutive(&self) -> bool {
        self.ranks
            .iter()
            .enumerate()
            .all(|(i, &r)| r == self.ranks[0] + i as u8)
    }

    /// Ten through King with the Ace sorted to the front.
    fn ace_high_run(&self) -> bool {
        self.ranks
            == [
                Rank::Ace.index(),
                Rank::Ten.index(),
                Rank::Jack.index(),
                Rank::Queen.index(),
                Rank::King.index(),
            ]
    }

    /// Lengths of the runs of equal rank, in sorted order.
    fn groups(&self) -> Vec<usize> {
        let mut runs = vec![1];
        for w in self.ranks.windows(2) {
            match runs.last_mut() {
                Some(n) if w[0] == w[1] => *n += 1,
                _ => runs.push(1),
            }
        }
        runs
    }

    fn is_straight_flush(&self) -> bool {
        self.same_suit() && (self.consecutive() || self.ace_high_run())
    }

    fn is_four_of_a_kind(&self) -> bool {
        self.groups().contains(&4)
    }

    fn is_full_house(&self) -> bool {
        matches!(self.groups().as_slice(), [3, 2] | [2, 3])
    }

    fn is_flush(&self) -> bool {
        self.same_suit()
    }

    // No Ace-high wraparound here: only the straight flush knows about it.
    fn is_straight(&self) -> bool {
        self.consecutive()
    }

    fn is_three_of_a_kind(&self) -> bool {
        self.ranks.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
    }

    fn is_two_pair(&self) -> bool {
        self.groups().iter().filter(|&&n| n == 2).count() == 2
    }

    fn is_pair(&self) -> bool {
        self.ranks.windows(2).any(|w| w[0] == w[1])
    }
}

/// Nine fixed hands, one per category from High Card up to Straight Flush.
pub fn reference_hands() -> [Hand; NUM_OF_HAND_RANKS] {
    use Rank::*;
    use Suit::*;
    let h = |cards: [(Rank, Suit); CARDS_PER_HAND]| Hand(cards.map(|(r, s)| Card::new(r, s)));
    [
        h([(Two, Diamonds), (Three, Clubs), (Four, Diamonds), (Six, Spades), (Queen, Hearts)]),
        h([(Four, Hearts), (Five, Hearts), (Five, Diamonds), (Seven, Hearts), (Ten, Spades)]),
        h([(Three, Diamonds), (Three, Hearts), (Ten, Clubs), (Ten, Diamonds), (Queen, Clubs)]),
        h([(Three, Diamonds), (Three, Hearts), (Three, Spades), (Ten, Diamonds), (Queen, Clubs)]),
        h([(Ace, Spades), (Two, Diamonds), (Three, Clubs), (Four, Diamonds), (Five, Diamonds)]),
        h([(Two, Clubs), (Three, Clubs), (Four, Clubs), (Five, Clubs), (Queen, Clubs)]),
        h([(Three, Diamonds), (Three, Hearts), (Three, Spades), (Ten, Diamonds), (Ten, Clubs)]),
        h([(Three, Diamonds), (Three, Hearts), (Three, Spades), (Three, Clubs), (Queen, Clubs)]),
        h([(Ten, Diamonds), (Jack, Diamonds), (Queen, Diamonds), (King, Diamonds), (Ace, Diamonds)]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(r: Rank, s: Suit) -> Card {
        Card::new(r, s)
    }

    #[test]
    fn names_follow_rank_order() {
        let names: Vec<&str> = HandRank::all().iter().map(|r| r.name()).collect();
        assert_eq!(names, HAND_RANK_NAMES);
        assert_eq!(HandRank::TwoPair.to_string(), "Two Pairs");
    }

    #[test]
    fn sort_is_stable_by_rank() {
        let mut hand = Hand::new([
            c(Rank::Nine, Suit::Spades),
            c(Rank::Two, Suit::Hearts),
            c(Rank::Nine, Suit::Hearts),
            c(Rank::Ace, Suit::Clubs),
            c(Rank::Two, Suit::Diamonds),
        ]);
        hand.sort();
        assert_eq!(
            hand.cards(),
            &[
                c(Rank::Ace, Suit::Clubs),
                c(Rank::Two, Suit::Hearts),
                c(Rank::Two, Suit::Diamonds),
                c(Rank::Nine, Suit::Spades),
                c(Rank::Nine, Suit::Hearts),
            ]
        );
        assert!(hand.is_sorted());
    }

    #[test]
    fn groups_reports_runs() {
        let hand = Hand::new([
            c(Rank::Three, Suit::Diamonds),
            c(Rank::Three, Suit::Hearts),
            c(Rank::Three, Suit::Clubs),
            c(Rank::Ten, Suit::Diamonds),
            c(Rank::Ten, Suit::Clubs),
        ]);
        assert_eq!(Sorted::new(hand.cards()).groups(), vec![3, 2]);
    }

    #[test]
    fn wrong_size_is_rejected() {
        let cards = [c(Rank::Ace, Suit::Hearts); 4];
        assert_eq!(
            Hand::try_from(&cards[..]),
            Err(EngineError::InvalidHandSize { len: 4 })
        );
        assert_eq!(
            rank_cards(&[]),
            Err(EngineError::InvalidHandSize { len: 0 })
        );
    }

    #[test]
    fn rank_cards_does_not_reorder_input() {
        let cards = [
            c(Rank::King, Suit::Hearts),
            c(Rank::Two, Suit::Hearts),
            c(Rank::King, Suit::Clubs),
            c(Rank::Five, Suit::Spades),
            c(Rank::Seven, Suit::Diamonds),
        ];
        let before = cards;
        assert_eq!(rank_cards(&cards), Ok(HandRank::Pair));
        assert_eq!(cards, before);
    }

    #[test]
    fn reference_hands_cover_every_category() {
        for (mut hand, expected) in reference_hands().into_iter().zip(HandRank::all()) {
            assert_eq!(classify(&mut hand), expected, "hand {}", hand);
        }
    }

    #[test]
    fn display_joins_card_codes() {
        let hand = reference_hands()[8];
        assert_eq!(hand.to_string(), "TD JD QD KD AD");
    }
}
