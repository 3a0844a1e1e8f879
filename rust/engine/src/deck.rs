use rand::Rng;
use tracing::debug;

use crate::cards::{full_deck, Card};
use crate::errors::EngineError;
use crate::hand::{Hand, CARDS_PER_HAND};

pub const MIN_PLAYERS: usize = 1;
pub const MAX_PLAYERS: usize = 10;

/// Source of uniformly distributed indices for the shuffler.
///
/// Every [`rand::Rng`] is an `IndexSource`, so a seeded `ChaCha20Rng`
/// reproduces a shuffle exactly. Tests may script their own sources.
pub trait IndexSource {
    /// Returns an index in `0..bound`. `bound` is never zero.
    fn index_below(&mut self, bound: usize) -> usize;
}

impl<R: Rng + ?Sized> IndexSource for R {
    fn index_below(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

/// Fisher-Yates shuffle, modern variant.
///
/// Walks the boundary from `items.len()` down to 1, swapping a uniformly
/// chosen element of the unshuffled prefix `[0, boundary)` into position
/// `boundary - 1`.
///
/// # Panics
///
/// Panics if `source` returns an index outside `[0, boundary)`.
pub fn fisher_yates<T, S>(items: &mut [T], source: &mut S)
where
    S: IndexSource + ?Sized,
{
    for boundary in (1..=items.len()).rev() {
        let picked = source.index_below(boundary);
        items.swap(picked, boundary - 1);
    }
}

/// A 52-card deck and the position of the next card to deal.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
/// use studpoker_engine::deck::{deal, Deck};
///
/// let mut deck = Deck::new();
/// deck.shuffle(&mut ChaCha20Rng::seed_from_u64(7));
/// let hands = deal(&mut deck, 3).unwrap();
/// assert_eq!(hands.len(), 3);
/// assert_eq!(deck.remaining(), 52 - 15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    pub fn new() -> Self {
        Self {
            cards: full_deck(),
            position: 0,
        }
    }

    /// Current order of all 52 cards, dealt ones included.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn undealt(&self) -> &[Card] {
        &self.cards[self.position..]
    }

    /// Shuffles the undealt cards in place.
    pub fn shuffle<S: IndexSource + ?Sized>(&mut self, source: &mut S) {
        fisher_yates(&mut self.cards[self.position..], source);
        debug!(remaining = self.remaining(), "deck shuffled");
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

/// Deals `num_hands` five-card hands in block order: the first five undealt
/// cards go to player 1, the next five to player 2, and so on.
///
/// Fails without touching the deck when the player count is outside
/// `1..=10` or the deck cannot supply every hand.
pub fn deal(deck: &mut Deck, num_hands: usize) -> Result<Vec<Hand>, EngineError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_hands) {
        return Err(EngineError::InvalidPlayerCount { count: num_hands });
    }
    let requested = num_hands * CARDS_PER_HAND;
    if deck.remaining() < requested {
        return Err(EngineError::InsufficientCards {
            requested,
            available: deck.remaining(),
        });
    }

    let hands: Vec<Hand> = deck.undealt()[..requested]
        .chunks_exact(CARDS_PER_HAND)
        .map(Hand::try_from)
        .collect::<Result<_, _>>()?;
    deck.position += requested;
    debug!(num_hands, remaining = deck.remaining(), "hands dealt");
    Ok(hands)
}
