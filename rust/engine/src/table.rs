use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::deck::{deal, Deck};
use crate::errors::EngineError;
use crate::hand::{classify, Hand, HandRank};
use crate::showdown::{showdown, Showdown};

const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

/// A single stud poker table: one deck, up to ten five-card hands, and the
/// seeded RNG that drives every shuffle.
///
/// # Examples
///
/// ```
/// use studpoker_engine::table::Table;
///
/// let mut table = Table::new(Some(12345));
/// table.shuffle();
/// table.deal(4).unwrap();
/// let showdown = table.showdown().unwrap();
/// assert_eq!(showdown.ranks.len(), 4);
/// assert!(!showdown.winners.is_empty());
/// ```
#[derive(Debug)]
pub struct Table {
    /// Seed the RNG was created from
    seed: u64,
    /// The deck hands are dealt from
    deck: Deck,
    /// Dealt hands, by seat; empty until `deal` succeeds
    hands: Vec<Hand>,
    rng: ChaCha20Rng,
}

impl Table {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or(DEFAULT_SEED);
        Self {
            seed,
            deck: Deck::new(),
            hands: Vec::new(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn shuffle(&mut self) {
        self.deck.shuffle(&mut self.rng);
    }

    /// Deals `num_hands` hands from the top of the deck. On failure no hand
    /// is dealt and the deck is unchanged.
    pub fn deal(&mut self, num_hands: usize) -> Result<&[Hand], EngineError> {
        if !self.hands.is_empty() {
            return Err(EngineError::HandsAlreadyDealt);
        }
        self.hands = deal(&mut self.deck, num_hands)?;
        Ok(&self.hands)
    }

    pub fn sort_hands(&mut self) {
        for hand in &mut self.hands {
            hand.sort();
        }
    }

    /// Rank of every dealt hand. Classifying leaves each hand sorted.
    pub fn ranks(&mut self) -> Vec<HandRank> {
        self.hands.iter_mut().map(classify).collect()
    }

    pub fn showdown(&mut self) -> Result<Showdown, EngineError> {
        showdown(&mut self.hands)
    }

    /// Collects every card back into a fresh, unshuffled deck. The RNG keeps
    /// its state, so the next shuffle differs from the previous one.
    pub fn reset(&mut self) {
        self.deck.reset();
        self.hands.clear();
        debug!(seed = self.seed, "table reset");
    }
}
