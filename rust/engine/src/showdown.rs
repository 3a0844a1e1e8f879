use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::deck::{MAX_PLAYERS, MIN_PLAYERS};
use crate::errors::EngineError;
use crate::hand::{classify, Hand, HandRank};

/// Outcome of comparing every hand at the table.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Showdown {
    /// Rank of each hand, by seat
    pub ranks: Vec<HandRank>,
    /// Highest rank at the table
    pub best: HandRank,
    /// Seats holding the highest rank, ascending; ties all win
    pub winners: Vec<usize>,
}

impl Showdown {
    pub fn is_winner(&self, seat: usize) -> bool {
        self.winners.binary_search(&seat).is_ok()
    }

    pub fn is_split(&self) -> bool {
        self.winners.len() > 1
    }
}

/// Classifies every hand (sorting each in place) and collects the seats
/// whose rank equals the table maximum.
pub fn showdown(hands: &mut [Hand]) -> Result<Showdown, EngineError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&hands.len()) {
        return Err(EngineError::InvalidPlayerCount { count: hands.len() });
    }
    let ranks: Vec<HandRank> = hands.iter_mut().map(classify).collect();
    let best = ranks
        .iter()
        .copied()
        .max()
        .ok_or(EngineError::InvalidPlayerCount { count: 0 })?;
    let winners: Vec<usize> = ranks
        .iter()
        .enumerate()
        .filter(|&(_, &r)| r == best)
        .map(|(seat, _)| seat)
        .collect();
    debug!(best = %best, winners = ?winners, "showdown resolved");
    Ok(Showdown {
        ranks,
        best,
        winners,
    })
}

/// Winning seat indices; every seat tied at the top rank is included.
pub fn resolve(hands: &mut [Hand]) -> Result<BTreeSet<usize>, EngineError> {
    showdown(hands).map(|s| s.winners.into_iter().collect())
}
