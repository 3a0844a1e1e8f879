use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid card: {value}")]
    InvalidCard { value: String },
    #[error("Insufficient cards: requested {requested}, available {available}")]
    InsufficientCards { requested: usize, available: usize },
    #[error("Invalid hand size: {len} cards (a hand holds exactly 5)")]
    InvalidHandSize { len: usize },
    #[error("Invalid player count: {count} (must be 1 through 10)")]
    InvalidPlayerCount { count: usize },
    #[error("Hands already dealt at this table")]
    HandsAlreadyDealt,
}
