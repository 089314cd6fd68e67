use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Insufficient coins for action")]
    InsufficientCoins,
    #[error("It's not seat {actual}'s turn (expected seat {expected})")]
    NotSeatsTurn { expected: usize, actual: usize },
    #[error("Blind bet is not available after seeing cards")]
    BlindAfterSeen,
    #[error("Deck exhausted while dealing")]
    DeckExhausted,
}
