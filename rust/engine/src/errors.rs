use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot deal from an empty deck")]
    EmptyDeck,
    #[error("No card at index {index} (deck holds {len})")]
    OutOfRange { index: usize, len: usize },
    #[error("Player {player}'s hand is empty and cannot be replenished")]
    EmptyHand { player: usize },
}
