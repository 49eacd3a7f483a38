use thiserror::Error;

use crate::player::ActionKind;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid amount for {kind:?} action: {amount:?} (must be a positive amount)")]
    InvalidActionAmount {
        kind: ActionKind,
        amount: Option<u32>,
    },
    #[error("Invalid bet amount: {amount}, minimum: {minimum}")]
    InvalidBetAmount { amount: u32, minimum: u32 },
    #[error("Bet amount {amount} exceeds the table limit of {maximum}")]
    BetExceedsLimit { amount: u32, maximum: u32 },
    #[error("Insufficient chips for action")]
    InsufficientChips,
    #[error("Unsupported game variant: {0:?}")]
    UnsupportedVariant(String),
    #[error("Unsupported betting structure: {0:?}")]
    UnsupportedBettingStructure(String),
    #[error("Invalid hand size for {variant}: expected {expected} hole cards, got {actual}")]
    InvalidHandSize {
        variant: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("Not enough cards to make a hand: need {needed}, got {actual}")]
    NotEnoughCards { needed: usize, actual: usize },
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
}
