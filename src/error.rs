//! Error types for parsing and dealing.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when parsing a single card token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Token is not exactly two characters long.
    #[error("card token must be 2 characters, got {0}")]
    InvalidLength(usize),
    /// Unrecognized rank character.
    #[error("invalid rank character {0:?}")]
    InvalidRank(char),
    /// Unrecognized suit character.
    #[error("invalid suit character {0:?}")]
    InvalidSuit(char),
    /// Numeric rank outside `2..=14`.
    #[error("rank {0} is out of range")]
    RankOutOfRange(u8),
}

/// Malformed hand content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The encoded hand is an empty string.
    #[error("encoded hand is empty")]
    Empty,
    /// The encoded hand does not hold exactly five tokens.
    #[error("hand must have 5 cards, got {0}")]
    WrongCardCount(usize),
    /// One of the tokens is not a valid card.
    #[error(transparent)]
    InvalidCard(#[from] CardError),
    /// The same card appears twice in one hand.
    #[error("duplicate card {0} in hand")]
    DuplicateInHand(Card),
}

/// Errors that can occur when parsing one or more hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// No input was supplied.
    #[error("no hand input")]
    NullInput,
    /// The input is not a well formed hand.
    #[error("invalid hand format: {0}")]
    InvalidFormat(#[from] FormatError),
    /// A card appears in more than one hand of a batch.
    #[error("card {0} appears in more than one hand")]
    DuplicateCard(Card),
}

impl From<CardError> for HandError {
    fn from(err: CardError) -> Self {
        Self::InvalidFormat(FormatError::InvalidCard(err))
    }
}

/// Errors that can occur when dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards left in the deck.
    #[error("not enough cards in the deck: need {needed}, have {remaining}")]
    NotEnoughCards {
        /// Cards required by the deal.
        needed: usize,
        /// Cards left in the deck.
        remaining: usize,
    },
}
