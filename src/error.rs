//! Error types for simulation, search, and betting operations.

use thiserror::Error;

/// Errors that can occur when dealing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Fewer than four cards remain in the shoe.
    #[error("not enough cards in the shoe")]
    NotEnoughCards,
}

/// Errors that can occur when configuring a betting evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Capital is zero or negative.
    #[error("capital must be greater than zero")]
    InvalidCapital,
    /// Bet amount is zero or negative.
    #[error("bet amount must be greater than zero")]
    InvalidBet,
    /// Input could not be parsed as an integer.
    #[error("input is not a number")]
    NotANumber,
}

/// Errors that can occur during a pattern search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The query is empty.
    #[error("search query is empty")]
    EmptyQuery,
}
