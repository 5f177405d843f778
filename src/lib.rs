//! A baccarat shoe simulator with optional `no_std` support.
//!
//! The crate plays eight-deck shoes under fixed drawing rules, compresses
//! each shoe's winners into a run-length streak code, searches collections of
//! codes for recurring continuations, and replays codes against flat and
//! martingale betting.
//!
//! # Example
//!
//! ```
//! use bacrs::{BettingOptions, ShoeOptions, Simulator, Strategy};
//!
//! let mut simulator = Simulator::new(ShoeOptions::default(), 42);
//! let codes = simulator.simulate_batch(10, None);
//!
//! let options = BettingOptions::new(1000, 10, Strategy::Martingale).unwrap();
//! let report = simulator.evaluate(&options, &codes);
//! assert_eq!(report.total(), 10);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod betting;
pub mod card;
pub mod error;
pub mod history;
pub mod options;
pub mod round;
pub mod runner;
pub mod search;
pub mod shoe;
pub mod simulator;
pub mod streak;

// Re-export main types
pub use betting::{
    BestResult, BettingOptions, BettingReport, Classification, CodeOutcome, ProfitBucket, Strategy,
};
pub use card::{Card, DECK_SIZE, DEFAULT_DECKS, Suit};
pub use error::{BetError, DealError, SearchError};
pub use history::{History, HistoryStore};
pub use options::{DEFAULT_BATCH_SIZE, ShoeOptions, WINDOW_LEN};
pub use round::{Hand, Outcome, Round, Side};
pub use runner::{ShoeSession, run_shoe, simulate_batch};
pub use search::{SearchResult, WindowCount, search};
pub use shoe::{Burn, Shoe};
pub use simulator::Simulator;
