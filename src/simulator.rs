//! Seeded simulation front end.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::sync::atomic::AtomicBool;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::betting::{self, BettingOptions, BettingReport};
use crate::error::SearchError;
use crate::options::ShoeOptions;
use crate::runner::{self, ShoeSession};
use crate::search::{self, SearchResult};
use crate::shoe::Shoe;

/// A simulator that owns its options and a seeded random number generator.
///
/// Two simulators built with the same options and seed produce the same
/// shoes, codes, and coin flips.
#[derive(Debug, Clone)]
pub struct Simulator {
    /// Simulation options.
    pub options: ShoeOptions,
    rng: ChaCha8Rng,
}

impl Simulator {
    /// Creates a new simulator with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bacrs::{ShoeOptions, Simulator};
    ///
    /// let mut simulator = Simulator::new(ShoeOptions::default(), 42);
    /// let codes = simulator.simulate_batch(3, None);
    /// assert_eq!(codes.len(), 3);
    /// ```
    #[must_use]
    pub fn new(options: ShoeOptions, seed: u64) -> Self {
        Self {
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Builds and shuffles a fresh shoe.
    #[must_use]
    pub fn shoe(&mut self) -> Shoe {
        Shoe::new(self.options.decks, &mut self.rng)
    }

    /// Builds a fresh shoe and plays it to the cut card.
    #[must_use]
    pub fn run_shoe(&mut self) -> ShoeSession {
        let shoe = self.shoe();
        runner::run_shoe(shoe, &self.options, &mut self.rng)
    }

    /// Plays `count` shoes and returns their streak codes.
    ///
    /// See [`runner::simulate_batch`] for cancellation behavior.
    #[must_use]
    pub fn simulate_batch(&mut self, count: usize, cancel: Option<&AtomicBool>) -> Vec<String> {
        runner::simulate_batch(count, &self.options, &mut self.rng, cancel)
    }

    /// Searches a corpus using the configured window length.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyQuery`] if the query is empty.
    pub fn search<S: AsRef<str>>(
        &self,
        corpus: &[S],
        query: &str,
    ) -> Result<SearchResult, SearchError> {
        search::search_with_window(corpus, query, self.options.window)
    }

    /// Replays a corpus against a betting strategy.
    #[must_use]
    pub fn evaluate<S: AsRef<str>>(
        &mut self,
        options: &BettingOptions,
        corpus: &[S],
    ) -> BettingReport {
        betting::evaluate(options, corpus, &mut self.rng)
    }

    /// Returns the random number generator.
    pub const fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }
}
