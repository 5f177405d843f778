//! Drives rounds across one shoe and across batches of shoes.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicBool, Ordering};

use rand::Rng;
use tracing::{debug, info};

use crate::options::ShoeOptions;
use crate::round::{Outcome, Round};
use crate::shoe::{Burn, Shoe};
use crate::streak;

/// The rounds played from one shoe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoeSession {
    /// The burn phase, if one ran and the shoe was not empty.
    pub burn: Option<Burn>,
    /// Cards held back behind the cut card.
    pub reserve: usize,
    /// Index of the cut card from the start of the shoe.
    pub cut_index: usize,
    /// Rounds in play order.
    pub rounds: Vec<Round>,
}

impl ShoeSession {
    /// Returns the outcomes of every round in order.
    pub fn outcomes(&self) -> impl Iterator<Item = Outcome> + '_ {
        self.rounds.iter().map(Round::outcome)
    }

    /// Returns the number of cards dealt into rounds.
    #[must_use]
    pub fn cards_played(&self) -> usize {
        self.rounds.iter().map(Round::cards_used).sum()
    }

    /// Encodes the session as a streak code.
    #[must_use]
    pub fn code(&self) -> String {
        streak::encode(self.outcomes())
    }
}

/// Plays one shoe until the cut card or until the shoe runs dry.
///
/// The cut card is placed a uniformly random number of cards from the end,
/// within the configured reserve range. After the burn phase, rounds are
/// dealt while fewer than `cut_index - 4` cards have gone into play.
/// Reserve bounds given in reverse order are swapped.
#[must_use]
pub fn run_shoe<R: Rng + ?Sized>(
    mut shoe: Shoe,
    options: &ShoeOptions,
    rng: &mut R,
) -> ShoeSession {
    let (min, max) = (options.cut_reserve_min, options.cut_reserve_max);
    let reserve = rng.random_range(min.min(max)..=min.max(max));
    let cut_index = shoe.len().saturating_sub(reserve);
    let limit = cut_index.saturating_sub(4);

    let burn = if options.burn { shoe.burn() } else { None };

    let mut rounds = Vec::new();
    let mut used = 0;
    while used < limit {
        let Ok(round) = Round::deal(&mut shoe) else {
            break;
        };
        used += round.cards_used();
        rounds.push(round);
    }

    let session = ShoeSession {
        burn,
        reserve,
        cut_index,
        rounds,
    };

    debug!(
        burned = session.burn.as_ref().map_or(0, Burn::total),
        cut_index,
        rounds = session.rounds.len(),
        remaining = shoe.remaining(),
        "Shoe finished"
    );

    session
}

/// Builds, shuffles, and plays `count` independent shoes.
///
/// Returns one streak code per shoe. The `cancel` flag is checked before each
/// shoe; once it is set, the codes finished so far are returned.
#[must_use]
pub fn simulate_batch<R: Rng + ?Sized>(
    count: usize,
    options: &ShoeOptions,
    rng: &mut R,
    cancel: Option<&AtomicBool>,
) -> Vec<String> {
    let mut codes = Vec::with_capacity(count);

    for _ in 0..count {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            info!(requested = count, completed = codes.len(), "Batch cancelled");
            return codes;
        }

        let shoe = Shoe::new(options.decks, rng);
        codes.push(run_shoe(shoe, options, rng).code());
    }

    info!(requested = count, completed = codes.len(), "Batch finished");
    codes
}
