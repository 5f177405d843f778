//! Replays streak codes against wagering strategies.
//!
//! Each digit of a code is one run of rounds won by the same side, and
//! consecutive runs alternate sides. A coin flip per code decides whether the
//! bettor's side won the first run.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use rand::Rng;
use tracing::info;

use crate::error::BetError;
use crate::streak;

/// Wagering strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// The same stake every round.
    FlatBet,
    /// Double the stake after a loss, reset to the base bet after a win.
    Martingale,
}

/// Validated inputs for a betting evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BettingOptions {
    capital: i64,
    bet: i64,
    strategy: Strategy,
}

impl BettingOptions {
    /// Creates betting options.
    ///
    /// `bet` is the flat stake or the martingale base bet.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::InvalidCapital`] or [`BetError::InvalidBet`] if
    /// either amount is zero or negative.
    pub const fn new(capital: i64, bet: i64, strategy: Strategy) -> Result<Self, BetError> {
        if capital <= 0 {
            return Err(BetError::InvalidCapital);
        }
        if bet <= 0 {
            return Err(BetError::InvalidBet);
        }
        Ok(Self {
            capital,
            bet,
            strategy,
        })
    }

    /// Parses capital and bet from raw text.
    ///
    /// ```
    /// use bacrs::{BetError, BettingOptions, Strategy};
    ///
    /// let options = BettingOptions::parse(" 1000", "10 ", Strategy::FlatBet).unwrap();
    /// assert_eq!(options.capital(), 1000);
    ///
    /// let err = BettingOptions::parse("abc", "10", Strategy::FlatBet).unwrap_err();
    /// assert_eq!(err, BetError::NotANumber);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`BetError::NotANumber`] if either input is not an integer,
    /// otherwise the same errors as [`BettingOptions::new`].
    pub fn parse(capital: &str, bet: &str, strategy: Strategy) -> Result<Self, BetError> {
        let capital = capital.trim().parse().map_err(|_| BetError::NotANumber)?;
        let bet = bet.trim().parse().map_err(|_| BetError::NotANumber)?;
        Self::new(capital, bet, strategy)
    }

    /// Returns the starting capital.
    #[must_use]
    pub const fn capital(&self) -> i64 {
        self.capital
    }

    /// Returns the flat stake or martingale base bet.
    #[must_use]
    pub const fn bet(&self) -> i64 {
        self.bet
    }

    /// Returns the strategy.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }
}

/// Final standing of one replayed code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Classification {
    /// Balance ended above the starting capital.
    Profit,
    /// Balance ended above zero but not above the starting capital.
    LossNotBroke,
    /// Balance ended at zero.
    Broke,
}

impl Classification {
    const fn of(balance: i64, capital: i64) -> Self {
        if balance > capital {
            Self::Profit
        } else if balance > 0 {
            Self::LossNotBroke
        } else {
            Self::Broke
        }
    }
}

/// Label for the best profit relative to capital.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProfitBucket {
    /// Final amount is at least twice the capital.
    VeryHigh,
    /// Final amount is at least 1.618 times the capital.
    High,
    /// Final amount is at least the capital.
    Medium,
    /// Anything lower.
    LowOrLoss,
}

impl ProfitBucket {
    /// Buckets `final_amount / capital`.
    ///
    /// ```
    /// use bacrs::ProfitBucket;
    ///
    /// assert_eq!(ProfitBucket::from_amounts(1000, 1090), ProfitBucket::Medium);
    /// assert_eq!(ProfitBucket::from_amounts(1000, 1618), ProfitBucket::High);
    /// assert_eq!(ProfitBucket::from_amounts(1000, 2000), ProfitBucket::VeryHigh);
    /// ```
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for monetary ratios"
    )]
    pub fn from_amounts(capital: i64, final_amount: i64) -> Self {
        let ratio = final_amount as f64 / capital as f64;

        if ratio >= 2.0 {
            Self::VeryHigh
        } else if ratio >= 1.618 {
            Self::High
        } else if ratio >= 1.0 {
            Self::Medium
        } else {
            Self::LowOrLoss
        }
    }

    /// Returns the bucket's label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryHigh => "very high",
            Self::High => "high",
            Self::Medium => "medium",
            Self::LowOrLoss => "low or loss",
        }
    }
}

/// Result of replaying one code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodeOutcome {
    /// The replayed code.
    pub code: String,
    /// Whether the bettor's side won the first run.
    pub bettor_wins_first: bool,
    /// Balance after the last simulated round.
    pub balance: i64,
    /// `balance - capital`.
    pub profit: i64,
    /// Final standing.
    pub classification: Classification,
    /// Whether the replay stopped because the stake exceeded the balance.
    pub bankroll_exhausted: bool,
}

/// The most profitable code in an evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestResult {
    /// Profit over the starting capital.
    pub profit: i64,
    /// The code that produced it.
    pub code: String,
}

/// Aggregate result of replaying a corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BettingReport {
    /// Starting capital for every code.
    pub capital: i64,
    /// Strategy used.
    pub strategy: Strategy,
    /// Per-code results in corpus order.
    pub outcomes: Vec<CodeOutcome>,
    /// Codes that ended in profit.
    pub profit: usize,
    /// Codes that lost money without going broke.
    pub loss_not_broke: usize,
    /// Codes that went broke.
    pub broke: usize,
    /// Highest profit among profitable codes; the first code wins ties.
    pub best: Option<BestResult>,
}

impl BettingReport {
    /// Returns the number of codes replayed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Buckets the best profit, or [`ProfitBucket::LowOrLoss`] if no code
    /// made a profit.
    #[must_use]
    pub fn bucket(&self) -> ProfitBucket {
        self.best.as_ref().map_or(ProfitBucket::LowOrLoss, |best| {
            ProfitBucket::from_amounts(
                self.capital,
                self.capital.saturating_add(best.profit),
            )
        })
    }
}

/// Returns whether the bettor's side won the run at `run_index`.
///
/// Even runs belong to the first run's winner, odd runs to the other side.
#[must_use]
pub const fn bettor_wins_run(run_index: usize, bettor_wins_first: bool) -> bool {
    (run_index % 2 == 0) == bettor_wins_first
}

/// Replays one code with a fixed first-run result.
///
/// ```
/// use bacrs::{BettingOptions, Classification, Strategy};
/// use bacrs::betting::simulate_code;
///
/// let options = BettingOptions::new(1000, 10, Strategy::FlatBet).unwrap();
/// let outcome = simulate_code(&options, "9", true);
/// assert_eq!(outcome.balance, 1090);
/// assert_eq!(outcome.classification, Classification::Profit);
/// ```
#[must_use]
pub fn simulate_code(
    options: &BettingOptions,
    code: &str,
    bettor_wins_first: bool,
) -> CodeOutcome {
    let mut balance = options.capital;
    let mut stake = options.bet;
    let mut bankroll_exhausted = false;

    'runs: for (run_index, rounds) in streak::runs(code).enumerate() {
        let wins = bettor_wins_run(run_index, bettor_wins_first);

        for _ in 0..rounds {
            if balance < stake {
                bankroll_exhausted = true;
                break 'runs;
            }

            if wins {
                balance = balance.saturating_add(stake);
                if options.strategy == Strategy::Martingale {
                    stake = options.bet;
                }
            } else {
                balance -= stake;
                if options.strategy == Strategy::Martingale {
                    stake = stake.saturating_mul(2);
                }
            }
        }
    }

    CodeOutcome {
        code: code.into(),
        bettor_wins_first,
        balance,
        profit: balance - options.capital,
        classification: Classification::of(balance, options.capital),
        bankroll_exhausted,
    }
}

/// Replays every code, asking `coin` for each code's first-run result.
#[must_use]
pub fn evaluate_with<S, F>(options: &BettingOptions, corpus: &[S], mut coin: F) -> BettingReport
where
    S: AsRef<str>,
    F: FnMut() -> bool,
{
    let mut report = BettingReport {
        capital: options.capital,
        strategy: options.strategy,
        outcomes: Vec::with_capacity(corpus.len()),
        profit: 0,
        loss_not_broke: 0,
        broke: 0,
        best: None,
    };

    for code in corpus {
        let outcome = simulate_code(options, code.as_ref(), coin());

        match outcome.classification {
            Classification::Profit => {
                report.profit += 1;
                if report.best.as_ref().is_none_or(|best| outcome.profit > best.profit) {
                    report.best = Some(BestResult {
                        profit: outcome.profit,
                        code: outcome.code.clone(),
                    });
                }
            }
            Classification::LossNotBroke => report.loss_not_broke += 1,
            Classification::Broke => report.broke += 1,
        }

        report.outcomes.push(outcome);
    }

    info!(
        strategy = ?options.strategy,
        total = report.total(),
        profit = report.profit,
        loss_not_broke = report.loss_not_broke,
        broke = report.broke,
        best = report.best.as_ref().map(|best| best.profit),
        "Betting evaluation finished"
    );

    report
}

/// Replays every code with an independent fair coin flip per code.
#[must_use]
pub fn evaluate<S, R>(options: &BettingOptions, corpus: &[S], rng: &mut R) -> BettingReport
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    evaluate_with(options, corpus, || rng.random_bool(0.5))
}
