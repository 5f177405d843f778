//! Saturating run-length encoding of round outcomes.
//!
//! A streak code is a string of digits. Each digit is the length of one run
//! of consecutive wins by the same side. Ties are ignored: they neither start,
//! extend, nor break a run. Runs longer than nine are written as `9`, so a
//! run of nine and a run of fifteen produce the same digit.

extern crate alloc;

use alloc::string::String;

use crate::round::{Outcome, Side};

/// Largest run length a single digit can express.
pub const MAX_RUN: usize = 9;

fn push_run(code: &mut String, count: usize) {
    let digit = count.min(MAX_RUN) as u32;
    if let Some(c) = char::from_digit(digit, 10) {
        code.push(c);
    }
}

/// Encodes a sequence of round outcomes as a streak code.
///
/// ```
/// use bacrs::Outcome::{BankerWin, PlayerWin, Tie};
/// use bacrs::streak::encode;
///
/// assert_eq!(encode([PlayerWin, PlayerWin, Tie, PlayerWin, BankerWin]), "31");
/// assert_eq!(encode([Tie, Tie]), "");
/// ```
#[must_use]
pub fn encode<I>(outcomes: I) -> String
where
    I: IntoIterator<Item = Outcome>,
{
    let mut code = String::new();
    let mut current: Option<Side> = None;
    let mut count = 0;

    for side in outcomes.into_iter().filter_map(Outcome::side) {
        if current == Some(side) {
            count += 1;
        } else {
            if current.is_some() {
                push_run(&mut code, count);
            }
            current = Some(side);
            count = 1;
        }
    }

    if current.is_some() {
        push_run(&mut code, count);
    }

    code
}

/// Iterates over the run lengths in a code, skipping non-digit characters.
///
/// ```
/// use bacrs::streak::runs;
///
/// assert_eq!(runs("3x12").collect::<Vec<_>>(), [3, 1, 2]);
/// ```
pub fn runs(code: &str) -> impl Iterator<Item = u32> + '_ {
    code.chars().filter_map(|c| c.to_digit(10))
}

/// Returns whether the code is non-empty and made only of ASCII digits.
#[must_use]
pub fn is_code(record: &str) -> bool {
    !record.is_empty() && record.bytes().all(|b| b.is_ascii_digit())
}
