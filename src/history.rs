//! History corpus and the persistence seam.
//!
//! The crate never loads or saves history itself. A [`HistoryStore`] owned by
//! the caller hands over a [`History`] value, and search and betting read it
//! through the corpus views below.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::convert::Infallible;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::streak;

/// Simulated streak codes and manually entered records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct History {
    /// Codes produced by shoe simulation.
    #[cfg_attr(feature = "serde", serde(rename = "BaccaratHistory", default))]
    pub simulation: Vec<String>,
    /// Records typed in by hand.
    #[cfg_attr(feature = "serde", serde(rename = "ManualHistory", default))]
    pub manual: Vec<String>,
}

/// Collects records in first-seen order, dropping repeats.
fn distinct<'a, I>(records: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(*record))
        .collect()
}

impl History {
    /// Creates a history from its two lists.
    #[must_use]
    pub const fn new(simulation: Vec<String>, manual: Vec<String>) -> Self {
        Self { simulation, manual }
    }

    /// Returns the simulation history without duplicates, in first-seen order.
    #[must_use]
    pub fn search_corpus(&self) -> Vec<&str> {
        distinct(self.simulation.iter().map(String::as_str))
    }

    /// Returns manual records made only of digits, without duplicates.
    #[must_use]
    pub fn manual_corpus(&self) -> Vec<&str> {
        distinct(self.manual_codes())
    }

    /// Returns the simulation history followed by digit-only manual records,
    /// without duplicates.
    #[must_use]
    pub fn betting_corpus(&self) -> Vec<&str> {
        distinct(
            self.simulation
                .iter()
                .map(String::as_str)
                .chain(self.manual_codes()),
        )
    }

    fn manual_codes(&self) -> impl Iterator<Item = &str> {
        self.manual
            .iter()
            .map(String::as_str)
            .filter(|record| streak::is_code(record))
    }
}

/// Storage for history, implemented by the caller.
pub trait HistoryStore {
    /// Error raised by the backing storage.
    type Error;

    /// Loads the stored history. A missing store yields an empty history.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the history cannot be read.
    fn load(&self) -> Result<History, Self::Error>;

    /// Appends simulated codes. Blank codes are skipped.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the codes cannot be written.
    fn append_simulated(&mut self, codes: &[String]) -> Result<(), Self::Error>;

    /// Appends one manual record. Blank or already stored records are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the record cannot be written.
    fn append_manual(&mut self, record: &str) -> Result<(), Self::Error>;
}

/// In-memory store.
impl HistoryStore for History {
    type Error = Infallible;

    fn load(&self) -> Result<History, Self::Error> {
        Ok(self.clone())
    }

    fn append_simulated(&mut self, codes: &[String]) -> Result<(), Self::Error> {
        self.simulation.extend(
            codes
                .iter()
                .filter(|code| !code.trim().is_empty())
                .cloned(),
        );
        Ok(())
    }

    fn append_manual(&mut self, record: &str) -> Result<(), Self::Error> {
        let record = record.trim();
        if !record.is_empty() && !self.manual.iter().any(|m| m == record) {
            self.manual.push(record.into());
        }
        Ok(())
    }
}
