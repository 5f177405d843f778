//! Shoe and search configuration options.

use crate::card::DEFAULT_DECKS;

/// Default number of shoes simulated per batch.
pub const DEFAULT_BATCH_SIZE: usize = 500;

/// Default number of characters captured after a search match.
pub const WINDOW_LEN: usize = 12;

/// Configuration options for shoe simulation.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bacrs::ShoeOptions;
///
/// let options = ShoeOptions::default()
///     .with_decks(6)
///     .with_cut_reserve(60, 80)
///     .with_burn(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoeOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Smallest number of cards held back behind the cut card.
    pub cut_reserve_min: usize,
    /// Largest number of cards held back behind the cut card.
    pub cut_reserve_max: usize,
    /// Whether a burn card is turned and discarded before play.
    pub burn: bool,
    /// Continuation window length for pattern search.
    pub window: usize,
}

impl Default for ShoeOptions {
    fn default() -> Self {
        Self {
            decks: DEFAULT_DECKS,
            cut_reserve_min: 90,
            cut_reserve_max: 110,
            burn: true,
            window: WINDOW_LEN,
        }
    }
}

impl ShoeOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bacrs::ShoeOptions;
    ///
    /// let options = ShoeOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the inclusive range of cards held back behind the cut card.
    ///
    /// Bounds given in reverse order are swapped.
    ///
    /// # Example
    ///
    /// ```
    /// use bacrs::ShoeOptions;
    ///
    /// let options = ShoeOptions::default().with_cut_reserve(120, 100);
    /// assert_eq!(options.cut_reserve_min, 100);
    /// assert_eq!(options.cut_reserve_max, 120);
    /// ```
    #[must_use]
    pub const fn with_cut_reserve(mut self, min: usize, max: usize) -> Self {
        if min <= max {
            self.cut_reserve_min = min;
            self.cut_reserve_max = max;
        } else {
            self.cut_reserve_min = max;
            self.cut_reserve_max = min;
        }
        self
    }

    /// Sets whether the burn phase runs before play.
    ///
    /// # Example
    ///
    /// ```
    /// use bacrs::ShoeOptions;
    ///
    /// let options = ShoeOptions::default().with_burn(false);
    /// assert!(!options.burn);
    /// ```
    #[must_use]
    pub const fn with_burn(mut self, burn: bool) -> Self {
        self.burn = burn;
        self
    }

    /// Sets the continuation window length used by pattern search.
    ///
    /// # Example
    ///
    /// ```
    /// use bacrs::ShoeOptions;
    ///
    /// let options = ShoeOptions::default().with_window(6);
    /// assert_eq!(options.window, 6);
    /// ```
    #[must_use]
    pub const fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }
}
