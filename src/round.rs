//! Baccarat hands, drawing rules, and round resolution.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::DealError;
use crate::shoe::Shoe;

fn total(cards: &[Card]) -> u8 {
    cards.iter().map(|card| card.point()).sum::<u8>() % 10
}

/// Which side of the table won a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// The player side.
    Player,
    /// The banker side.
    Banker,
}

impl Side {
    /// Returns the other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Player => Self::Banker,
            Self::Banker => Self::Player,
        }
    }
}

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Player total is higher.
    PlayerWin,
    /// Banker total is higher.
    BankerWin,
    /// Totals are equal.
    Tie,
}

impl Outcome {
    /// Returns the winning side, or `None` for a tie.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::PlayerWin => Some(Side::Player),
            Self::BankerWin => Some(Side::Banker),
            Self::Tie => None,
        }
    }
}

/// A two- or three-card baccarat hand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    fn new(first: Card, second: Card) -> Self {
        Self {
            cards: alloc::vec![first, second],
        }
    }

    fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the hand total (sum of points modulo 10).
    #[must_use]
    pub fn total(&self) -> u8 {
        total(&self.cards)
    }

    /// Returns the total of the first two cards.
    #[must_use]
    pub fn initial_total(&self) -> u8 {
        total(&self.cards[..2])
    }

    /// Returns the drawn third card, if any.
    #[must_use]
    pub fn third_card(&self) -> Option<Card> {
        self.cards.get(2).copied()
    }

    /// Returns whether the first two cards make a natural 8 or 9.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.initial_total() >= 8
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Returns whether the player draws a third card on the given total.
#[must_use]
pub const fn player_draws(player_total: u8) -> bool {
    player_total <= 5
}

/// Returns whether the banker draws after the player took a third card.
///
/// `player_third` is the point value of the player's third card.
///
/// ```
/// use bacrs::round::banker_draws;
///
/// assert!(!banker_draws(3, 8));
/// assert!(banker_draws(3, 9));
/// assert!(banker_draws(6, 7));
/// assert!(!banker_draws(6, 5));
/// ```
#[must_use]
pub const fn banker_draws(banker_total: u8, player_third: u8) -> bool {
    match banker_total {
        0..=2 => true,
        3 => player_third != 8,
        4 => matches!(player_third, 2..=7),
        5 => matches!(player_third, 4..=7),
        6 => matches!(player_third, 6 | 7),
        _ => false,
    }
}

/// A fully resolved round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Round {
    player: Hand,
    banker: Hand,
    outcome: Outcome,
}

impl Round {
    /// Deals and resolves one round from the shoe.
    ///
    /// Cards come off the shoe in the order player, player, banker, banker,
    /// then any third cards. A third card is skipped if the shoe runs dry.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than four cards remain.
    /// No cards are consumed in that case.
    pub fn deal(shoe: &mut Shoe) -> Result<Self, DealError> {
        if shoe.remaining() < 4 {
            return Err(DealError::NotEnoughCards);
        }

        let mut next = || shoe.draw().ok_or(DealError::NotEnoughCards);
        let mut player = Hand::new(next()?, next()?);
        let mut banker = Hand::new(next()?, next()?);

        if !player.is_natural() && !banker.is_natural() {
            let banker_total = banker.total();

            if player_draws(player.total()) {
                if let Some(third) = shoe.draw() {
                    player.add_card(third);

                    if banker_draws(banker_total, third.point()) {
                        if let Some(card) = shoe.draw() {
                            banker.add_card(card);
                        }
                    }
                }
            } else if banker_total <= 5 {
                // Player stood on 6 or 7.
                if let Some(card) = shoe.draw() {
                    banker.add_card(card);
                }
            }
        }

        let outcome = match player.total().cmp(&banker.total()) {
            core::cmp::Ordering::Greater => Outcome::PlayerWin,
            core::cmp::Ordering::Less => Outcome::BankerWin,
            core::cmp::Ordering::Equal => Outcome::Tie,
        };

        Ok(Self {
            player,
            banker,
            outcome,
        })
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the banker's hand.
    #[must_use]
    pub const fn banker(&self) -> &Hand {
        &self.banker
    }

    /// Returns the outcome of the round.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the number of cards the round consumed (4, 5, or 6).
    #[must_use]
    pub fn cards_used(&self) -> usize {
        self.player.len() + self.banker.len()
    }
}
