//! Multi-deck shoe with a monotonically advancing draw cursor.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};

/// Cards discarded before play begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Burn {
    /// The turned burn card.
    pub card: Card,
    /// Cards discarded face down after the burn card.
    pub discarded: Vec<Card>,
}

impl Burn {
    /// Returns how many cards the burn card calls for.
    ///
    /// This is the burn card's point value, with zero counted as ten.
    #[must_use]
    pub const fn count(&self) -> usize {
        burn_count(self.card)
    }

    /// Returns the total number of cards removed, including the burn card.
    #[must_use]
    pub fn total(&self) -> usize {
        1 + self.discarded.len()
    }
}

const fn burn_count(card: Card) -> usize {
    match card.point() {
        0 => 10,
        v => v as usize,
    }
}

/// A shuffled shoe.
///
/// Cards are never removed from the backing storage. Drawing advances a
/// cursor, so the number of cards left is a subtraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    cards: Vec<Card>,
    cursor: usize,
}

impl Shoe {
    /// Builds and shuffles a shoe with the specified number of decks.
    pub fn new<R: Rng + ?Sized>(decks: u8, rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        // Fisher-Yates from the last index down, swapping with 0..=i.
        cards.shuffle(rng);
        Self::from_cards(cards)
    }

    /// Creates a shoe that deals the given cards in order, first card first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards, cursor: 0 }
    }

    /// Draws the next card.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(card)
    }

    /// Turns the burn card and discards as many cards as it calls for.
    ///
    /// Returns `None` if the shoe is empty. If fewer cards remain than the
    /// burn card calls for, every remaining card is discarded.
    pub fn burn(&mut self) -> Option<Burn> {
        let card = self.draw()?;
        let take = burn_count(card).min(self.remaining());
        let discarded = self.cards[self.cursor..self.cursor + take].to_vec();
        self.cursor += take;
        Some(Burn { card, discarded })
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// Returns the number of cards drawn so far.
    #[must_use]
    pub const fn drawn(&self) -> usize {
        self.cursor
    }

    /// Returns the total number of cards in the shoe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe holds no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards in dealing order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
