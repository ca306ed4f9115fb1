//! A single 52-card deck dealt from the top.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};

/// An ordered deck of cards. The front of the sequence is the top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a freshly built, unshuffled deck.
    #[must_use]
    pub fn standard() -> Self {
        let mut deck = Self::new();
        deck.build();
        deck
    }

    /// Resets the deck to one of each of the 52 cards.
    ///
    /// Cards are ordered suit-major ([`Suit::ALL`] order), rank ascending.
    /// Any previous contents are discarded.
    pub fn build(&mut self) {
        self.cards.clear();
        self.cards.reserve(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                self.cards.push(Card::new(suit, rank));
            }
        }
    }

    /// Shuffles the remaining cards in place (Fisher-Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        log::trace!("shuffled {} cards", self.cards.len());
    }

    /// Removes and returns the top `n` cards.
    ///
    /// If fewer than `n` cards remain, all remaining cards are returned.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        let n = n.min(self.cards.len());
        self.cards.drain(..n).collect()
    }

    /// Removes and returns the top card, if any.
    pub fn deal_one(&mut self) -> Option<Card> {
        self.deal(1).pop()
    }

    /// Returns the remaining cards, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Card>> for Deck {
    /// Creates a deck holding `cards` in order, first element on top.
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
