//! Hand evaluation and the hand container shared by player and dealer.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Highest value a hand can have without busting.
pub const BLACKJACK: u8 = 21;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces = aces.saturating_add(1);
        }
        value = value.saturating_add(card.points());
    }

    // Promote aces from 1 to 11 while the total leaves room for it.
    let mut promoted = false;
    while aces > 0 && value <= 11 {
        value += 10;
        aces -= 1;
        promoted = true;
    }

    (value, promoted && value <= BLACKJACK)
}

/// Calculates the blackjack value of `cards`.
///
/// Face cards count 10, aces count 1 or 11 (whichever helps), everything
/// else its rank. The result is not clamped, so a busted hand returns its
/// full total.
///
/// ```
/// use bjterm::{Card, Suit, hand};
///
/// let cards = [Card::new(Suit::Spades, 1), Card::new(Suit::Hearts, 13)];
/// assert_eq!(hand::value(&cards), 21);
/// ```
#[must_use]
pub fn value(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether `cards` contain an ace counted as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// A hand of cards held by the player or the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in the order they were dealt.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt, the one the dealer shows face up.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        value(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
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

impl Extend<Card> for Hand {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
