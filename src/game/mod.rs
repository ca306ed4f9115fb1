//! Round engine and state management.

use rand::Rng;

use crate::deck::Deck;
use crate::hand::Hand;

mod actions;
mod dealer;
pub mod state;

pub use dealer::DEALER_STANDS_ON;
pub use state::RoundState;

/// Cards dealt to each party at the start of a round.
pub const STARTING_CARDS: usize = 2;

/// One round of blackjack between the player and the dealer.
///
/// The round owns its deck and both hands. It is created with the starting
/// hands already dealt and moves through [`RoundState`] as the player and
/// dealer act. Drive it with [`Round::hit`], [`Round::stand`],
/// [`Round::dealer_play`] and finally [`Round::showdown`].
///
/// # Example
///
/// ```
/// use bjterm::{Round, RoundState};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let mut round = Round::new(&mut rng);
/// assert_eq!(round.state(), RoundState::Dealt);
///
/// round.stand().unwrap();
/// round.dealer_play().unwrap();
/// let result = round.showdown(10.0).unwrap();
/// assert!(result.dealer_value >= 17);
/// ```
#[derive(Debug, Clone)]
pub struct Round {
    /// Cards not yet dealt.
    deck: Deck,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand. Fully known here; hiding the hole card is up to
    /// whoever displays it.
    dealer: Hand,
    /// Current round state.
    state: RoundState,
}

impl Round {
    /// Builds and shuffles a fresh deck, then deals the starting hands.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Deck::standard();
        deck.shuffle(rng);
        Self::from_deck(deck)
    }

    /// Deals the starting hands from `deck` as is, without shuffling.
    ///
    /// The player receives the top two cards, the dealer the next two.
    #[must_use]
    pub fn from_deck(mut deck: Deck) -> Self {
        let player = Hand::from(deck.deal(STARTING_CARDS));
        let dealer = Hand::from(deck.deal(STARTING_CARDS));
        log::debug!("dealt player [{player}] dealer [{dealer}]");

        Self {
            deck,
            player,
            dealer,
            state: RoundState::Dealt,
        }
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns whether the player may still hit or stand.
    #[must_use]
    pub const fn is_player_turn(&self) -> bool {
        self.state.is_player_turn()
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's full hand, hole card included.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
