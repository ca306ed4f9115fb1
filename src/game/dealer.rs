use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::hand::BLACKJACK;
use crate::result::{Outcome, RoundResult};

use super::{Round, RoundState};

/// The dealer draws until reaching this value.
pub const DEALER_STANDS_ON: u8 = 17;

impl Round {
    /// Returns whether the dealer is still below 17 and must draw.
    #[must_use]
    pub fn dealer_must_hit(&self) -> bool {
        self.state == RoundState::DealerTurn && self.dealer.value() < DEALER_STANDS_ON
    }

    /// Plays one step of the dealer's turn.
    ///
    /// Draws a single card while the dealer is below 17 and returns it. Once
    /// the dealer reaches 17 or more the round resolves and `None` is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_step(&mut self) -> Result<Option<Card>, ShowdownError> {
        if self.state != RoundState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        if self.dealer.value() >= DEALER_STANDS_ON {
            self.state = RoundState::Resolved;
            return Ok(None);
        }

        let card = self.deck.deal_one().ok_or(ShowdownError::NoCards)?;
        self.dealer.add_card(card);
        log::debug!("dealer hits {card} for {}", self.dealer.value());

        Ok(Some(card))
    }

    /// Dealer plays their hand according to the house rule.
    ///
    /// The dealer draws one card at a time while their value is below 17 and
    /// stands as soon as it reaches 17 or more, busting included.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        let mut drawn_cards = Vec::new();

        while let Some(card) = self.dealer_step()? {
            drawn_cards.push(card);
        }

        Ok(drawn_cards)
    }

    /// Compares the final hands and settles `wager`.
    ///
    /// A player bust loses regardless of the dealer's cards. Otherwise a
    /// dealer bust or a higher player value wins, a lower one loses, and
    /// equal values push.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not resolved yet.
    pub fn showdown(&self, wager: f64) -> Result<RoundResult, ShowdownError> {
        if self.state != RoundState::Resolved {
            return Err(ShowdownError::InvalidState);
        }

        let player_value = self.player.value();
        let dealer_value = self.dealer.value();

        let outcome = if player_value > BLACKJACK {
            Outcome::PlayerBust
        } else if dealer_value > BLACKJACK {
            Outcome::DealerBust
        } else if dealer_value > player_value {
            Outcome::DealerWins
        } else if dealer_value == player_value {
            Outcome::Push
        } else {
            Outcome::PlayerWins
        };

        let payout = outcome.payout(wager);
        log::info!(
            "round resolved: {outcome:?} ({player_value} vs {dealer_value}), payout {payout:.2}"
        );

        Ok(RoundResult {
            outcome,
            wager,
            payout,
            player_value,
            dealer_value,
        })
    }
}
