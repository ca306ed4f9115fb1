use crate::card::Card;
use crate::error::ActionError;

use super::{Round, RoundState};

impl Round {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state.is_player_turn() {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// If the new card takes the player over 21 the round resolves at once
    /// and the dealer never plays.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.deck.deal_one().ok_or(ActionError::NoCards)?;
        self.player.add_card(card);

        if self.player.is_bust() {
            log::debug!("player hits {card} and busts at {}", self.player.value());
            self.state = RoundState::Resolved;
        } else {
            log::debug!("player hits {card} for {}", self.player.value());
            self.state = RoundState::PlayerTurn;
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        log::debug!("player stands on {}", self.player.value());
        self.state = RoundState::DealerTurn;

        Ok(())
    }
}
