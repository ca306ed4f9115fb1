//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Starting hands have been dealt; the player has not acted yet.
    ///
    /// This is already the player's turn: standing here moves straight to
    /// [`RoundState::DealerTurn`], and [`RoundState::PlayerTurn`] is only
    /// reported after a hit.
    Dealt,
    /// The player has hit at least once and may act again.
    PlayerTurn,
    /// The player stood; the dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the result can be settled.
    Resolved,
}

impl RoundState {
    /// Returns whether the player may still hit or stand.
    #[must_use]
    pub const fn is_player_turn(self) -> bool {
        matches!(self, Self::Dealt | Self::PlayerTurn)
    }
}
