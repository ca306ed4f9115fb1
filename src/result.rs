//! Round result types for showdown.

/// How a round ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player went over 21. The dealer never played.
    PlayerBust,
    /// Dealer went over 21 while drawing to 17.
    DealerBust,
    /// Dealer finished with the higher value.
    DealerWins,
    /// Both hands have the same value.
    Push,
    /// Player finished with the higher value.
    PlayerWins,
}

impl Outcome {
    /// Signed multiplier applied to the wager: 1 for a win, -1 for a loss,
    /// 0 for a push.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::DealerBust | Self::PlayerWins => 1.0,
            Self::PlayerBust | Self::DealerWins => -1.0,
            Self::Push => 0.0,
        }
    }

    /// Net change to the balance for `wager`.
    #[must_use]
    pub fn payout(self, wager: f64) -> f64 {
        wager * self.multiplier()
    }

    /// Returns whether the player won the round.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::DealerBust | Self::PlayerWins)
    }
}

/// Result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The amount wagered.
    pub wager: f64,
    /// Net change to the balance (positive = profit, negative = loss).
    pub payout: f64,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
}
