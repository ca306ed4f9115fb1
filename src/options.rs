//! Session configuration options.

use crate::error::OptionsError;

/// Balance a session starts with unless configured otherwise.
pub const DEFAULT_BALANCE: f64 = 100.0;

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjterm::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_balance(250.0)
///     .with_seed(Some(7));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Cash balance at the start of the session.
    pub starting_balance: f64,
    /// Seed for the deck shuffler. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_balance: DEFAULT_BALANCE,
            seed: None,
        }
    }
}

impl GameOptions {
    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjterm::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_balance(50.0);
    /// assert_eq!(options.starting_balance, 50.0);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: f64) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the shuffle seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjterm::GameOptions;
    ///
    /// let options = GameOptions::default().with_seed(Some(42));
    /// assert_eq!(options.seed, Some(42));
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Checks that the options describe a playable session.
    ///
    /// # Errors
    ///
    /// Returns an error if the starting balance is not finite or not above
    /// zero.
    ///
    /// # Example
    ///
    /// ```
    /// use bjterm::{GameOptions, OptionsError};
    ///
    /// assert!(GameOptions::default().validate().is_ok());
    /// assert_eq!(
    ///     GameOptions::default().with_starting_balance(-5.0).validate(),
    ///     Err(OptionsError::InvalidBalance(-5.0))
    /// );
    /// ```
    pub const fn validate(&self) -> Result<(), OptionsError> {
        let balance = self.starting_balance;
        if balance.is_finite() && balance > 0.0 {
            Ok(())
        } else {
            Err(OptionsError::InvalidBalance(balance))
        }
    }
}
