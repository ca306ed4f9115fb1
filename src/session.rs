//! Terminal session: the betting loop around individual rounds.

use std::io::{BufRead, Write};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::{SessionError, WagerError};
use crate::game::Round;
use crate::options::GameOptions;
use crate::result::{Outcome, RoundResult};
use crate::wager::parse_wager;

/// A single player's session at the table.
///
/// Reads decisions from `input` one line at a time and writes narration to
/// `output`. The balance is not stored here; [`Session::run`] keeps it as a
/// local value and threads it through each round.
pub struct Session<R, W> {
    input: R,
    output: W,
    options: GameOptions,
    rng: ChaCha8Rng,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading from `input` and writing to `output`.
    ///
    /// The shuffler is seeded from `options.seed`, or from OS entropy when
    /// no seed is configured.
    pub fn new(options: GameOptions, input: R, output: W) -> Self {
        let seed = options.seed.unwrap_or_else(rand::random);
        log::debug!("seeding shuffler with {seed}");

        Self {
            input,
            output,
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the session options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Consumes the session and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one trimmed line of input.
    ///
    /// End of input and read failures both yield an empty string.
    pub fn read_line(&mut self) -> String {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(_) => line.trim().to_owned(),
            Err(err) => {
                log::warn!("failed to read input: {err}");
                String::new()
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<String, SessionError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(self.read_line())
    }

    /// Runs rounds until the player quits or the balance reaches zero.
    ///
    /// Returns the final balance, which is also printed.
    ///
    /// # Errors
    ///
    /// Returns an error if the starting balance is invalid or writing to the
    /// output fails.
    pub fn run(&mut self) -> Result<f64, SessionError> {
        self.options.validate()?;
        let mut balance = self.options.starting_balance;
        log::info!("session started with {balance:.2}");

        while balance > 0.0 {
            writeln!(self.output, "Your balance is: ${balance:.2}")?;
            let line = self.prompt("Enter your bet (q to quit): ")?;

            let wager = match parse_wager(&line, balance) {
                Ok(wager) => wager,
                Err(WagerError::NotANumber) => break,
                Err(err) => {
                    writeln!(self.output, "Invalid bet ({err}).")?;
                    continue;
                }
            };

            let round = Round::new(&mut self.rng);
            let result = self.play_round(round, wager)?;
            balance += result.payout;
        }

        writeln!(self.output, "You left with: ${balance:.2}")?;
        log::info!("session ended with {balance:.2}");

        Ok(balance)
    }

    /// Plays an already dealt round to completion for `wager`.
    ///
    /// Exactly `h` hits; any other line, including an empty one, stands.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails or the round runs out
    /// of cards.
    pub fn play_round(
        &mut self,
        mut round: Round,
        wager: f64,
    ) -> Result<RoundResult, SessionError> {
        while round.is_player_turn() {
            writeln!(self.output, "Your hand: {}", round.player_hand())?;
            if let Some(up_card) = round.dealer_hand().up_card() {
                writeln!(self.output, "Dealer's hand: {up_card} ??")?;
            }

            if self.prompt("Do you want to (h)it or (s)tand? ")? == "h" {
                round.hit()?;
                if round.player_hand().is_bust() {
                    writeln!(self.output, "Your hand: {}", round.player_hand())?;
                }
            } else {
                round.stand()?;
            }
        }

        if !round.player_hand().is_bust() {
            writeln!(self.output, "Dealer's hand: {}", round.dealer_hand())?;
            while round.dealer_must_hit() {
                writeln!(self.output, "Dealer hits.")?;
                round.dealer_step()?;
                writeln!(self.output, "Dealer's hand: {}", round.dealer_hand())?;
            }
            round.dealer_play()?;
        }

        let result = round.showdown(wager)?;
        let message = match result.outcome {
            Outcome::PlayerBust => "You bust! Dealer wins.",
            Outcome::DealerBust => "Dealer busts! You win.",
            Outcome::DealerWins => "Dealer wins.",
            Outcome::Push => "It's a tie!",
            Outcome::PlayerWins => "You win!",
        };
        writeln!(self.output, "{message}")?;

        Ok(result)
    }
}
