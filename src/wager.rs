//! Wager validation.

use crate::error::WagerError;

/// Parses a wager line and checks it against the current balance.
///
/// Surrounding whitespace is ignored. Input that is not a number (including
/// an empty line) yields [`WagerError::NotANumber`], which a session treats
/// as the request to quit.
///
/// # Errors
///
/// Returns an error if the input is not a number, is infinite, is not
/// positive, or is larger than `balance`.
///
/// # Example
///
/// ```
/// use bjterm::{WagerError, wager::parse_wager};
///
/// assert_eq!(parse_wager("25\n", 100.0), Ok(25.0));
/// assert_eq!(parse_wager("q", 100.0), Err(WagerError::NotANumber));
/// assert_eq!(parse_wager("200", 100.0), Err(WagerError::ExceedsBalance));
/// ```
pub fn parse_wager(input: &str, balance: f64) -> Result<f64, WagerError> {
    let wager: f64 = input
        .trim()
        .parse()
        .map_err(|_| WagerError::NotANumber)?;

    if wager.is_nan() {
        return Err(WagerError::NotANumber);
    }
    if wager.is_infinite() {
        return Err(WagerError::NotFinite);
    }
    if wager > balance {
        return Err(WagerError::ExceedsBalance);
    }
    if wager <= 0.0 {
        return Err(WagerError::NonPositive);
    }

    Ok(wager)
}
