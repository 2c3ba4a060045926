// src/session/dice_count.rs

use log::warn;
use crate::utils::{DiceError, MAX_DICE_COUNT};

/// How a requested dice count was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountStatus {
    Accepted,
    /// The request exceeded `MAX_DICE_COUNT` and was lowered to it.
    Clamped,
}

/// Caps a positive count at `MAX_DICE_COUNT`.
pub fn clamp_dice_count(count: usize) -> (usize, CountStatus) {
    if count > MAX_DICE_COUNT {
        (MAX_DICE_COUNT, CountStatus::Clamped)
    } else {
        (count, CountStatus::Accepted)
    }
}

/// Parses a dice count typed by the user.
///
/// Surrounding whitespace is ignored. Counts above `MAX_DICE_COUNT` are clamped rather
/// than rejected.
///
/// # Errors
/// Returns `InvalidDiceCount` for text that is not a 32-bit integer, and for zero or negative
/// counts.
///
/// # Example
/// ```
/// use rs_dice::session::{parse_dice_count, CountStatus};
///
/// assert_eq!(parse_dice_count(" 3 ").unwrap(), (3, CountStatus::Accepted));
/// assert_eq!(parse_dice_count("150").unwrap(), (100, CountStatus::Clamped));
/// assert!(parse_dice_count("-5").is_err());
/// ```
pub fn parse_dice_count(input: &str) -> Result<(usize, CountStatus), DiceError> {
    let value: i32 = input
        .trim()
        .parse()
        .map_err(|_| DiceError::InvalidDiceCount(input.to_string()))?;

    if value <= 0 {
        return Err(DiceError::InvalidDiceCount(input.to_string()));
    }

    let (count, status) = clamp_dice_count(value as usize);
    if status == CountStatus::Clamped {
        warn!("Dice count {} is too large, using {}", value, count);
    }
    Ok((count, status))
}
