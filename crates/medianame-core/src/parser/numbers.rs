//! Episode number resolution: digits, then English number words.
//!
//! Roman numerals are recognised by the episode patterns but never
//! converted; such captures end up unresolvable and the cascade moves on.

use crate::error::{MediaNameError, Result};

/// English number words accepted in place of an episode number, in rank order.
pub const ENGLISH_NUMBERS: [&str; 10] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

/// 1-based rank of an English number word.
pub fn english_number(word: &str) -> Option<u32> {
    let word = word.to_ascii_lowercase();
    ENGLISH_NUMBERS
        .iter()
        .position(|n| *n == word)
        .and_then(|idx| u32::try_from(idx + 1).ok())
}

/// Resolves captured episode text into a number.
///
/// # Errors
///
/// Returns `MediaNameError::EpisodeNumberUnresolvable` when the text is
/// neither a decimal number nor an English number word.
pub fn resolve_episode(text: &str) -> Result<u32> {
    if let Ok(n) = text.parse::<u32>() {
        return Ok(n);
    }
    english_number(text).ok_or_else(|| MediaNameError::EpisodeNumberUnresolvable(text.to_string()))
}
