use thiserror::Error;

/// Errors that can occur while extracting metadata from a filename.
#[derive(Debug, Clone, Error)]
pub enum MediaNameError {
    /// The input string is empty or contains only whitespace.
    #[error("input is empty or whitespace-only")]
    EmptyInput,

    /// None of the season pack, episode or date cascades found an anchor.
    #[error("no season, episode or date found in {input:?}")]
    NoMatch {
        /// The input that could not be parsed.
        input: String,
    },

    /// The filename has a shape that is known to be useless for matching
    /// (disc sets, complete season dumps, episode zero markers).
    #[error("unwanted filename pattern {pattern:?} in {input:?}")]
    UnwantedPattern {
        /// The input that was rejected.
        input: String,
        /// The text that matched the unwanted pattern.
        pattern: String,
    },

    /// Captured episode text is neither a number, an English number word nor
    /// a convertible Roman numeral. Only raised inside the episode cascade,
    /// where it makes the cascade move on to the next pattern.
    #[error("cannot resolve episode number from {0:?}")]
    EpisodeNumberUnresolvable(String),

    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),
}

/// Result type alias for medianame operations.
pub type Result<T> = std::result::Result<T, MediaNameError>;
