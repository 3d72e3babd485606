//! # Series pattern tables
//!
//! Compiled once per parser and never mutated. Every anchor pattern is
//! word-guarded so that its first capture group is the anchor token itself,
//! and named groups (`season`, `episode`, `end`) carry the numbers.

use regex::{Captures, Regex};

use crate::error::Result;
use crate::parser::numbers::ENGLISH_NUMBERS;

/// Roman numerals I..XXXIX, matched case-insensitively.
const ROMAN: &str = r"x{0,3}(?:ix|xi{0,4}|vi{0,4}|iv|v|i{1,4})";

/// Separators accepted between date components.
const SEP: &str = "[/ -]";

/// Words introducing an episode number.
const EPISODE_MARKER: &str = "(?:episode|ep|e|part|pt)";

/// Wraps `pattern` so it cannot start or end inside a larger word.
fn word_guarded(pattern: &str) -> Result<Regex> {
    Ok(Regex::new(&format!(r"(?i)(?:^|\W)({pattern})(?:\W|$)"))?)
}

/// Iterates over the matches of a word-guarded pattern.
///
/// Unlike `Regex::captures_iter`, the next search restarts right after the
/// anchor group, so two adjacent anchors can share the boundary character
/// between them (`part ii ep 3`).
pub fn guarded_captures<'r, 'h>(
    re: &'r Regex,
    haystack: &'h str,
) -> impl Iterator<Item = Captures<'h>> + 'r
where
    'h: 'r,
{
    let mut at = 0;
    std::iter::from_fn(move || {
        if at > haystack.len() {
            return None;
        }
        let caps = re.captures_at(haystack, at)?;
        let anchor = caps.get(1).or_else(|| caps.get(0))?;
        if anchor.end() <= at {
            return None;
        }
        at = anchor.end();
        Some(caps)
    })
}

/// One entry of the episode cascade.
#[derive(Debug)]
pub struct EpisodeRule {
    /// Short name used in logs.
    pub name: &'static str,
    /// Compiled pattern with an `episode` group and optional `season`/`end`.
    pub regex: Regex,
}

/// All pattern categories used by the series extractor.
#[derive(Debug)]
pub struct SeriesPatterns {
    /// Leading release-group tag or `HD 720p:` style marker.
    pub leading_noise: Regex,
    /// Shapes that make a filename useless for matching.
    pub unwanted: Vec<Regex>,
    /// `season N` / `sN`; must be followed by whitespace or the end and not
    /// by an episode marker (checked separately, see `pack_episode_marker`).
    pub season_pack: Regex,
    /// Anything that turns a season marker into a season+episode marker.
    pub pack_episode_marker: Regex,
    /// `NxAll`.
    pub season_pack_all: Regex,
    /// Episode cascade in priority order.
    pub episodes: Vec<EpisodeRule>,
    /// Air-date shapes in priority order.
    pub dates: Vec<Regex>,
}

impl SeriesPatterns {
    /// Compiles every pattern category.
    ///
    /// # Errors
    ///
    /// Returns `MediaNameError::RegexError` if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        let words = ENGLISH_NUMBERS.join("|");

        Ok(Self {
            leading_noise: Regex::new(r"(?i)^\s*(?:\[[^\[\]]*\]|hd.(?:720|1080|2160)p?:)")?,
            unwanted: vec![
                // 5x00
                Regex::new(r"(?i)\d{1,3}\s?x\s?0+(?:[^1-9]|$)")?,
                // S3D1
                Regex::new(r"(?i)s\d{1,3}d\d{1,3}")?,
                // Season 3 Complete, S01 & 2 Full
                Regex::new(
                    r"(?i)(?:s|series|season|\b)\s?\d{1,2}\s?(?:&\s?\d{1,2})?[\s-]*(?:complete|full)",
                )?,
                Regex::new(r"(?i)disc\s\d")?,
            ],
            season_pack: Regex::new(r"(?i)(?:^|\W)((?:season\s?|s)(?P<season>\d+))")?,
            pack_episode_marker: Regex::new(&format!(
                r"(?i)^\s*(?:(?:.*?\s)?{EPISODE_MARKER}\s?(?:\d{{1,3}}|{ROMAN})\b|\d{{1,3}}\s?of\s?\d{{1,3}})"
            ))?,
            season_pack_all: word_guarded(r"(?P<season>\d{1,3})\s?x\s?all")?,
            episodes: vec![
                EpisodeRule {
                    name: "season-episode",
                    regex: word_guarded(&format!(
                        r"(?:series|season|s)\s?(?P<season>\d{{1,4}})(?:[\s-]+(?:.*?\s)??)?{EPISODE_MARKER}\s?(?P<episode>\d{{1,3}}|{ROMAN})(?:\s?-?\s?e(?P<end>\d{{1,3}}))?"
                    ))?,
                },
                EpisodeRule {
                    name: "season-of",
                    regex: word_guarded(
                        r"(?:series|season)\s?(?P<season>\d{1,4})\s(?P<episode>\d{1,3})\s?of\s?\d{1,3}",
                    )?,
                },
                EpisodeRule {
                    name: "cross",
                    regex: word_guarded(
                        r"(?P<season>\d{1,2})\s?x\s?(?P<episode>\d+)(?:\s(?P<end>\d{1,2}))?",
                    )?,
                },
                EpisodeRule {
                    name: "of",
                    regex: word_guarded(r"(?P<episode>\d{1,3})\s?of\s?\d{1,3}")?,
                },
                EpisodeRule {
                    name: "episode",
                    regex: word_guarded(&format!(
                        r"{EPISODE_MARKER}\s?(?P<episode>\d{{1,3}}|{ROMAN})"
                    ))?,
                },
                EpisodeRule {
                    name: "part-word",
                    regex: word_guarded(&format!(r"part\s(?P<episode>{words})"))?,
                },
            ],
            dates: vec![
                word_guarded(&format!(r"\d{{2,4}}{SEP}\d{{1,2}}{SEP}\d{{1,2}}"))?,
                word_guarded(&format!(r"\d{{1,2}}{SEP}\d{{1,2}}{SEP}\d{{2,4}}"))?,
                word_guarded(&format!(r"\d{{4}}x\d{{1,2}}{SEP}\d{{1,2}}"))?,
                word_guarded(&format!(
                    r"\d{{1,2}}(?:st|nd|rd|th)?{SEP}[a-z]{{3,10}}{SEP}\d{{4}}"
                ))?,
            ],
        })
    }
}
