//! # Movie title extractor
//!
//! Normalizes the name, then walks the tokens left to right looking for the
//! first one that ends the title: a release year, a cutoff keyword, an
//! all-caps tag following mixed-case words, or a proper/repack marker.

use regex::Regex;
use tracing::{debug, trace};

use crate::error::Result;
use crate::parser::normalize::{replace_with_space, strip_extension, trim_separators};
use crate::parser::quality::QualityClassifier;
use crate::parser::tokenizer::{Token, Tokenizer};
use crate::types::MovieRecord;

/// Years at or below this are treated as title words.
const MIN_YEAR_EXCLUSIVE: u32 = 1930;

const SPECIALS: &[&str] = &["special", "bonus", "extra", "omake", "ova"];

const EDITIONS: &[&str] = &[
    "dc",
    "extended",
    "uncut",
    "remastered",
    "unrated",
    "theatrical",
    "chrono",
    "se",
];

const CUTOFFS: &[&str] = &[
    "limited",
    "xvid",
    "h264",
    "x264",
    "h.264",
    "x.264",
    "screener",
    "unrated",
    "3d",
    "extended",
    "directors",
    "director's",
    "multisubs",
    "dubbed",
    "subbed",
    "multi",
];

/// Markers that always count as a proper.
const PROPERS: &[&str] = &["proper", "repack", "rerip"];

/// Markers that only count once a year has been seen ("The Real Thing").
const LATE_PROPERS: &[&str] = &["real", "final"];

fn is_cutoff(word: &str) -> bool {
    [CUTOFFS, SPECIALS, EDITIONS]
        .iter()
        .any(|list| list.contains(&word))
}

/// Why a token ended the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    Year,
    CaseTransition,
    Cutoff,
    Proper,
}

/// Extracts a movie title and release year.
#[derive(Debug)]
pub struct MovieParser {
    leading_tag: Regex,
    tokenizer: Tokenizer,
    max_year: u16,
}

impl MovieParser {
    /// Constructs a parser accepting release years up to `max_year`.
    ///
    /// # Errors
    ///
    /// Returns `MediaNameError::RegexError` if a pattern fails to compile.
    pub fn new(max_year: u16) -> Result<Self> {
        Ok(Self {
            leading_tag: Regex::new(r"^\[([^\[\]]*)\](.*)$")?,
            tokenizer: Tokenizer::new(),
            max_year,
        })
    }

    /// Parses a movie filename. Never fails; unknown shapes yield the whole
    /// normalized name as title.
    pub fn parse(&self, input: &str, quality: &QualityClassifier) -> MovieRecord {
        let normalized = self.normalize(input);
        let tokens = self.tokenizer.tokenize(&normalized);

        let mut record = MovieRecord::new(String::new());
        let mut cut: Option<usize> = None;
        let mut mixed_case_seen = tokens.first().is_some_and(|t| !t.is_uppercase());

        for token in tokens.iter().skip(1) {
            if let Some(trigger) = self.trigger(token, &mut record, mixed_case_seen) {
                trace!(token = %token.text, index = token.index, ?trigger, "title trigger");
                cut.get_or_insert(token.index);
            }
            if !token.is_uppercase() {
                mixed_case_seen = true;
            }
        }

        let title = match cut {
            Some(idx) => &normalized[..tokens[idx].start],
            None => normalized.as_str(),
        };
        record.title = trim_separators(title).to_string();
        record.quality = quality.classify(&normalized);

        debug!(
            input,
            title = %record.title,
            year = ?record.year,
            quality = %record.quality,
            "parsed movie"
        );
        record
    }

    /// Applies the movie normalization steps up to (not including)
    /// tokenization.
    fn normalize(&self, input: &str) -> String {
        let name = strip_extension(input.trim());

        // [info]rest -> rest info
        let name = match self.leading_tag.captures(name) {
            Some(caps) => format!("{} {}", &caps[2], &caps[1]),
            None => name.to_string(),
        };

        let mut name = replace_with_space(&name, &['[', ']', '(', ')', '_', ',', '.']);
        if !name.contains(' ') {
            name = name.replace('-', " ");
        }

        // Drops whole `imax` words and collapses the spacing in one pass.
        name.split_whitespace()
            .filter(|word| *word != "imax")
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn trigger(
        &self,
        token: &Token,
        record: &mut MovieRecord,
        mixed_case_seen: bool,
    ) -> Option<Trigger> {
        if let Ok(n) = token.text.parse::<u32>() {
            if n > MIN_YEAR_EXCLUSIVE && n <= u32::from(self.max_year) {
                let year = u16::try_from(n).ok()?;
                record.year.get_or_insert(year);
                return Some(Trigger::Year);
            }
        }

        // Propers are counted even when another trigger also applies.
        let word = token.text.to_lowercase();
        let late = LATE_PROPERS.contains(&word.as_str());
        if PROPERS.contains(&word.as_str()) || (late && record.year.is_some()) {
            record.proper_count += 1;
            return Some(Trigger::Proper);
        }

        if mixed_case_seen && token.text.len() > 3 && token.is_alphabetic() && token.is_uppercase()
        {
            return Some(Trigger::CaseTransition);
        }

        if is_cutoff(&word) {
            return Some(Trigger::Cutoff);
        }

        None
    }
}
