//! # String normalization
//!
//! Helpers shared by the movie and series extractors: extension stripping,
//! punctuation replacement, title cleanup, and the lowercase offset map used
//! to slice titles out of the original-case name.

use regex::Captures;

/// Strips a trailing file extension from the final path segment.
///
/// Only a plausible extension is removed (an ASCII letter followed by one to
/// three ASCII alphanumerics), so `Show.1x05` or `Movie.2015` keep their
/// last component.
pub fn strip_extension(name: &str) -> &str {
    let segment_start = name.rfind(['/', '\\']).map_or(0, |idx| idx + 1);
    let Some(dot) = name[segment_start..].rfind('.') else {
        return name;
    };
    let dot = segment_start + dot;

    if is_extension(&name[dot + 1..]) {
        &name[..dot]
    } else {
        name
    }
}

fn is_extension(ext: &str) -> bool {
    let mut chars = ext.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && (2..=4).contains(&ext.len())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// Replaces every occurrence of the given ASCII characters with a space.
///
/// The output has exactly the same byte length as the input.
pub fn replace_with_space(name: &str, chars: &[char]) -> String {
    name.chars()
        .map(|c| if chars.contains(&c) { ' ' } else { c })
        .collect()
}

/// Collapses whitespace runs into single spaces and trims both ends.
pub fn collapse_spaces(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trims leading and trailing spaces and hyphens.
pub fn trim_separators(name: &str) -> &str {
    name.trim_matches(|c: char| c == ' ' || c == '-')
}

/// Cleans a raw title slice: keeps the part before the first `" - "`,
/// collapses `. _ ( )` and whitespace to single spaces, then trims separators.
pub fn clean_title(raw: &str) -> String {
    let head = raw.split(" - ").next().unwrap_or("");
    let spaced = replace_with_space(head, &['.', '_', '(', ')']);
    trim_separators(&collapse_spaces(&spaced)).to_string()
}

/// Uppercases the first character of every space-separated word.
///
/// The rest of each word is left untouched, so acronyms survive.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut word_start = true;
    for c in name.chars() {
        if word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        word_start = c == ' ';
    }
    out
}

/// A name together with its lowercase form and a byte offset map between them.
///
/// Lowercasing can change byte lengths (`İ` becomes two characters), so an
/// offset found in the lowercase form must be mapped before it is used to
/// slice the original.
#[derive(Debug, Clone)]
pub struct FoldedName<'a> {
    original: &'a str,
    lowered: String,
    origin: Vec<usize>,
}

impl<'a> FoldedName<'a> {
    /// Lowercases `original`, recording for every lowered byte the offset of
    /// the original character it came from.
    pub fn new(original: &'a str) -> Self {
        let mut lowered = String::with_capacity(original.len());
        let mut origin = Vec::with_capacity(original.len() + 1);

        for (idx, ch) in original.char_indices() {
            for lower in ch.to_lowercase() {
                lowered.push(lower);
            }
            origin.resize(lowered.len(), idx);
        }
        origin.push(original.len());

        Self {
            original,
            lowered,
            origin,
        }
    }

    /// The original-case text.
    pub fn original(&self) -> &'a str {
        self.original
    }

    /// The lowercase text all patterns run against.
    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    /// Maps a byte offset of the lowercase form onto the original text.
    pub fn to_original(&self, lowered_offset: usize) -> usize {
        self.origin
            .get(lowered_offset)
            .copied()
            .unwrap_or(self.original.len())
    }

    /// Finds the first occurrence of `text` in the lowercase form.
    pub fn locate(&self, text: &str) -> Option<usize> {
        self.lowered.find(text)
    }
}

/// A located regex match: the matched text, its captured groups, and the
/// offset of its anchor (the first captured group) in the lowercase name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSpan {
    /// Full matched text, including any word-boundary characters.
    pub text: String,
    /// Captured groups in pattern order, starting with group 1.
    pub groups: Vec<Option<String>>,
    /// Start of the anchor in the lowercase name.
    pub offset: usize,
}

impl MatchSpan {
    /// Builds a span from captures taken on `name.lowered()`.
    ///
    /// The offset is not taken from the regex engine directly: the matched
    /// text is re-located in the lowercase name and the anchor's position
    /// inside the match is added to it.
    pub fn from_captures(name: &FoldedName<'_>, caps: &Captures<'_>) -> Option<Self> {
        let whole = caps.get(0)?;
        let anchor = caps.get(1).unwrap_or(whole);
        let located = name.locate(whole.as_str()).unwrap_or(whole.start());

        Some(Self {
            text: whole.as_str().to_string(),
            groups: caps
                .iter()
                .skip(1)
                .map(|g| g.map(|m| m.as_str().to_string()))
                .collect(),
            offset: located + (anchor.start() - whole.start()),
        })
    }

    /// The anchor text (first captured group, or the whole match).
    pub fn anchor(&self) -> &str {
        self.groups
            .first()
            .and_then(|g| g.as_deref())
            .unwrap_or(&self.text)
    }
}
