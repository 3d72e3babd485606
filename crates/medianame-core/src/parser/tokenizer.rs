//! # Tokenizer for the movie title scan
//!
//! Splits a normalized movie name into space-delimited tokens, keeping the
//! byte offset of every token so the title can be sliced up to a cut point.

/// A token extracted from a normalized name with positional information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token text, case preserved
    pub text: String,
    /// Start position in the normalized string
    pub start: usize,
    /// End position in the normalized string
    pub end: usize,
    /// Token index in the sequence
    pub index: usize,
}

impl Token {
    /// Returns `true` if the token only contains ASCII letters.
    pub fn is_alphabetic(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(|c| c.is_ascii_alphabetic())
    }

    /// Returns `true` if the token has at least one cased letter and no
    /// lowercase ones (`"GROUP"`, `"X264"`, but not `"2015"`).
    pub fn is_uppercase(&self) -> bool {
        self.text.chars().any(char::is_uppercase) && !self.text.chars().any(char::is_lowercase)
    }
}

/// Tokenizer for normalized media names.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer instance.
    pub fn new() -> Self {
        Self
    }

    /// Tokenize a normalized name on spaces.
    ///
    /// # Examples
    /// ```
    /// use medianame_core::parser::tokenizer::Tokenizer;
    ///
    /// let tokens = Tokenizer::new().tokenize("Movie Title 2015");
    /// assert_eq!(tokens.len(), 3);
    /// assert_eq!(tokens[2].start, 12);
    /// ```
    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut current_start = 0;

        for (idx, c) in input.char_indices() {
            if c == ' ' {
                self.push(&mut tokens, input, current_start, idx);
                current_start = idx + c.len_utf8();
            }
        }
        self.push(&mut tokens, input, current_start, input.len());

        tokens
    }

    fn push(&self, tokens: &mut Vec<Token>, input: &str, start: usize, end: usize) {
        if end > start {
            tokens.push(Token {
                text: input[start..end].to_string(),
                start,
                end,
                index: tokens.len(),
            });
        }
    }
}
