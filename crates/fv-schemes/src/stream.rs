//! Token stream over a textual scheme entry.

use std::fmt;

use crate::error::{SchemeError, SchemeResult};

/// Where a token sits in configuration text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamLocation {
    /// Dictionary entry the text came from, e.g. `interpolation_schemes.interpolate(U)`.
    pub entry: String,
    /// 1-based column of the token.
    pub column: usize,
}

impl fmt::Display for StreamLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' column {}", self.entry, self.column)
    }
}

#[derive(Debug, Clone)]
struct Token {
    column: usize,
    text: String,
}

/// Whitespace-separated words of one scheme entry.
///
/// A `;` terminator is dropped. Words such as `interpolate(Co)` or `grad(U)`
/// are single tokens.
#[derive(Debug, Clone)]
pub struct SchemeStream {
    entry: String,
    tokens: Vec<Token>,
    pos: usize,
    end_column: usize,
}

impl SchemeStream {
    pub fn new(entry: impl Into<String>, text: &str) -> Self {
        let mut tokens = Vec::new();
        let mut start: Option<usize> = None;
        for (i, c) in text.char_indices().chain(std::iter::once((text.len(), ' '))) {
            match (c.is_whitespace(), start) {
                (false, None) => start = Some(i),
                (true, Some(s)) => {
                    push_token(&mut tokens, s, &text[s..i]);
                    start = None;
                }
                _ => {}
            }
        }
        Self {
            entry: entry.into(),
            tokens,
            pos: 0,
            end_column: text.len() + 1,
        }
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Location of the next unread token (or the end of the text).
    pub fn location(&self) -> StreamLocation {
        StreamLocation {
            entry: self.entry.clone(),
            column: self
                .tokens
                .get(self.pos)
                .map_or(self.end_column, |t| t.column),
        }
    }

    pub fn peek(&self) -> Option<&str> {
        self.tokens.get(self.pos).map(|t| t.text.as_str())
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Consume the next word.
    pub fn read_word(&mut self, what: &str) -> SchemeResult<String> {
        let token = self
            .tokens
            .get(self.pos)
            .ok_or_else(|| self.error(format!("expected {what}, found end of entry")))?;
        let text = token.text.clone();
        self.pos += 1;
        Ok(text)
    }

    /// Consume the next word as a finite number.
    pub fn read_scalar(&mut self, what: &str) -> SchemeResult<f64> {
        let location = self.location();
        let word = self.read_word(what)?;
        match word.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            Ok(v) => Err(SchemeError::Configuration {
                message: format!("{what} must be finite, found {v}"),
                location,
            }),
            Err(_) => Err(SchemeError::Configuration {
                message: format!("expected {what} (a number), found '{word}'"),
                location,
            }),
        }
    }

    /// Fail if any tokens are left.
    pub fn expect_end(&self) -> SchemeResult<()> {
        match self.peek() {
            None => Ok(()),
            Some(extra) => Err(self.error(format!("unexpected trailing token '{extra}'"))),
        }
    }

    /// A configuration error at the current position.
    pub fn error(&self, message: impl Into<String>) -> SchemeError {
        SchemeError::Configuration {
            message: message.into(),
            location: self.location(),
        }
    }
}

fn push_token(tokens: &mut Vec<Token>, start: usize, word: &str) {
    let text = word.strip_suffix(';').unwrap_or(word);
    if !text.is_empty() {
        tokens.push(Token {
            column: start + 1,
            text: text.to_string(),
        });
    }
}
