use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors raised when parsing a target-word letter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LetterError {
    #[error("letter is empty")]
    Empty,

    #[error("expected a single letter, got {0:?}")]
    TooLong(String),

    #[error("{0:?} is not an ASCII letter")]
    NotAsciiLetter(char),
}

/// One letter of the target word, always stored uppercase.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(char);

impl Letter {
    /// Creates a `Letter`, normalising to uppercase.
    ///
    /// # Errors
    ///
    /// Returns `LetterError::NotAsciiLetter` for anything outside `A-Z`/`a-z`.
    pub fn new(c: char) -> Result<Self, LetterError> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_uppercase()))
        } else {
            Err(LetterError::NotAsciiLetter(c))
        }
    }

    /// Builds a letter from data that is already known to be uppercase ASCII.
    pub(crate) const fn from_uppercase(c: char) -> Self {
        Self(c)
    }

    #[must_use]
    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl FromStr for Letter {
    type Err = LetterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let Some(first) = chars.next() else {
            return Err(LetterError::Empty);
        };
        if chars.next().is_some() {
            return Err(LetterError::TooLong(s.to_string()));
        }
        Self::new(first)
    }
}

impl fmt::Debug for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Letter({})", self.0)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
