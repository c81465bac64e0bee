// third-party imports
use thiserror::Error;

/// SyntaxError is an error which may occur when compiling a regular expression.
///
/// Offsets are byte offsets into the pattern.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("invalid utf-8 sequence at offset {offset}")]
    InvalidRune { offset: usize },
    #[error("trailing backslash at offset {offset}")]
    TrailingBackslash { offset: usize },
    #[error("character class at offset {offset} is not terminated")]
    UnterminatedClass { offset: usize },
    #[error("character class at offset {offset} is empty")]
    EmptyClass { offset: usize },
    #[error("character classes exceed {capacity} bytes")]
    ClassPoolExhausted { capacity: usize },
    #[error("pattern exceeds {capacity} tokens")]
    TooManyTokens { capacity: usize },
    #[error("repetition at offset {offset} is not terminated")]
    UnterminatedRepetition { offset: usize },
    #[error("unexpected {found:?} in repetition at offset {offset}")]
    MalformedRepetition { offset: usize, found: char },
    #[error("repetition bound at offset {offset} is too large")]
    RepetitionOverflow { offset: usize },
    #[error("repetition {{{min},{max}}} has maximum less than minimum")]
    InvertedRepetition { min: u16, max: u16 },
}

impl From<utf8_rune::InvalidRune> for SyntaxError {
    fn from(err: utf8_rune::InvalidRune) -> Self {
        Self::InvalidRune { offset: err.offset }
    }
}
