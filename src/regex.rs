//! A reduced regular expression engine for UTF-8 text.
//!
//! Patterns are compiled into a short, fixed-capacity sequence of tokens which is
//! then interpreted by a backtracking matcher. The supported syntax is:
//!
//! | Syntax      | Meaning                                                 |
//! |-------------|---------------------------------------------------------|
//! | `.`         | any rune except `\n` and `\r` (see [`Options`])         |
//! | `^`, `$`    | start and end of text                                   |
//! | `*`, `+`    | zero or more, one or more (greedy)                      |
//! | `?`         | zero or one (prefers zero)                              |
//! | `{n}`, `{n,}`, `{n,m}` | bounded repetition (prefers fewest)          |
//! | `[abc]`, `[^abc]`, `[a-z]` | character classes with ranges and escapes |
//! | `\d \D \w \W \s \S` | ASCII digit, word and space classes             |
//! | `\x`        | literal `x`                                             |
//! | `a\|b`      | alternation                                             |
//!
//! There are no groups, so quantifiers always apply to the single preceding token.
//!
//! # Examples
//!
//! ```
//! use strmatch::regex::Regex;
//!
//! let re = Regex::new(r"\d{2}:\d{2}").unwrap();
//! let m = re.find("at 12:30 sharp").unwrap();
//! assert_eq!(m.range(), 3..8);
//!
//! assert!(Regex::new("^[a-z]+$").unwrap().is_match("abc"));
//! assert!(Regex::new("[abc").is_err());
//! ```

// std imports
use std::fmt;
use std::ops::Range;

// third-party imports
use serde::Deserialize;

// local imports
use compiler::Compiler;
use matcher::Matcher;
use token::Token;

// ---

mod compiler;
mod error;
mod matcher;
mod token;

pub use error::SyntaxError;

/// Maximum number of tokens in a compiled pattern, including the terminating sentinel.
pub const MAX_TOKENS: usize = 30;

/// Maximum number of bytes taken by all character classes of a pattern.
///
/// Each class takes its content plus one terminating byte.
pub const MAX_CLASS_BYTES: usize = 40;

// ---

/// Options affecting how a compiled pattern matches text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Options {
    /// Allows `.` to match `\n` and `\r`.
    pub dot_matches_newline: bool,
}

// ---

/// A compiled regular expression.
///
/// The compiled form is stored inline and never changes after compilation, so a
/// `Regex` may be freely shared between threads and matched against any number
/// of subjects.
#[derive(Debug, Clone)]
pub struct Regex {
    program: Program,
    options: Options,
}

impl Regex {
    /// Compiles a pattern with default options.
    pub fn new(pattern: impl AsRef<[u8]>) -> Result<Self, SyntaxError> {
        Self::with_options(pattern, Options::default())
    }

    /// Compiles a pattern with the given options.
    pub fn with_options(pattern: impl AsRef<[u8]>, options: Options) -> Result<Self, SyntaxError> {
        let program = Compiler::new(pattern.as_ref()).compile()?;
        Ok(Self { program, options })
    }

    /// Returns the options the pattern was compiled with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Finds the leftmost occurrence of the pattern in `text`.
    ///
    /// Returns `None` if there is no occurrence or `text` contains an invalid UTF-8 sequence.
    pub fn find(&self, text: impl AsRef<[u8]>) -> Option<Match> {
        let text = text.as_ref();
        if let Err(err) = utf8_rune::validate(text) {
            log::trace!("subject rejected: {}", err);
            return None;
        }
        Matcher::new(&self.program, &self.options, text).search()
    }

    /// Returns `true` if the pattern occurs anywhere in `text`.
    pub fn is_match(&self, text: impl AsRef<[u8]>) -> bool {
        self.find(text).is_some()
    }
}

/// Lists the compiled tokens, one per line.
impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in self.program.tokens.iter() {
            match token {
                Token::Sentinel => break,
                Token::Char(literal) => {
                    writeln!(f, "char {:?}", String::from_utf8_lossy(literal.as_bytes()))?;
                }
                Token::Dot => writeln!(f, "dot")?,
                Token::Begin => writeln!(f, "begin")?,
                Token::End => writeln!(f, "end")?,
                Token::Class(class) => {
                    let content = self.program.class(class);
                    let negation = if class.negated { "^" } else { "" };
                    writeln!(f, "class [{}{}]", negation, String::from_utf8_lossy(content))?;
                }
                Token::Shorthand(shorthand) => writeln!(f, "shorthand \\{}", shorthand.letter())?,
                Token::ZeroOrOne => writeln!(f, "zero-or-one")?,
                Token::ZeroOrMore => writeln!(f, "zero-or-more")?,
                Token::OneOrMore => writeln!(f, "one-or-more")?,
                Token::Repeat(repeat) => writeln!(f, "repeat {}", repeat)?,
                Token::Branch => writeln!(f, "branch")?,
            }
        }
        Ok(())
    }
}

// ---

/// Location of an occurrence of a pattern in a subject, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
    start: usize,
    end: usize,
}

impl Match {
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

// ---

/// Compiled token sequence with the class pool its class tokens refer to.
#[derive(Debug, Clone, Default)]
struct Program {
    tokens: heapless::Vec<Token, MAX_TOKENS>,
    pool: heapless::Vec<u8, MAX_CLASS_BYTES>,
}

impl Program {
    #[inline]
    fn class(&self, class: &token::ClassRef) -> &[u8] {
        &self.pool[class.range()]
    }
}
