//! A lightweight wildcard pattern matching library.
//!
//! This crate matches whole byte strings against patterns with `*` (zero or more
//! runes) and `?` (exactly one UTF-8 rune) wildcards.
//!
//! # Features
//!
//! - **Whole-string semantics**: both the pattern and the text must be fully consumed
//! - **UTF-8 aware**: The `?` wildcard matches exactly one rune of 1 to 4 bytes
//! - **Strict decoding**: any invalid or truncated UTF-8 sequence fails the match
//! - **Efficient matching**: Uses optimized substring search with backtracking
//!
//! # Pattern Syntax
//!
//! - `*` - Matches zero or more runes
//! - `?` - Matches exactly one rune
//! - Any other rune matches itself, including `\`
//!
//! There is no escape character, so every valid string matches itself when used as a pattern.
//!
//! # Examples
//!
//! ```
//! use wildcard::Pattern;
//!
//! let pattern = Pattern::new("*.txt").unwrap();
//! assert!(pattern.matches("hello.txt"));
//! assert!(pattern.matches("foo.txt"));
//! assert!(!pattern.matches("hello.rs"));
//!
//! let pattern = Pattern::new("test?.log").unwrap();
//! assert!(pattern.matches("test1.log"));
//! assert!(!pattern.matches("test.log"));
//! assert!(!pattern.matches("test12.log"));
//! ```
//!
//! # UTF-8 Handling
//!
//! The `?` wildcard matches exactly one rune, not one byte:
//!
//! ```
//! use wildcard::{Pattern, matches};
//!
//! let pattern = Pattern::new("???").unwrap();
//! assert!(pattern.matches("abc"));
//! assert!(pattern.matches("🦀🎉🌟"));
//! assert!(!pattern.matches("ab"));
//!
//! // Invalid sequences never match.
//! assert!(!matches("a*", b"a\x81"));
//! assert!(Pattern::new(b"a\xc0 ").is_err());
//! ```

mod pattern;

pub use pattern::*;
pub use utf8_rune::InvalidRune;
