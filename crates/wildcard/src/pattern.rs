use std::fmt;
use std::mem::take;

use memchr::memmem;
use utf8_rune::{InvalidRune, Runes, decode_size, validate};

/// Tests whether `text` matches the wildcard `pattern` as a whole.
///
/// Returns `false` if either input contains an invalid UTF-8 sequence.
///
/// # Examples
///
/// ```
/// use wildcard::matches;
///
/// assert!(matches("test*case", "test_some_case"));
/// assert!(matches("?", "Ä"));
/// assert!(!matches("?", "ab"));
/// ```
pub fn matches(pattern: impl AsRef<[u8]>, text: impl AsRef<[u8]>) -> bool {
    Pattern::new(pattern).is_ok_and(|pattern| pattern.matches(text))
}

/// A wildcard pattern for matching byte strings of UTF-8 text.
///
/// Patterns are created from strings containing wildcard characters:
/// - `*` matches zero or more runes
/// - `?` matches exactly one UTF-8 rune
///
/// # Examples
///
/// ```
/// use wildcard::Pattern;
///
/// let pattern = Pattern::new("*.txt").unwrap();
/// assert!(pattern.matches("readme.txt"));
/// assert!(!pattern.matches("readme.md"));
///
/// let pattern = Pattern::new("test?.log").unwrap();
/// assert!(pattern.matches("test1.log"));
/// assert!(!pattern.matches("test.log"));
/// ```
///
/// - Patterns can be displayed back to strings via the `Display` trait
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Pattern {
    segments: Vec<Segment>,
}

impl Pattern {
    /// Creates a new pattern from a byte string.
    ///
    /// Fails if the pattern contains an invalid or truncated UTF-8 sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::{InvalidRune, Pattern};
    ///
    /// let pattern = Pattern::new("hello*").unwrap();
    /// assert!(pattern.matches("hello world"));
    ///
    /// // Backslash is an ordinary character
    /// let pattern = Pattern::new(r"path\*").unwrap();
    /// assert!(pattern.matches(r"path\to"));
    ///
    /// assert_eq!(Pattern::new(b"ab\xe3\x81"), Err(InvalidRune { offset: 2 }));
    /// ```
    pub fn new(raw: impl AsRef<[u8]>) -> Result<Self, InvalidRune> {
        Compiler::new().compile(raw.as_ref())
    }

    #[inline]
    /// Tests whether the pattern matches the given text.
    ///
    /// Returns `true` if the entire text matches the pattern, `false` otherwise,
    /// including the case when the text is not a sequence of valid runes.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Pattern;
    ///
    /// let pattern = Pattern::new("*.rs").unwrap();
    /// assert!(pattern.matches("main.rs"));
    /// assert!(!pattern.matches("main.txt"));
    ///
    /// // UTF-8 character matching
    /// let pattern = Pattern::new("??").unwrap();
    /// assert!(pattern.matches("ab"));
    /// assert!(pattern.matches("🦀🎉"));
    /// assert!(!pattern.matches("a"));
    ///
    /// // Complex patterns with backtracking
    /// let pattern = Pattern::new("*test*").unwrap();
    /// assert!(pattern.matches("this is a test case"));
    /// assert!(!pattern.matches("no match here"));
    /// ```
    pub fn matches(&self, text: impl AsRef<[u8]>) -> bool {
        let text = text.as_ref();
        validate(text).is_ok() && Self::partial_match(&self.segments, text)
    }

    // Text is known to consist of valid runes here, so a literal segment found by
    // substring search always starts at a rune boundary.
    #[inline]
    fn partial_match(mut segments: &[Segment], mut text: &[u8]) -> bool {
        while let Some((segment, rest)) = segments.split_first() {
            for _ in 0..segment.wild.min {
                match decode_size(text) {
                    0 => return false,
                    n => text = &text[n..],
                }
            }

            if segment.wild.many {
                if segment.text.is_empty() {
                    return true;
                }
                // occurrences may overlap, so restart the search right after each one
                let mut offset = 0;
                while let Some(i) = memmem::find(&text[offset..], &segment.text) {
                    let start = offset + i;
                    if Self::partial_match(rest, &text[start + segment.text.len()..]) {
                        return true;
                    }
                    offset = start + 1;
                }
                return false;
            } else {
                if !text.starts_with(&segment.text) {
                    return false;
                }
                text = &text[segment.text.len()..];
            }

            segments = rest;
        }

        text.is_empty()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            for _ in 0..segment.wild.min {
                write!(f, "?")?;
            }

            if segment.wild.many {
                write!(f, "*")?;
            }

            write!(f, "{}", String::from_utf8_lossy(&segment.text))?;
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Clone, Default)]
struct Segment {
    wild: WildSpec,
    text: Vec<u8>,
}

#[derive(Debug, PartialEq, Clone, Copy, Default)]
struct WildSpec {
    many: bool,
    min: usize,
}

#[derive(Default)]
struct Compiler {
    segments: Vec<Segment>,
    next: Segment,
}

impl Compiler {
    fn new() -> Self {
        Self::default()
    }

    fn flush(&mut self) {
        if !self.next.text.is_empty() {
            self.segments.push(take(&mut self.next));
        }
    }

    fn compile(mut self, raw: &[u8]) -> Result<Pattern, InvalidRune> {
        for rune in Runes::new(raw) {
            match rune?.as_bytes() {
                b"*" => {
                    self.flush();
                    self.next.wild.many = true;
                }
                b"?" => {
                    self.flush();
                    self.next.wild.min += 1;
                }
                bytes => {
                    self.next.text.extend_from_slice(bytes);
                }
            }
        }

        self.flush();

        if self.next.wild.many || self.next.wild.min > 0 || self.segments.is_empty() {
            self.segments.push(self.next);
        }

        Ok(Pattern {
            segments: self.segments,
        })
    }
}
