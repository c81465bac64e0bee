//! Decoding and comparison of single UTF-8 encoded characters (runes).
//!
//! The codec works on raw bytes and never allocates. It recognizes sequences by
//! their lead byte and checks that the expected number of continuation bytes
//! follows, which is all the matchers in this workspace need to walk text
//! rune by rune.
//!
//! # Examples
//!
//! ```
//! use utf8_rune::{Rune, decode_size};
//!
//! assert_eq!(decode_size(b"a"), 1);
//! assert_eq!(decode_size("ä".as_bytes()), 2);
//! assert_eq!(decode_size("😀".as_bytes()), 4);
//! assert_eq!(decode_size(b"\x81"), 0);
//!
//! let rune = Rune::decode("あい".as_bytes()).unwrap();
//! assert_eq!(rune.len(), 3);
//! assert_eq!(rune.code_point(), 0xE3_81_82);
//! ```

// std imports
use std::fmt;

// third-party imports
use thiserror::Error;

// ---

/// Maximum number of bytes in a single rune.
pub const MAX_RUNE_LEN: usize = 4;

const ASCII_MAX: u8 = 0x7F;
const CONTINUATION_MAX: u8 = 0xBF;
const TWO_BYTE_MAX: u8 = 0xDF;
const THREE_BYTE_MAX: u8 = 0xEF;
const FOUR_BYTE_MAX: u8 = 0xF7;

/// Returns `true` if `b` is a continuation byte of a multi-byte sequence.
#[inline]
pub fn is_continuation(b: u8) -> bool {
    b > ASCII_MAX && b <= CONTINUATION_MAX
}

/// Returns the size in bytes of the rune at the beginning of `bytes`.
///
/// Returns 0 if `bytes` is empty, starts with a byte that cannot lead a
/// sequence, or the sequence is truncated.
#[inline]
pub fn decode_size(bytes: &[u8]) -> usize {
    let Some(&first) = bytes.first() else {
        return 0;
    };

    let size = match first {
        0x00..=ASCII_MAX => return 1,
        0x80..=CONTINUATION_MAX => return 0,
        0xC0..=TWO_BYTE_MAX => 2,
        0xE0..=THREE_BYTE_MAX => 3,
        0xF0..=FOUR_BYTE_MAX => 4,
        _ => return 0,
    };

    match bytes.get(1..size) {
        Some(tail) if tail.iter().all(|&b| is_continuation(b)) => size,
        _ => 0,
    }
}

/// Packs the raw bytes of a rune into an integer, most significant byte first.
///
/// The result is only meaningful for ordering runes against each other.
#[inline]
pub fn code_point(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .take(MAX_RUNE_LEN)
        .fold(0, |acc, &b| (acc << 8) | u32::from(b))
}

/// Returns `true` if both runes have the same size and the same bytes.
#[inline]
pub fn equal(a: &[u8], b: &[u8]) -> bool {
    a == b
}

/// Returns the offset of the rune boundary preceding `pos` in `bytes`.
///
/// Continuation bytes are skipped backwards, so the result is `pos - 1` for
/// ASCII text and up to `pos - 4` for multi-byte runes. Returns 0 when `pos` is 0.
#[inline]
pub fn prev_boundary(bytes: &[u8], pos: usize) -> usize {
    let mut pos = pos.min(bytes.len());
    while pos > 0 {
        pos -= 1;
        if !is_continuation(bytes[pos]) {
            break;
        }
    }
    pos
}

/// Checks that `bytes` is a sequence of complete runes.
pub fn validate(bytes: &[u8]) -> Result<(), InvalidRune> {
    Runes::new(bytes).try_for_each(|rune| rune.map(|_| ()))
}

// ---

/// A single decoded rune borrowed from the source text.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rune<'a> {
    bytes: &'a [u8],
}

impl<'a> Rune<'a> {
    /// Decodes the rune at the beginning of `bytes`.
    ///
    /// Returns `None` if `bytes` is empty or does not start with a complete rune.
    #[inline]
    pub fn decode(bytes: &'a [u8]) -> Option<Self> {
        match decode_size(bytes) {
            0 => None,
            size => Some(Self { bytes: &bytes[..size] }),
        }
    }

    /// Returns the raw bytes of the rune.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Returns the size of the rune in bytes, always in `1..=4`.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns the lead byte of the rune.
    #[inline]
    pub fn lead(&self) -> u8 {
        self.bytes[0]
    }

    /// Returns the packed code point, see [`code_point`].
    #[inline]
    pub fn code_point(&self) -> u32 {
        code_point(self.bytes)
    }
}

impl fmt::Debug for Rune<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(self.bytes) {
            Ok(s) => write!(f, "Rune({:?})", s),
            Err(_) => write!(f, "Rune({:02x?})", self.bytes),
        }
    }
}

// ---

/// Iterator over the runes of a byte string.
///
/// Yields an error once and then stops when an invalid or truncated sequence is found.
#[derive(Clone, Debug)]
pub struct Runes<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Runes<'a> {
    #[inline]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }
}

impl<'a> Iterator for Runes<'a> {
    type Item = Result<Rune<'a>, InvalidRune>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let tail = self.bytes.get(self.offset..).filter(|tail| !tail.is_empty())?;
        match Rune::decode(tail) {
            Some(rune) => {
                self.offset += rune.len();
                Some(Ok(rune))
            }
            None => {
                let offset = self.offset;
                self.offset = self.bytes.len();
                Some(Err(InvalidRune { offset }))
            }
        }
    }
}

// ---

/// An invalid or truncated UTF-8 sequence found at the given byte offset.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid utf-8 sequence at offset {offset}")]
pub struct InvalidRune {
    pub offset: usize,
}
