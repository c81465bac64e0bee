//! Status-code entry points.
//!
//! Both functions accept anything that can be viewed as bytes, including `Option`
//! wrappers for inputs that may be absent. An absent input is never a syntax error,
//! it simply fails to match.

// std imports
use std::fmt;

// local imports
use crate::regex::Regex;

// ---

/// Outcome of a match request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Status {
    /// The pattern matched.
    Ok = 0,
    /// The pattern did not match, or an input was absent or not valid UTF-8.
    Fail = 1,
    /// The regular expression could not be compiled.
    SyntaxError = 2,
}

impl Status {
    #[inline]
    pub fn is_ok(&self) -> bool {
        *self == Self::Ok
    }

    /// Returns the numeric code of the status, suitable as a process exit code.
    #[inline]
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl From<bool> for Status {
    #[inline]
    fn from(matched: bool) -> Self {
        if matched { Self::Ok } else { Self::Fail }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ok => "ok",
            Self::Fail => "fail",
            Self::SyntaxError => "syntax error",
        })
    }
}

// ---

/// Something that may provide an input byte string.
pub trait Input {
    fn as_input(&self) -> Option<&[u8]>;
}

impl Input for str {
    #[inline]
    fn as_input(&self) -> Option<&[u8]> {
        Some(self.as_bytes())
    }
}

impl Input for [u8] {
    #[inline]
    fn as_input(&self) -> Option<&[u8]> {
        Some(self)
    }
}

impl<const N: usize> Input for [u8; N] {
    #[inline]
    fn as_input(&self) -> Option<&[u8]> {
        Some(self)
    }
}

impl Input for String {
    #[inline]
    fn as_input(&self) -> Option<&[u8]> {
        Some(self.as_bytes())
    }
}

impl Input for Vec<u8> {
    #[inline]
    fn as_input(&self) -> Option<&[u8]> {
        Some(self)
    }
}

impl<T: Input + ?Sized> Input for &T {
    #[inline]
    fn as_input(&self) -> Option<&[u8]> {
        (**self).as_input()
    }
}

impl<T: Input> Input for Option<T> {
    #[inline]
    fn as_input(&self) -> Option<&[u8]> {
        self.as_ref().and_then(|x| x.as_input())
    }
}

// ---

/// Checks whether `subject` as a whole matches the wildcard `pattern`.
///
/// # Examples
///
/// ```
/// use strmatch::{Status, wildcard_match};
///
/// assert_eq!(wildcard_match("test*case", "test_the_case"), Status::Ok);
/// assert_eq!(wildcard_match("test?", "test"), Status::Fail);
/// assert_eq!(wildcard_match(None::<&str>, "test"), Status::Fail);
/// ```
pub fn wildcard_match(pattern: impl Input, subject: impl Input) -> Status {
    match (pattern.as_input(), subject.as_input()) {
        (Some(pattern), Some(subject)) => wildcard::matches(pattern, subject).into(),
        _ => Status::Fail,
    }
}

/// Checks whether the regular expression `pattern` occurs anywhere in `subject`.
///
/// # Examples
///
/// ```
/// use strmatch::{Status, regex_match};
///
/// assert_eq!(regex_match("cat|dog", "hotdog"), Status::Ok);
/// assert_eq!(regex_match("^abc$", "abcd"), Status::Fail);
/// assert_eq!(regex_match("[abc", "abc"), Status::SyntaxError);
/// ```
pub fn regex_match(pattern: impl Input, subject: impl Input) -> Status {
    let (Some(pattern), Some(subject)) = (pattern.as_input(), subject.as_input()) else {
        return Status::Fail;
    };

    match Regex::new(pattern) {
        Ok(regex) => regex.is_match(subject).into(),
        Err(err) => {
            log::debug!("{}", err);
            Status::SyntaxError
        }
    }
}
