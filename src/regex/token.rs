// std imports
use std::fmt;

// ---

/// One compiled unit of a pattern.
///
/// A quantifier token (`ZeroOrOne`, `ZeroOrMore`, `OneOrMore`, `Repeat`) always
/// immediately follows the token it applies to. Every compiled sequence ends with
/// [`Token::Sentinel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// End of the compiled sequence.
    Sentinel,
    /// A literal rune.
    Char(Literal),
    /// Any rune except, by default, `\n` and `\r`.
    Dot,
    /// `^`
    Begin,
    /// `$`
    End,
    /// `[...]` or `[^...]`.
    Class(ClassRef),
    /// `\d`, `\D`, `\w`, `\W`, `\s` or `\S`.
    Shorthand(Shorthand),
    /// `?`
    ZeroOrOne,
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
    /// `{n}`, `{n,}` or `{n,m}`.
    Repeat(Repeat),
    /// `|`
    Branch,
}

impl Token {
    /// Returns `true` for tokens that terminate a branch.
    #[inline]
    pub fn ends_branch(&self) -> bool {
        matches!(self, Self::Sentinel | Self::Branch)
    }
}

// ---

/// Raw bytes of a single rune stored inline.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Literal {
    bytes: [u8; utf8_rune::MAX_RUNE_LEN],
    len: u8,
}

impl Literal {
    /// Creates a literal from the bytes of exactly one rune.
    #[inline]
    pub fn new(rune: &[u8]) -> Self {
        let mut bytes = [0; utf8_rune::MAX_RUNE_LEN];
        let len = rune.len().min(bytes.len());
        bytes[..len].copy_from_slice(&rune[..len]);
        Self { bytes, len: len as u8 }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Literal({:?})", String::from_utf8_lossy(self.as_bytes()))
    }
}

// ---

/// Reference to the content of a character class in the class pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassRef {
    pub offset: u16,
    pub len: u16,
    pub negated: bool,
}

impl ClassRef {
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = self.offset as usize;
        start..start + self.len as usize
    }
}

// ---

/// Predefined character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shorthand {
    Digit,
    NotDigit,
    Word,
    NotWord,
    Space,
    NotSpace,
}

impl Shorthand {
    /// Returns the shorthand denoted by the letter following a backslash.
    #[inline]
    pub fn from_letter(letter: u8) -> Option<Self> {
        match letter {
            b'd' => Some(Self::Digit),
            b'D' => Some(Self::NotDigit),
            b'w' => Some(Self::Word),
            b'W' => Some(Self::NotWord),
            b's' => Some(Self::Space),
            b'S' => Some(Self::NotSpace),
            _ => None,
        }
    }

    #[inline]
    pub fn letter(&self) -> char {
        match self {
            Self::Digit => 'd',
            Self::NotDigit => 'D',
            Self::Word => 'w',
            Self::NotWord => 'W',
            Self::Space => 's',
            Self::NotSpace => 'S',
        }
    }

    /// Tests the lead byte of a rune, multi-byte runes never belong to the positive classes.
    #[inline]
    pub fn matches(&self, lead: u8) -> bool {
        match self {
            Self::Digit => is_digit(lead),
            Self::NotDigit => !is_digit(lead),
            Self::Word => is_word(lead),
            Self::NotWord => !is_word(lead),
            Self::Space => is_space(lead),
            Self::NotSpace => !is_space(lead),
        }
    }
}

#[inline]
fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

#[inline]
fn is_word(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphanumeric()
}

// Includes vertical tab, unlike `u8::is_ascii_whitespace`.
#[inline]
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t'..=b'\r')
}

// ---

/// Bounds of a `{n,m}` repetition, `max` is `None` when unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repeat {
    pub min: u16,
    pub max: Option<u16>,
}

impl Repeat {
    /// Returns `true` if `count` repetitions do not exceed the upper bound.
    #[inline]
    pub fn allows(&self, count: usize) -> bool {
        self.max.is_none_or(|max| count <= max as usize)
    }
}

impl fmt::Display for Repeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "{{{}}}", self.min),
            Some(max) => write!(f, "{{{},{}}}", self.min, max),
            None => write!(f, "{{{},}}", self.min),
        }
    }
}
