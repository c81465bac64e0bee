// third-party imports
use utf8_rune::decode_size;

// local imports
use super::{
    MAX_CLASS_BYTES, MAX_TOKENS, Program,
    error::SyntaxError,
    token::{ClassRef, Literal, Repeat, Shorthand, Token},
};

// ---

/// Single-pass compiler turning a pattern into a [`Program`].
pub struct Compiler<'p> {
    pattern: &'p [u8],
    pos: usize,
    program: Program,
}

impl<'p> Compiler<'p> {
    pub fn new(pattern: &'p [u8]) -> Self {
        Self {
            pattern,
            pos: 0,
            program: Program::default(),
        }
    }

    pub fn compile(mut self) -> Result<Program, SyntaxError> {
        while self.pos < self.pattern.len() {
            // keep one slot for the sentinel
            if self.program.tokens.len() + 1 >= MAX_TOKENS {
                return Err(SyntaxError::TooManyTokens { capacity: MAX_TOKENS });
            }
            let token = self.token()?;
            self.push(token)?;
        }
        self.push(Token::Sentinel)?;

        log::trace!(
            "compiled {:?} into {} tokens and {} class bytes",
            String::from_utf8_lossy(self.pattern),
            self.program.tokens.len(),
            self.program.pool.len(),
        );

        Ok(self.program)
    }

    fn token(&mut self) -> Result<Token, SyntaxError> {
        let start = self.pos;
        let rune = self.rune()?;

        Ok(match rune {
            b"^" => Token::Begin,
            b"$" => Token::End,
            b"." => Token::Dot,
            b"*" => Token::ZeroOrMore,
            b"+" => Token::OneOrMore,
            b"?" => Token::ZeroOrOne,
            b"|" => Token::Branch,
            b"\\" => self.escape(start)?,
            b"[" => self.class(start)?,
            b"{" => self.repeat(start)?,
            _ => Token::Char(Literal::new(rune)),
        })
    }

    fn escape(&mut self, start: usize) -> Result<Token, SyntaxError> {
        let Some(&letter) = self.pattern.get(self.pos) else {
            return Err(SyntaxError::TrailingBackslash { offset: start });
        };

        if let Some(shorthand) = Shorthand::from_letter(letter) {
            self.pos += 1;
            return Ok(Token::Shorthand(shorthand));
        }

        Ok(Token::Char(Literal::new(self.rune()?)))
    }

    fn class(&mut self, start: usize) -> Result<Token, SyntaxError> {
        let negated = self.pattern.get(self.pos) == Some(&b'^');
        if negated {
            self.pos += 1;
        }

        let offset = self.program.pool.len();
        loop {
            match self.pattern.get(self.pos..) {
                Some([b']', ..]) => {
                    self.pos += 1;
                    break;
                }
                Some([b'\\', _, ..]) => {
                    self.pos += 1;
                    self.store(b"\\")?;
                }
                Some([_, ..]) => {}
                _ => return Err(SyntaxError::UnterminatedClass { offset: start }),
            }
            let rune = self.rune()?;
            self.store(rune)?;
        }

        let len = self.program.pool.len() - offset;
        if len == 0 {
            return Err(SyntaxError::EmptyClass { offset: start });
        }
        self.store(&[0])?;

        Ok(Token::Class(ClassRef {
            offset: offset as u16,
            len: len as u16,
            negated,
        }))
    }

    fn repeat(&mut self, start: usize) -> Result<Token, SyntaxError> {
        let mut min = None;
        let mut value: Option<u16> = None;

        loop {
            let offset = self.pos;
            let Some(&b) = self.pattern.get(offset) else {
                return Err(SyntaxError::UnterminatedRepetition { offset: start });
            };
            self.pos += 1;

            match b {
                b'0'..=b'9' => {
                    let digit = u16::from(b - b'0');
                    value = Some(
                        value
                            .unwrap_or(0)
                            .checked_mul(10)
                            .and_then(|v| v.checked_add(digit))
                            .ok_or(SyntaxError::RepetitionOverflow { offset })?,
                    );
                }
                b',' if min.is_none() && value.is_some() => {
                    min = value.take();
                }
                b'}' => {
                    let repeat = match (min, value) {
                        (None, Some(n)) => Repeat { min: n, max: Some(n) },
                        (Some(n), None) => Repeat { min: n, max: None },
                        (Some(min), Some(max)) if max < min => {
                            return Err(SyntaxError::InvertedRepetition { min, max });
                        }
                        (Some(min), Some(max)) => Repeat { min, max: Some(max) },
                        (None, None) => Repeat { min: 0, max: None },
                    };
                    return Ok(Token::Repeat(repeat));
                }
                _ => {
                    let found = if b.is_ascii() {
                        char::from(b)
                    } else {
                        char::REPLACEMENT_CHARACTER
                    };
                    return Err(SyntaxError::MalformedRepetition { offset, found });
                }
            }
        }
    }

    /// Decodes the rune at the current position and moves past it.
    fn rune(&mut self) -> Result<&'p [u8], SyntaxError> {
        let pattern = self.pattern;
        let offset = self.pos;
        match decode_size(&pattern[offset..]) {
            0 => Err(utf8_rune::InvalidRune { offset }.into()),
            n => {
                self.pos += n;
                Ok(&pattern[offset..offset + n])
            }
        }
    }

    fn push(&mut self, token: Token) -> Result<(), SyntaxError> {
        self.program
            .tokens
            .push(token)
            .map_err(|_| SyntaxError::TooManyTokens { capacity: MAX_TOKENS })
    }

    fn store(&mut self, bytes: &[u8]) -> Result<(), SyntaxError> {
        self.program
            .pool
            .extend_from_slice(bytes)
            .map_err(|_| SyntaxError::ClassPoolExhausted {
                capacity: MAX_CLASS_BYTES,
            })
    }
}
