// third-party imports
use utf8_rune::{Rune, code_point, decode_size, equal, prev_boundary};

// local imports
use super::{
    MAX_TOKENS, Match, Options, Program,
    token::{ClassRef, Repeat, Shorthand, Token},
};

// ---

/// Backtracking interpreter of a compiled [`Program`] over one subject.
///
/// Positions are byte offsets into the subject and always fall on rune boundaries.
/// Every matching routine returns the end of the match on success.
pub struct Matcher<'r, 't> {
    program: &'r Program,
    options: &'r Options,
    text: &'t [u8],
}

impl<'r, 't> Matcher<'r, 't> {
    pub fn new(program: &'r Program, options: &'r Options, text: &'t [u8]) -> Self {
        Self { program, options, text }
    }

    /// Finds the leftmost occurrence, trying every branch at an offset before moving on.
    pub fn search(&self) -> Option<Match> {
        let tokens = &self.program.tokens;

        let mut branches = heapless::Vec::<usize, MAX_TOKENS>::new();
        branches.push(0).ok()?;
        for (i, token) in tokens.iter().enumerate() {
            if *token == Token::Branch {
                branches.push(i + 1).ok()?;
            }
        }
        let anchored = branches.iter().all(|&i| tokens[i] == Token::Begin);

        let mut pos = 0;
        loop {
            for &first in branches.iter() {
                let first = match tokens[first] {
                    Token::Begin if pos != 0 => continue,
                    Token::Begin => first + 1,
                    _ => first,
                };
                if let Some(end) = self.match_here(first, pos) {
                    log::trace!("match at {}..{}", pos, end);
                    return Some(Match { start: pos, end });
                }
            }

            if anchored || pos >= self.text.len() {
                return None;
            }
            match decode_size(&self.text[pos..]) {
                0 => return None,
                n => pos += n,
            }
        }
    }

    /// Matches the tokens starting at `pi` against the text starting at `pos`.
    fn match_here(&self, mut pi: usize, mut pos: usize) -> Option<usize> {
        let tokens = &self.program.tokens;

        loop {
            let token = tokens[pi];
            if token.ends_branch() {
                return Some(pos);
            }
            let next = tokens[pi + 1];
            let rest = pi + 2;

            match (token, next) {
                (_, Token::ZeroOrOne) => return self.match_optional(token, rest, pos),
                (Token::Repeat(_), _) => return None,
                (_, Token::ZeroOrMore) => {
                    return self
                        .match_many(token, rest, pos)
                        .or_else(|| self.match_here(rest, pos));
                }
                (_, Token::OneOrMore) => return self.match_many(token, rest, pos),
                (Token::End, _) => return (next.ends_branch() && pos == self.text.len()).then_some(pos),
                (_, Token::Repeat(repeat)) => return self.match_repeat(token, repeat, rest, pos),
                _ => {}
            }

            pos += self.match_one(token, pos)?;
            pi += 1;
        }
    }

    /// Prefers skipping the token, then tries a single occurrence.
    fn match_optional(&self, token: Token, rest: usize, pos: usize) -> Option<usize> {
        self.match_here(rest, pos).or_else(|| {
            let n = self.match_one(token, pos)?;
            self.match_here(rest, pos + n)
        })
    }

    /// Consumes as many occurrences as possible, then gives them back one at a time.
    /// At least one occurrence is required.
    fn match_many(&self, token: Token, rest: usize, pos: usize) -> Option<usize> {
        let mut end = pos;
        while let Some(n) = self.match_one(token, end) {
            end += n;
        }

        while end > pos {
            if let Some(end) = self.match_here(rest, end) {
                return Some(end);
            }
            end = prev_boundary(self.text, end);
        }

        None
    }

    /// Tries the smallest allowed number of occurrences first.
    fn match_repeat(&self, token: Token, repeat: Repeat, rest: usize, pos: usize) -> Option<usize> {
        let mut count = 0;
        let mut end = pos;

        loop {
            if count >= repeat.min as usize {
                if let Some(end) = self.match_here(rest, end) {
                    return Some(end);
                }
            }
            end += self.match_one(token, end)?;
            count += 1;
            if !repeat.allows(count) {
                return None;
            }
        }
    }

    /// Matches a single rune at `pos` and returns its size.
    fn match_one(&self, token: Token, pos: usize) -> Option<usize> {
        let rune = Rune::decode(&self.text[pos..])?;

        let matched = match token {
            Token::Dot => self.options.dot_matches_newline || !matches!(rune.lead(), b'\n' | b'\r'),
            Token::Char(literal) => equal(literal.as_bytes(), rune.as_bytes()),
            Token::Class(class) => self.match_class(&class, rune) != class.negated,
            Token::Shorthand(shorthand) => shorthand.matches(rune.lead()),
            _ => false,
        };

        matched.then_some(rune.len())
    }

    fn match_class(&self, class: &ClassRef, rune: Rune) -> bool {
        let set = self.program.class(class);

        let mut i = 0;
        while i < set.len() {
            let n = decode_size(&set[i..]);
            if n == 0 {
                return false;
            }

            // an escaped entry never starts a range
            if set[i] == b'\\' {
                i += 1;
                let n = decode_size(&set[i..]);
                if n == 0 {
                    return false;
                }
                if match_escaped(&set[i..i + n], rune) {
                    return true;
                }
                i += n;
                continue;
            }

            if in_range(set, i, n, rune) {
                return true;
            }

            if equal(&set[i..i + n], rune.as_bytes()) {
                // a dash only stands for itself at either edge of the class
                if rune.lead() == b'-' {
                    return i == 0 || i + n == set.len();
                }
                return true;
            }

            i += n;
        }

        false
    }
}

/// Checks whether the entry at `i` starts an `a-b` range containing `rune`.
fn in_range(set: &[u8], i: usize, n: usize, rune: Rune) -> bool {
    if rune.lead() == b'-' || set[i] == b'-' {
        return false;
    }

    let dash = i + n;
    if set.get(dash) != Some(&b'-') || dash + 1 >= set.len() {
        return false;
    }

    let upper = &set[dash + 1..];
    let m = decode_size(upper);
    if m == 0 {
        return false;
    }

    let cp = rune.code_point();
    cp >= code_point(&set[i..dash]) && cp <= code_point(&upper[..m])
}

fn match_escaped(escaped: &[u8], rune: Rune) -> bool {
    match escaped {
        &[letter] => match Shorthand::from_letter(letter) {
            Some(shorthand) => shorthand.matches(rune.lead()),
            None => equal(escaped, rune.as_bytes()),
        },
        _ => equal(escaped, rune.as_bytes()),
    }
}

#[cfg(test)]
mod tests;
