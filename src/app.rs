// std imports
use std::io::{BufRead, Write};
use std::ops::Range;

// local imports
use crate::{
    error::*,
    regex::{self, Regex},
    settings::Mode,
};

// ---

/// Compiled pattern in one of the supported syntaxes.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Searched anywhere in a line.
    Regex(Regex),
    /// Matched against a line as a whole.
    Wildcard(wildcard::Pattern),
}

impl Matcher {
    pub fn new(mode: Mode, pattern: impl AsRef<[u8]>, options: regex::Options) -> Result<Self> {
        Ok(match mode {
            Mode::Regex => Self::Regex(Regex::with_options(pattern, options)?),
            Mode::Wildcard => Self::Wildcard(wildcard::Pattern::new(pattern)?),
        })
    }

    /// Returns the matching part of `line`, which is the whole line for wildcards.
    pub fn find(&self, line: &[u8]) -> Option<Range<usize>> {
        match self {
            Self::Regex(re) => re.find(line).map(|m| m.range()),
            Self::Wildcard(pattern) => pattern.matches(line).then_some(0..line.len()),
        }
    }
}

// ---

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Select lines that do not match.
    pub invert: bool,
    /// Print only the matching part of selected lines.
    pub only_matching: bool,
    /// Print only the number of selected lines.
    pub count: bool,
}

pub struct App {
    matcher: Matcher,
    options: Options,
}

impl App {
    pub fn new(matcher: Matcher, options: Options) -> Self {
        Self { matcher, options }
    }

    /// Filters all inputs in order and returns the number of selected lines.
    pub fn run<I: BufRead>(&self, inputs: impl IntoIterator<Item = I>, output: &mut impl Write) -> Result<usize> {
        let mut total = 0;
        for input in inputs {
            total += self.process(input, output)?;
        }

        if self.options.count {
            writeln!(output, "{}", total)?;
        }

        Ok(total)
    }

    fn process(&self, mut input: impl BufRead, output: &mut impl Write) -> Result<usize> {
        let mut selected = 0;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let line = trim_right(&buf, |ch| ch == b'\n');
            let line = trim_right(line, |ch| ch == b'\r');
            let found = self.matcher.find(line);
            if found.is_some() == self.options.invert {
                continue;
            }

            selected += 1;
            if self.options.count {
                continue;
            }

            match found {
                Some(range) if self.options.only_matching => output.write_all(&line[range])?,
                _ => output.write_all(line)?,
            }
            output.write_all(b"\n")?;
        }

        log::debug!("selected {} lines", selected);
        Ok(selected)
    }
}

fn trim_right<F: Fn(u8) -> bool>(slice: &[u8], predicate: F) -> &[u8] {
    match slice.iter().rposition(|&ch| !predicate(ch)) {
        Some(pos) => &slice[..pos + 1],
        None => &slice[0..0],
    }
}
