// std imports
use std::path::PathBuf;

// third-party imports
use clap::Parser;

// local imports
use crate::settings::Mode;

// ---

/// Prints lines matching a reduced regular expression or wildcard pattern.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Pattern to match.
    pub pattern: String,

    /// Files to process, standard input is used if none given or `-` is given.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Pattern syntax, overrides the `mode` setting.
    #[arg(long, overrides_with = "mode")]
    #[arg(value_enum)]
    pub mode: Option<Mode>,

    /// Handful alias for --mode=wildcard, overrides --mode option.
    #[arg(short = 'w', long)]
    pub wildcard: bool,

    /// Select lines that do not match.
    #[arg(short = 'v', long)]
    pub invert: bool,

    /// Print only the matching part of each selected line.
    #[arg(short = 'o', long)]
    pub only_matching: bool,

    /// Print only the number of selected lines.
    #[arg(short = 'c', long)]
    pub count: bool,

    /// Allow `.` to match carriage return and line feed characters.
    #[arg(long)]
    pub dot_matches_newline: bool,

    /// Print the compiled pattern and exit.
    #[arg(long)]
    pub dump: bool,

    /// Configuration file path.
    #[arg(long, value_name = "FILE", env = "STRMATCH_CONFIG", num_args = 1)]
    pub config: Vec<PathBuf>,
}

impl Opt {
    /// Returns the pattern syntax to use, taking the settings into account.
    pub fn mode(&self, default: Mode) -> Mode {
        if self.wildcard {
            Mode::Wildcard
        } else {
            self.mode.unwrap_or(default)
        }
    }
}
