// std imports
use std::io;
use std::path::PathBuf;

// third-party imports
use config::ConfigError;
use thiserror::Error;

// local imports
use crate::regex::SyntaxError;

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to open {path:?}: {source}")]
    Open { path: PathBuf, source: io::Error },
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("wrong regular expression: {0}")]
    WrongRegularExpression(#[from] SyntaxError),
    #[error("wrong wildcard pattern: {0}")]
    WrongWildcard(#[from] wildcard::InvalidRune),
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
