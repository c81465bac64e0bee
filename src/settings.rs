// std imports
use std::include_str;
use std::path::Path;

// third-party imports
use clap::ValueEnum;
use config::{Config, File, FileFormat};
use serde::Deserialize;

// local imports
use crate::{error::Result, regex};

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

// ---

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub mode: Mode,
    #[serde(default)]
    pub regex: regex::Options,
}

impl Settings {
    /// Loads the embedded defaults overridden by the given configuration files, in order.
    pub fn load<P: AsRef<Path>>(files: impl IntoIterator<Item = P>) -> Result<Self> {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));
        for file in files {
            let file = file.as_ref();
            log::debug!("loading settings from {}", file.display());
            builder = builder.add_source(File::from(file).required(true));
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}

// ---

/// Pattern syntax.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Regular expression searched anywhere in the line.
    #[default]
    Regex,
    /// Wildcard pattern matched against the whole line.
    Wildcard,
}
