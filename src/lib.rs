// public modules
pub mod app;
pub mod cli;
pub mod error;
pub mod regex;
pub mod settings;
pub mod status;

// public uses
pub use app::App;
pub use regex::Regex;
pub use settings::Settings;
pub use status::{Input, Status, regex_match, wildcard_match};
