//! Auto-download configuration.
//!
//! Settings are pure data structs; parsing overlays an INI file onto the
//! defaults. Policy decisions take a settings snapshot by value, so a
//! running process can re-read the file without affecting decisions
//! already in flight.

mod defaults;
mod parser;
mod settings;
mod size;

pub use settings::AutoDownloadSettings;
pub use size::{format_size, parse_size};

use ini::Ini;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read or parsed as INI.
    #[error("failed to read config: {0}")]
    Ini(#[from] ini::Error),

    /// A key held a value that does not parse.
    #[error("invalid value for [{section}] {key} = '{value}': {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },
}

/// Load auto-download settings from an INI file, overlaying defaults.
pub fn load_settings(path: impl AsRef<Path>) -> Result<AutoDownloadSettings, ConfigError> {
    let ini = Ini::load_from_file(path.as_ref())?;
    parser::parse_ini(&ini)
}

/// Parse auto-download settings from INI text, overlaying defaults.
pub fn parse_settings_str(text: &str) -> Result<AutoDownloadSettings, ConfigError> {
    let ini = Ini::load_from_str(text).map_err(ini::Error::Parse)?;
    parser::parse_ini(&ini)
}
