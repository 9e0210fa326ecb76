//! INI parsing for the `[auto_download]` section.
//!
//! Starts from `AutoDownloadSettings::default()` and overlays any values
//! found in the INI. This is the single place where key names are mapped
//! to struct fields.

use ini::Ini;

use super::settings::AutoDownloadSettings;
use super::size::parse_size;
use super::ConfigError;

const SECTION: &str = "auto_download";

/// Parse an `Ini` object into auto-download settings.
pub(super) fn parse_ini(ini: &Ini) -> Result<AutoDownloadSettings, ConfigError> {
    let mut settings = AutoDownloadSettings::default();

    if let Some(section) = ini.section(Some(SECTION)) {
        if let Some(v) = section.get("private_chats") {
            settings.private_chats = parse_bool(v, "private_chats")?;
        }
        if let Some(v) = section.get("groups") {
            settings.groups = parse_bool(v, "groups")?;
        }
        if let Some(v) = section.get("channels") {
            settings.channels = parse_bool(v, "channels")?;
        }
        if let Some(v) = section.get("max_auto_size") {
            settings.max_auto_size = parse_size(v).map_err(|reason| ConfigError::InvalidValue {
                section: SECTION.to_string(),
                key: "max_auto_size".to_string(),
                value: v.to_string(),
                reason,
            })?;
        }
    }

    Ok(settings)
}

fn parse_bool(value: &str, key: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            section: SECTION.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            reason: "expected true/false".to_string(),
        }),
    }
}
