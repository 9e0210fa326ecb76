//! Default values for auto-download settings.

use super::settings::AutoDownloadSettings;

/// Auto-fetch enabled in private chats by default.
pub const DEFAULT_PRIVATE_CHATS: bool = true;

/// Auto-fetch enabled in groups by default.
pub const DEFAULT_GROUPS: bool = true;

/// Auto-fetch disabled in channels by default.
pub const DEFAULT_CHANNELS: bool = false;

/// Default size ceiling for automatic fetches: 8 MB.
pub const DEFAULT_MAX_AUTO_SIZE: u64 = 8 * 1024 * 1024;

impl Default for AutoDownloadSettings {
    fn default() -> Self {
        Self {
            private_chats: DEFAULT_PRIVATE_CHATS,
            groups: DEFAULT_GROUPS,
            channels: DEFAULT_CHANNELS,
            max_auto_size: DEFAULT_MAX_AUTO_SIZE,
        }
    }
}
