//! Settings structs for the auto-download configuration.
//!
//! Pure data types with no parsing or serialization logic; parsing lives
//! in `parser.rs`, defaults in `defaults.rs`.

/// Snapshot of the global auto-download settings at decision time.
///
/// Passed by value into the policy gate so the decision is pure; callers
/// re-snapshot when the user changes settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoDownloadSettings {
    /// Auto-fetch media in one-on-one chats.
    pub private_chats: bool,
    /// Auto-fetch media in group chats.
    pub groups: bool,
    /// Auto-fetch media in broadcast channels.
    pub channels: bool,
    /// Never auto-fetch objects advertised larger than this many bytes.
    pub max_auto_size: u64,
}
