//! Automatic-download policy gate.
//!
//! Decides whether an automatic fetch may go to the network or must stay
//! local-only. Pure function over an explicitly passed settings snapshot;
//! the mechanism of fetching belongs to the descriptor and orchestrator.

use crate::config::AutoDownloadSettings;
use crate::descriptor::{LoadStrategy, MediaDescriptor};

/// Kind of conversation a triggering item belongs to.
///
/// Auto-download is configured per conversation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeerContext {
    /// One-on-one chat.
    PrivateChat,
    /// Group chat.
    Group,
    /// Broadcast channel.
    Channel,
}

/// The item whose display triggered an automatic load, reduced to what
/// the policy needs: the conversation it was seen in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerItem {
    pub peer: PeerContext,
}

/// Decide how an automatic load for `media` may be satisfied.
///
/// Returns [`LoadStrategy::CloudOrLocal`] when the settings allow
/// auto-fetch for this peer kind and the advertised size is within the
/// configured ceiling; otherwise [`LoadStrategy::LocalOnly`]. A local-only
/// load still materializes data that is already on disk.
pub fn decide(
    settings: &AutoDownloadSettings,
    peer: PeerContext,
    media: &dyn MediaDescriptor,
) -> LoadStrategy {
    let enabled = match peer {
        PeerContext::PrivateChat => settings.private_chats,
        PeerContext::Group => settings.groups,
        PeerContext::Channel => settings.channels,
    };

    if enabled && media.byte_size() <= settings.max_auto_size {
        LoadStrategy::CloudOrLocal
    } else {
        LoadStrategy::LocalOnly
    }
}
