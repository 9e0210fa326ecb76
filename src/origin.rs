//! File origin tokens.
//!
//! An origin names where and why a fetch is being requested (a message in
//! a chat, a shared-media grid, a profile photo, ...). The download layer
//! uses it for cache-location discovery; this crate only carries it
//! through to the descriptor's load operation.

/// Opaque provenance token for a download request.
///
/// The cache never inspects the token beyond equality; its meaning belongs
/// to the download layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FileOrigin(pub u64);

impl FileOrigin {
    /// Origin for requests with no known provenance.
    pub fn none() -> Self {
        Self(0)
    }
}
