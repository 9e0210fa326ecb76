//! Orchestrator contract and completion messages.

use tokio::sync::mpsc;

use crate::descriptor::{LoadStrategy, MediaId};
use crate::image::DecodedImage;
use crate::origin::FileOrigin;
use crate::tier::SizeTier;

/// A request for the download layer to materialize one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub media: MediaId,
    pub tier: SizeTier,
    pub origin: FileOrigin,
    pub strategy: LoadStrategy,
    /// Whether policy, not the user, asked for this fetch.
    pub automatic: bool,
}

/// A finished variant, decoded and ready to store.
///
/// Crosses threads as a message; the pixel data is owned by the message
/// until the pump stores it on the owner thread.
#[derive(Debug)]
pub struct VariantReady {
    pub media: MediaId,
    pub tier: SizeTier,
    pub image: DecodedImage,
}

/// Contract of the external download orchestrator.
///
/// Implementations own queueing, transport, retry, and de-duplication of
/// in-flight requests. Completions are reported by sending
/// [`VariantReady`] messages into the completion channel, never by
/// calling back into cache objects directly.
pub trait DownloadOrchestrator: Send + Sync {
    /// Enqueue a materialization request. Fire-and-forget.
    fn request(&self, request: DownloadRequest);
}

/// Sender half of the completion channel, held by orchestrator workers.
pub type CompletionSender = mpsc::UnboundedSender<VariantReady>;

/// Create the completion channel feeding the owner thread's
/// [`CompletionPump`](super::CompletionPump).
pub fn completion_channel() -> (CompletionSender, mpsc::UnboundedReceiver<VariantReady>) {
    mpsc::unbounded_channel()
}
