//! Process-wide "downloader task finished" signal.

use tokio::sync::broadcast;
use tracing::trace;

/// Default subscriber channel capacity.
///
/// Tokens are fire-and-forget; a lagging subscriber loses old tokens and
/// simply re-polls, so a small buffer suffices.
const DEFAULT_CAPACITY: usize = 64;

/// Broadcast handle for the finished signal.
///
/// Fired after every successful variant write, for every media object.
/// Subscribers receive an untargeted token and must re-check relevance
/// themselves; there is no backpressure and no delivery guarantee beyond
/// "fires after a successful write". Clones share one channel.
#[derive(Clone)]
pub struct DownloadNotifier {
    tx: broadcast::Sender<()>,
}

impl DownloadNotifier {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Subscribe to finished tokens.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Fire a finished token. A send with no live subscribers is fine.
    pub fn notify(&self) {
        if self.tx.send(()).is_err() {
            trace!("finished signal fired with no subscribers");
        }
    }
}

impl Default for DownloadNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
