//! Owner-thread delivery of finished variants.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::cache::MediaCacheObject;
use crate::descriptor::MediaId;

use super::types::VariantReady;

/// Applies completion messages to registered cache objects.
///
/// Runs on the single logical owner thread. Orchestrator workers on any
/// thread send [`VariantReady`] messages into the channel; the pump looks
/// up the cache object and performs the write there, so cache objects
/// themselves never need locks.
///
/// The registry holds its own strong references: a cache object with a
/// pending completion stays alive through the pump even if every other
/// holder, including the context that created it, is already gone.
#[derive(Default)]
pub struct CompletionPump {
    registry: RefCell<HashMap<MediaId, Rc<MediaCacheObject>>>,
}

impl CompletionPump {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a cache object for completion delivery, keyed by its
    /// owner's identity. Replaces any previous registration for the same
    /// media.
    pub fn register(&self, object: Rc<MediaCacheObject>) {
        let id = object.owner().id();
        self.registry.borrow_mut().insert(id, object);
    }

    /// Drop the registration for `id`, releasing the pump's reference.
    pub fn unregister(&self, id: MediaId) {
        self.registry.borrow_mut().remove(&id);
    }

    /// Number of registered cache objects.
    pub fn registered(&self) -> usize {
        self.registry.borrow().len()
    }

    /// Store one finished variant on its cache object.
    ///
    /// Returns false when no object is registered for the media, which
    /// happens legitimately when the last consumer let go before the
    /// download finished.
    pub fn apply(&self, completion: VariantReady) -> bool {
        let object = self.registry.borrow().get(&completion.media).cloned();
        match object {
            Some(object) => {
                trace!(media = completion.media.0, tier = ?completion.tier, "applying completion");
                object.set(completion.tier, completion.image);
                true
            }
            None => {
                debug!(
                    media = completion.media.0,
                    "completion for unregistered media, dropping"
                );
                false
            }
        }
    }

    /// Drain the completion channel until every sender is dropped,
    /// applying each message in arrival order.
    pub async fn run(&self, mut receiver: mpsc::UnboundedReceiver<VariantReady>) {
        while let Some(completion) = receiver.recv().await {
            self.apply(completion);
        }
    }
}
