//! Integration tests for the media-variant cache.
//!
//! These tests verify the complete materialization flow:
//! - wanted() → descriptor → orchestrator → completion channel → pump →
//!   stored variant + broadcast finished signal
//! - policy-gated automatic loads carrying their strategy to the
//!   orchestrator
//! - cross-instance handoff of already-decoded data
//! - completions landing after the requesting scope is gone
//!
//! Run with: `cargo test --test media_cache_integration`

use std::rc::Rc;
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use image::{Rgba, RgbaImage};

use medialayer::cache::MediaCacheObject;
use medialayer::config::AutoDownloadSettings;
use medialayer::descriptor::{LoadStrategy, MediaDescriptor, MediaId};
use medialayer::image::DecodedImage;
use medialayer::orchestrator::{
    completion_channel, CompletionPump, CompletionSender, DownloadNotifier, DownloadOrchestrator,
    DownloadRequest, VariantReady,
};
use medialayer::origin::FileOrigin;
use medialayer::policy::{PeerContext, TriggerItem};
use medialayer::tier::SizeTier;

// ============================================================================
// Fake download stack
// ============================================================================

/// Orchestrator fake that records every request and immediately answers
/// with a canned image over the completion channel.
struct InstantOrchestrator {
    tx: CompletionSender,
    requests: Mutex<Vec<DownloadRequest>>,
    /// Dimensions of the canned response image.
    response_size: (u32, u32),
}

impl InstantOrchestrator {
    fn new(tx: CompletionSender, response_size: (u32, u32)) -> Self {
        Self {
            tx,
            requests: Mutex::new(Vec::new()),
            response_size,
        }
    }

    fn requests(&self) -> Vec<DownloadRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl DownloadOrchestrator for InstantOrchestrator {
    fn request(&self, request: DownloadRequest) {
        self.requests.lock().unwrap().push(request.clone());
        let (width, height) = self.response_size;
        let _ = self.tx.send(VariantReady {
            media: request.media,
            tier: request.tier,
            image: DecodedImage::from_rgba(RgbaImage::from_pixel(
                width,
                height,
                Rgba([200, 100, 50, 255]),
            )),
        });
    }
}

/// Descriptor whose load operation forwards to the orchestrator, the way
/// a real owning descriptor fronts its download queue.
struct QueueDescriptor {
    id: MediaId,
    byte_size: u64,
    side_limit: u32,
    orchestrator: Arc<InstantOrchestrator>,
}

impl QueueDescriptor {
    fn new(id: u64, orchestrator: Arc<InstantOrchestrator>) -> Self {
        Self {
            id: MediaId(id),
            byte_size: 100_000,
            side_limit: 2560,
            orchestrator,
        }
    }

    fn with_side_limit(mut self, limit: u32) -> Self {
        self.side_limit = limit;
        self
    }

    fn with_byte_size(mut self, byte_size: u64) -> Self {
        self.byte_size = byte_size;
        self
    }
}

impl MediaDescriptor for QueueDescriptor {
    fn id(&self) -> MediaId {
        self.id
    }

    fn dimensions(&self, tier: SizeTier) -> (u32, u32) {
        [(40, 30), (400, 300), (1600, 1200)][tier.index()]
    }

    fn byte_size(&self) -> u64 {
        self.byte_size
    }

    fn inline_thumbnail_bytes(&self) -> Bytes {
        Bytes::new()
    }

    fn clear_inline_thumbnail_bytes(&self) {}

    fn cancelled(&self) -> bool {
        false
    }

    fn uploading(&self) -> bool {
        false
    }

    fn loading(&self) -> bool {
        false
    }

    fn progress(&self) -> f64 {
        0.0
    }

    fn valid_size_index(&self, tier: SizeTier) -> usize {
        tier.index()
    }

    fn side_limit(&self) -> u32 {
        self.side_limit
    }

    fn load(&self, tier: SizeTier, origin: FileOrigin, strategy: LoadStrategy, automatic: bool) {
        self.orchestrator.request(DownloadRequest {
            media: self.id,
            tier,
            origin,
            strategy,
            automatic,
        });
    }
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_wanted_materializes_variant_and_broadcasts() {
    let (tx, mut rx) = completion_channel();
    let orchestrator = Arc::new(InstantOrchestrator::new(tx, (1600, 1200)));
    let descriptor = Rc::new(QueueDescriptor::new(1, orchestrator.clone()));

    let notifier = DownloadNotifier::default();
    let mut finished = notifier.subscribe();

    let cache = Rc::new(MediaCacheObject::new(descriptor, notifier.clone()));
    let pump = CompletionPump::new();
    pump.register(cache.clone());

    assert!(cache.image(SizeTier::Large).is_none());
    assert!(!cache.loaded());
    assert_eq!(cache.size(SizeTier::Large), (1600, 1200));

    cache.wanted(SizeTier::Large, FileOrigin(42));

    // The orchestrator answered over the completion channel; deliver it.
    let completion = rx.recv().await.expect("completion expected");
    assert!(pump.apply(completion));

    assert!(finished.try_recv().is_ok(), "finished signal must fire");
    assert!(cache.loaded());
    assert_eq!(cache.progress(), 1.0);
    assert_eq!(cache.image(SizeTier::Large).unwrap().dimensions(), (1600, 1200));

    let requests = orchestrator.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].origin, FileOrigin(42));
    assert!(!requests[0].automatic);
}

#[tokio::test]
async fn test_oversized_completion_is_downscaled_at_write() {
    let (tx, mut rx) = completion_channel();
    let orchestrator = Arc::new(InstantOrchestrator::new(tx, (4000, 2000)));
    let descriptor =
        Rc::new(QueueDescriptor::new(2, orchestrator.clone()).with_side_limit(1000));

    let cache = Rc::new(MediaCacheObject::new(descriptor, DownloadNotifier::default()));
    let pump = CompletionPump::new();
    pump.register(cache.clone());

    cache.wanted(SizeTier::Large, FileOrigin::none());
    pump.apply(rx.recv().await.unwrap());

    let stored = cache.image(SizeTier::Large).unwrap();
    assert_eq!(stored.dimensions(), (1000, 500));
}

#[tokio::test]
async fn test_automatic_load_carries_policy_strategy_to_orchestrator() {
    let (tx, mut rx) = completion_channel();
    let orchestrator = Arc::new(InstantOrchestrator::new(tx, (100, 100)));
    let descriptor = Rc::new(
        QueueDescriptor::new(3, orchestrator.clone()).with_byte_size(32 * 1024 * 1024),
    );

    let cache = Rc::new(MediaCacheObject::new(descriptor, DownloadNotifier::default()));
    let settings = AutoDownloadSettings::default();
    let item = TriggerItem {
        peer: PeerContext::PrivateChat,
    };

    // Over the default size ceiling: policy degrades to local-only.
    cache.automatic_load(&settings, FileOrigin::none(), Some(&item));

    let requests = orchestrator.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].tier, SizeTier::Large);
    assert_eq!(requests[0].strategy, LoadStrategy::LocalOnly);
    assert!(requests[0].automatic);

    // The local-only materialization still completes and stores.
    let pump = CompletionPump::new();
    pump.register(cache.clone());
    pump.apply(rx.recv().await.unwrap());
    assert!(cache.loaded());
}

#[tokio::test]
async fn test_cross_instance_handoff_inherits_decoded_data() {
    let (tx, mut rx) = completion_channel();
    let orchestrator = Arc::new(InstantOrchestrator::new(tx, (400, 300)));

    let first = Rc::new(MediaCacheObject::new(
        Rc::new(QueueDescriptor::new(4, orchestrator.clone())),
        DownloadNotifier::default(),
    ));
    let pump = CompletionPump::new();
    pump.register(first.clone());

    first.wanted(SizeTier::Medium, FileOrigin::none());
    pump.apply(rx.recv().await.unwrap());

    // Second in-memory representation of the same remote object.
    let second = Rc::new(MediaCacheObject::new(
        Rc::new(QueueDescriptor::new(4, orchestrator.clone())),
        DownloadNotifier::default(),
    ));
    second.collect_local_data(&first);
    drop(first);

    let inherited = second.image(SizeTier::Medium).expect("inherited variant");
    assert_eq!(inherited.dimensions(), (400, 300));
    // No extra fetch was needed for the handoff.
    assert_eq!(orchestrator.requests().len(), 1);
}

#[tokio::test]
async fn test_completion_lands_after_requesting_scope_is_gone() {
    let (tx, mut rx) = completion_channel();
    let orchestrator = Arc::new(InstantOrchestrator::new(tx, (1600, 1200)));
    let pump = CompletionPump::new();

    {
        let cache = Rc::new(MediaCacheObject::new(
            Rc::new(QueueDescriptor::new(5, orchestrator.clone())),
            DownloadNotifier::default(),
        ));
        pump.register(cache.clone());
        cache.wanted(SizeTier::Large, FileOrigin::none());
        // The scope that asked for the download ends here.
    }

    // The pending delivery still lands on a live object.
    assert!(pump.apply(rx.recv().await.unwrap()));
}

#[tokio::test]
async fn test_multiple_completions_apply_in_arrival_order() {
    let (tx, mut rx) = completion_channel();
    let orchestrator = Arc::new(InstantOrchestrator::new(tx, (40, 30)));
    let descriptor = Rc::new(QueueDescriptor::new(6, orchestrator.clone()));

    let cache = Rc::new(MediaCacheObject::new(descriptor, DownloadNotifier::default()));
    let pump = CompletionPump::new();
    pump.register(cache.clone());

    cache.wanted(SizeTier::Small, FileOrigin::none());
    cache.wanted(SizeTier::Medium, FileOrigin::none());

    pump.apply(rx.recv().await.unwrap());
    pump.apply(rx.recv().await.unwrap());

    assert!(cache.image(SizeTier::Small).is_some());
    assert!(cache.image(SizeTier::Medium).is_some());
    assert!(!cache.loaded());
}
