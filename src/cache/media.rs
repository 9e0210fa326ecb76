//! The cache object for one media object.

use std::rc::Rc;

use tracing::{debug, trace};

use crate::cache::thumbnail::ThumbnailCache;
use crate::cache::variants::SizeVariantStore;
use crate::config::AutoDownloadSettings;
use crate::descriptor::{LoadStrategy, MediaDescriptor};
use crate::image::DecodedImage;
use crate::orchestrator::DownloadNotifier;
use crate::origin::FileOrigin;
use crate::policy::{self, TriggerItem};
use crate::tier::SizeTier;

/// Progressive cache of one remote media object's decoded variants.
///
/// Created on demand when a consumer first needs cached access, shared as
/// `Rc<MediaCacheObject>` between consumers, the owning descriptor, and
/// pending completion deliveries. The object stays valid independently of
/// whichever context created it; a completion arriving after that context
/// is gone still lands on a live object through its own reference.
///
/// All mutation happens on a single logical owner thread; slots use
/// interior mutability and the object takes no locks and never blocks.
pub struct MediaCacheObject {
    owner: Rc<dyn MediaDescriptor>,
    variants: SizeVariantStore,
    thumbnail: ThumbnailCache,
    notifier: DownloadNotifier,
}

impl MediaCacheObject {
    pub fn new(owner: Rc<dyn MediaDescriptor>, notifier: DownloadNotifier) -> Self {
        Self {
            owner,
            variants: SizeVariantStore::new(),
            thumbnail: ThumbnailCache::new(),
            notifier,
        }
    }

    /// The owning media descriptor.
    pub fn owner(&self) -> &Rc<dyn MediaDescriptor> {
        &self.owner
    }

    /// The inline-embedded preview, decoding the owner's payload on first
    /// use. `None` when no payload remains or it is corrupt.
    pub fn thumbnail_inline(&self) -> Option<Rc<DecodedImage>> {
        self.thumbnail.get_or_decode(self.owner.as_ref())
    }

    /// The cached variant for `tier`, falling back to the variant at the
    /// owner-resolved index when the exact tier is absent.
    ///
    /// Never triggers a fetch; pair with [`wanted`] to request one.
    ///
    /// [`wanted`]: MediaCacheObject::wanted
    pub fn image(&self, tier: SizeTier) -> Option<Rc<DecodedImage>> {
        if let Some(image) = self.variants.get(tier.index()) {
            return Some(image);
        }
        self.variants.get(self.owner.valid_size_index(tier))
    }

    /// Ask the owner to materialize `tier` if the owner-resolved slot is
    /// still empty. Cheap no-op otherwise; in-flight de-duplication is
    /// the download layer's job.
    pub fn wanted(&self, tier: SizeTier, origin: FileOrigin) {
        let index = self.owner.valid_size_index(tier);
        if self.variants.get(index).is_none() {
            trace!(media = self.owner.id().0, ?tier, "variant wanted, requesting load");
            self.owner
                .load(tier, origin, LoadStrategy::CloudOrLocal, false);
        }
    }

    /// Pixel dimensions for `tier`: the cached variant's if present, else
    /// the dimensions advertised by the owner's metadata.
    pub fn size(&self, tier: SizeTier) -> (u32, u32) {
        if let Some(image) = self.variants.get(tier.index()) {
            return image.dimensions();
        }
        self.owner.dimensions(tier)
    }

    /// Store a finished variant.
    ///
    /// Oversized images are downscaled to the owner's side limit before
    /// storage. The slot is replaced unconditionally, then the
    /// process-wide finished signal fires so consumers can re-poll.
    pub fn set(&self, tier: SizeTier, image: DecodedImage) {
        let image = image.scaled_to_limit(self.owner.side_limit());
        debug!(
            media = self.owner.id().0,
            ?tier,
            width = image.width(),
            height = image.height(),
            "variant stored"
        );
        self.variants.set(tier.index(), image);
        self.notifier.notify();
    }

    /// Whether the largest tier has been materialized.
    pub fn loaded(&self) -> bool {
        self.variants.is_populated(SizeTier::largest().index())
    }

    /// Progress fraction for UI display.
    ///
    /// The owner's live figure while a transfer is active; otherwise 1.0
    /// if loaded, else 0.0.
    pub fn progress(&self) -> f64 {
        if self.owner.uploading() || self.owner.loading() {
            self.owner.progress()
        } else if self.loaded() {
            1.0
        } else {
            0.0
        }
    }

    /// Trigger a policy-gated automatic load of the largest tier.
    ///
    /// No-op without a triggering item, once loaded, or after the owner
    /// was cancelled. Otherwise the policy gate picks the strategy from
    /// the passed settings snapshot and the item's conversation kind, and
    /// the owner's load is invoked marked automatic. Cancellation gates
    /// only this path; explicit [`wanted`] requests stay unaffected.
    ///
    /// [`wanted`]: MediaCacheObject::wanted
    pub fn automatic_load(
        &self,
        settings: &AutoDownloadSettings,
        origin: FileOrigin,
        item: Option<&TriggerItem>,
    ) {
        let item = match item {
            Some(item) => item,
            None => return,
        };
        if self.loaded() || self.owner.cancelled() {
            return;
        }
        let strategy = policy::decide(settings, item.peer, self.owner.as_ref());
        trace!(media = self.owner.id().0, ?strategy, "automatic load");
        self.owner
            .load(SizeTier::largest(), origin, strategy, true);
    }

    /// Copy every decoded thumbnail/variant present in `source` into this
    /// object, deep-copying pixel data.
    ///
    /// Used when a second in-memory representation of the same remote
    /// object should inherit already-paid-for decode work. Slots empty in
    /// `source` are left untouched here.
    pub fn collect_local_data(&self, source: &MediaCacheObject) {
        if let Some(thumbnail) = source.thumbnail.get() {
            self.thumbnail.set((*thumbnail).clone());
        }
        for index in 0..SizeTier::COUNT {
            if let Some(image) = source.variants.get(index) {
                self.variants.set(index, (*image).clone());
            }
        }
    }
}
