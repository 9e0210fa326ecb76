//! Test support: recording fakes for the descriptor contract.
//!
//! Kept in the library (not behind `cfg(test)`) so integration tests and
//! downstream consumers can drive the cache without a real download
//! stack.

use std::cell::{Cell, RefCell};

use bytes::Bytes;

use crate::descriptor::{LoadStrategy, MediaDescriptor, MediaId};
use crate::origin::FileOrigin;
use crate::tier::SizeTier;

/// One recorded call to [`MediaDescriptor::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadCall {
    pub tier: SizeTier,
    pub origin: FileOrigin,
    pub strategy: LoadStrategy,
    pub automatic: bool,
}

/// Recording fake of the owning media descriptor.
///
/// Every `load` call is recorded; metadata and transfer state are fixed
/// at construction via the `with_*` builders.
pub struct FakeDescriptor {
    id: MediaId,
    dims: [(u32, u32); SizeTier::COUNT],
    byte_size: u64,
    inline: RefCell<Bytes>,
    cancelled: Cell<bool>,
    uploading: Cell<bool>,
    loading: Cell<bool>,
    progress: Cell<f64>,
    side_limit: u32,
    fallback: [usize; SizeTier::COUNT],
    clear_calls: Cell<u32>,
    load_calls: RefCell<Vec<LoadCall>>,
}

impl FakeDescriptor {
    pub fn new(id: u64) -> Self {
        Self {
            id: MediaId(id),
            dims: [(32, 24), (320, 240), (1280, 960)],
            byte_size: 0,
            inline: RefCell::new(Bytes::new()),
            cancelled: Cell::new(false),
            uploading: Cell::new(false),
            loading: Cell::new(false),
            progress: Cell::new(0.0),
            side_limit: crate::descriptor::DEFAULT_SIDE_LIMIT,
            fallback: [0, 1, 2],
            clear_calls: Cell::new(0),
            load_calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_byte_size(mut self, byte_size: u64) -> Self {
        self.byte_size = byte_size;
        self
    }

    pub fn with_dimensions(mut self, tier: SizeTier, dims: (u32, u32)) -> Self {
        self.dims[tier.index()] = dims;
        self
    }

    pub fn with_inline_bytes(self, bytes: impl Into<Bytes>) -> Self {
        *self.inline.borrow_mut() = bytes.into();
        self
    }

    pub fn with_cancelled(self, cancelled: bool) -> Self {
        self.cancelled.set(cancelled);
        self
    }

    pub fn with_side_limit(mut self, limit: u32) -> Self {
        self.side_limit = limit;
        self
    }

    /// Resolve `tier` to the slot of `target` instead of its own slot.
    pub fn with_fallback(mut self, tier: SizeTier, target: SizeTier) -> Self {
        self.fallback[tier.index()] = target.index();
        self
    }

    /// Mark a transfer as in flight with the given live progress.
    pub fn with_transfer(self, uploading: bool, loading: bool, progress: f64) -> Self {
        self.uploading.set(uploading);
        self.loading.set(loading);
        self.progress.set(progress);
        self
    }

    /// Flip the cancelled flag after construction.
    pub fn set_cancelled(&self, cancelled: bool) {
        self.cancelled.set(cancelled);
    }

    /// All recorded `load` calls, oldest first.
    pub fn load_calls(&self) -> Vec<LoadCall> {
        self.load_calls.borrow().clone()
    }

    /// How many times the inline payload was cleared.
    pub fn clear_calls(&self) -> u32 {
        self.clear_calls.get()
    }
}

impl MediaDescriptor for FakeDescriptor {
    fn id(&self) -> MediaId {
        self.id
    }

    fn dimensions(&self, tier: SizeTier) -> (u32, u32) {
        self.dims[tier.index()]
    }

    fn byte_size(&self) -> u64 {
        self.byte_size
    }

    fn inline_thumbnail_bytes(&self) -> Bytes {
        self.inline.borrow().clone()
    }

    fn clear_inline_thumbnail_bytes(&self) {
        self.clear_calls.set(self.clear_calls.get() + 1);
        *self.inline.borrow_mut() = Bytes::new();
    }

    fn cancelled(&self) -> bool {
        self.cancelled.get()
    }

    fn uploading(&self) -> bool {
        self.uploading.get()
    }

    fn loading(&self) -> bool {
        self.loading.get()
    }

    fn progress(&self) -> f64 {
        self.progress.get()
    }

    fn valid_size_index(&self, tier: SizeTier) -> usize {
        self.fallback[tier.index()]
    }

    fn side_limit(&self) -> u32 {
        self.side_limit
    }

    fn load(&self, tier: SizeTier, origin: FileOrigin, strategy: LoadStrategy, automatic: bool) {
        self.load_calls.borrow_mut().push(LoadCall {
            tier,
            origin,
            strategy,
            automatic,
        });
    }
}
