//! Descriptor types and the collaborator trait.

use bytes::Bytes;

use crate::origin::FileOrigin;
use crate::tier::SizeTier;

/// Default maximum side length for stored variants, in pixels.
///
/// Incoming images larger than this on either side are downscaled at
/// write time regardless of what the network returned.
pub const DEFAULT_SIDE_LIMIT: u32 = 2560;

/// Stable identity of a media object, shared by every in-memory
/// representation of the same remote object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MediaId(pub u64);

/// How a load request may be satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStrategy {
    /// Fetch from the network if no local copy exists.
    CloudOrLocal,
    /// Only materialize from already-present local data.
    LocalOnly,
}

/// Contract of the media descriptor that owns a cached object.
///
/// The descriptor knows per-tier metadata dimensions before any bytes are
/// fetched, carries the compact inline-thumbnail payload, tracks live
/// transfer state, and fronts the download queue via [`load`].
///
/// Implementations are shared across holders (`Rc<dyn MediaDescriptor>`)
/// on a single logical owner thread, so all methods take `&self`; mutable
/// state lives behind interior mutability on the implementor's side.
///
/// [`load`]: MediaDescriptor::load
pub trait MediaDescriptor {
    /// Stable identity of the media object.
    fn id(&self) -> MediaId;

    /// Pixel dimensions advertised by metadata for `tier`.
    ///
    /// Always known, even before any bytes are fetched.
    fn dimensions(&self, tier: SizeTier) -> (u32, u32);

    /// Advertised byte size of the full-resolution variant.
    fn byte_size(&self) -> u64;

    /// Compact inline-embedded preview payload; empty if none remains.
    fn inline_thumbnail_bytes(&self) -> Bytes;

    /// Drop the inline payload so a permanently failing decode is not
    /// retried.
    fn clear_inline_thumbnail_bytes(&self);

    /// Whether the user cancelled this object's transfer. Suppresses
    /// automatic loading permanently.
    fn cancelled(&self) -> bool;

    /// Whether an upload is in flight.
    fn uploading(&self) -> bool;

    /// Whether a download is in flight.
    fn loading(&self) -> bool;

    /// Live transfer progress in `0..=1`, owner-maintained. Only
    /// meaningful while [`uploading`] or [`loading`] report true.
    ///
    /// [`uploading`]: MediaDescriptor::uploading
    /// [`loading`]: MediaDescriptor::loading
    fn progress(&self) -> f64;

    /// Slot index to fall back to when `tier` is not materialized.
    ///
    /// Resolution is descriptor-specific: it depends on which tiers the
    /// descriptor knows are obtainable for this object.
    fn valid_size_index(&self, tier: SizeTier) -> usize;

    /// Maximum stored side length in pixels.
    fn side_limit(&self) -> u32 {
        DEFAULT_SIDE_LIMIT
    }

    /// Ask the download machinery to materialize `tier`.
    ///
    /// Fire-and-forget; completion arrives through the orchestrator's
    /// completion channel. De-duplication of in-flight requests is the
    /// orchestrator's responsibility.
    fn load(&self, tier: SizeTier, origin: FileOrigin, strategy: LoadStrategy, automatic: bool);
}
