//! Size tiers for media variants.
//!
//! A media object is materialized at a small, closed set of resolution
//! tiers. Each tier maps to a fixed slot index in the variant store, and
//! the largest tier doubles as the "fully loaded" marker.

/// Discrete resolution tier of a media variant, ordered smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SizeTier {
    /// Small preview, suitable for grid cells and blurred placeholders.
    Small,
    /// Medium-resolution variant for inline display.
    Medium,
    /// Full-resolution variant; its presence means the media is loaded.
    Large,
}

impl SizeTier {
    /// Number of tiers, and therefore slots in a variant store.
    pub const COUNT: usize = 3;

    /// Slot index of this tier in a variant store.
    pub fn index(self) -> usize {
        match self {
            SizeTier::Small => 0,
            SizeTier::Medium => 1,
            SizeTier::Large => 2,
        }
    }

    /// Tier for a slot index, if the index is in range.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(SizeTier::Small),
            1 => Some(SizeTier::Medium),
            2 => Some(SizeTier::Large),
            _ => None,
        }
    }

    /// The largest tier.
    pub fn largest() -> Self {
        SizeTier::Large
    }

    /// All tiers in ascending order.
    pub fn all() -> [Self; Self::COUNT] {
        [SizeTier::Small, SizeTier::Medium, SizeTier::Large]
    }
}
