//! Progressive media-variant cache.
//!
//! One [`MediaCacheObject`] per in-memory representation of a remote media
//! object: a fixed table of decoded size variants, a lazily decoded inline
//! thumbnail, and the read/fallback/write orchestration between them.

mod media;
mod thumbnail;
mod variants;

pub use media::MediaCacheObject;
pub use thumbnail::ThumbnailCache;
pub use variants::SizeVariantStore;
