//! medialayer - progressive media-variant cache
//!
//! This library manages, for each remote media object, multiple resolution
//! variants with lazy on-demand materialization, thumbnail fallback,
//! policy-gated automatic downloads, and safe cross-instance cloning of
//! already-decoded pixel data.
//!
//! # High-Level API
//!
//! ```ignore
//! use std::rc::Rc;
//! use medialayer::cache::MediaCacheObject;
//! use medialayer::orchestrator::DownloadNotifier;
//! use medialayer::tier::SizeTier;
//! use medialayer::origin::FileOrigin;
//!
//! let notifier = DownloadNotifier::default();
//! let cache = Rc::new(MediaCacheObject::new(descriptor, notifier.clone()));
//!
//! // Show the best available data now, and ask for the real thing
//! let shown = cache.image(SizeTier::Large).or_else(|| cache.thumbnail_inline());
//! cache.wanted(SizeTier::Large, FileOrigin::none());
//! ```

pub mod cache;
pub mod config;
pub mod descriptor;
pub mod image;
pub mod logging;
pub mod orchestrator;
pub mod origin;
pub mod policy;
pub mod testing;
pub mod tier;

/// Version of the medialayer library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
