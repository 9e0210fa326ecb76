//! Owning media descriptor contract.
//!
//! The descriptor is the collaborator that owns a media object's metadata
//! and its download machinery. The cache consumes this contract; it never
//! implements transport or storage itself.

mod types;

pub use types::{LoadStrategy, MediaDescriptor, MediaId, DEFAULT_SIDE_LIMIT};
