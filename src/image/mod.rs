//! Decoded image variants.
//!
//! Wraps pixel data for one materialized variant, with one-shot decode
//! from inline byte payloads and aspect-preserving downscale to a side
//! limit.

mod decoded;

pub use decoded::{DecodedImage, DecodeError};
