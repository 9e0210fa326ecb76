//! Lazily decoded inline thumbnail.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::descriptor::MediaDescriptor;
use crate::image::DecodedImage;

/// Cache for the small preview embedded in a media object's metadata.
///
/// Decodes the owner's inline byte payload at most once. A failing
/// payload is treated as permanently corrupt: the owner is told to drop
/// it so the decode is never retried.
#[derive(Default)]
pub struct ThumbnailCache {
    slot: RefCell<Option<Rc<DecodedImage>>>,
}

impl ThumbnailCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached thumbnail, decoding the owner's inline payload on first
    /// use. Returns `None` when no payload remains or decoding fails.
    pub fn get_or_decode(&self, owner: &dyn MediaDescriptor) -> Option<Rc<DecodedImage>> {
        if let Some(cached) = self.slot.borrow().as_ref() {
            return Some(Rc::clone(cached));
        }

        let bytes = owner.inline_thumbnail_bytes();
        if bytes.is_empty() {
            return None;
        }

        match DecodedImage::from_inline_bytes(&bytes) {
            Ok(image) => {
                let image = Rc::new(image);
                *self.slot.borrow_mut() = Some(Rc::clone(&image));
                Some(image)
            }
            Err(err) => {
                debug!(media = owner.id().0, %err, "inline thumbnail decode failed, dropping payload");
                owner.clear_inline_thumbnail_bytes();
                None
            }
        }
    }

    /// The cached thumbnail without touching the owner payload.
    pub fn get(&self) -> Option<Rc<DecodedImage>> {
        self.slot.borrow().clone()
    }

    /// Store an already-decoded thumbnail, replacing any cached one.
    pub fn set(&self, image: DecodedImage) {
        *self.slot.borrow_mut() = Some(Rc::new(image));
    }
}
