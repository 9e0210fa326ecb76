//! Fixed-size table of decoded variants, one slot per tier.

use std::cell::RefCell;
use std::rc::Rc;

use crate::image::DecodedImage;
use crate::tier::SizeTier;

/// Slot table holding at most one decoded image per size tier.
///
/// Slots are replaced wholesale on write and never mutated in place;
/// readers get a shared handle to the stored image. Mutation goes through
/// interior mutability so the store can sit inside a shared cache object
/// on a single logical owner thread.
#[derive(Default)]
pub struct SizeVariantStore {
    slots: RefCell<[Option<Rc<DecodedImage>>; SizeTier::COUNT]>,
}

impl SizeVariantStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the variant at `index`, if populated.
    pub fn get(&self, index: usize) -> Option<Rc<DecodedImage>> {
        self.slots.borrow().get(index)?.clone()
    }

    /// Replace the slot at `index`. Last write wins.
    pub fn set(&self, index: usize, image: DecodedImage) {
        self.slots.borrow_mut()[index] = Some(Rc::new(image));
    }

    /// Whether the slot at `index` holds a variant.
    pub fn is_populated(&self, index: usize) -> bool {
        self.slots
            .borrow()
            .get(index)
            .map(Option::is_some)
            .unwrap_or(false)
    }
}
