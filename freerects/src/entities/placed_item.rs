use crate::entities::Item;
use crate::geometry::primitives::{Point, Rect};

slotmap::new_key_type! {
    /// Unique key for each [`PlacedItem`] in a layout
    pub struct PItemKey;
}

/// Represents an [`Item`] that has been placed on a canvas.
/// Its origin is assigned exactly once, at placement; placed items are
/// never moved or resized afterwards.
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub struct PlacedItem {
    /// Identifier of the item placed, the host's payload handle
    pub item_id: usize,
    /// The cells this item occupies on the canvas
    pub rect: Rect,
}

impl PlacedItem {
    pub fn new(item: &Item, origin: Point) -> Self {
        let rect = Rect::from_origin_and_dims(origin, item.dims)
            .expect("item dimensions are validated before placement");
        PlacedItem {
            item_id: item.id,
            rect,
        }
    }
}
