use crate::geometry::primitives::Dims;

/// An item to be placed on a canvas.
///
/// The core never creates or owns anything renderable; `id` is the opaque
/// handle through which the host ties a placement back to its own payload.
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub struct Item {
    pub id: usize,
    /// Requested width and height, immutable
    pub dims: Dims,
}

impl Item {
    pub fn new(id: usize, dims: Dims) -> Item {
        Item { id, dims }
    }

    pub fn area(&self) -> u64 {
        self.dims.area()
    }
}
