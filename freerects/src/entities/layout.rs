use crate::entities::{Canvas, Item, PItemKey, PlacedItem};
use crate::free_space::FreeSpaceEngine;
use crate::geometry::primitives::{Dims, Rect};
use crate::util::assertions;
use slotmap::SlotMap;
use std::fmt;

/// A [`Layout`] is the stateful allocator: a canvas, the items placed on it
/// and an always-consistent [`FreeSpaceEngine`] describing the remaining
/// usable area as maximal free rectangles.
///
/// All mutation happens through [`Layout::place_item`]; placed items are
/// never moved or removed. Every operation is synchronous and runs to
/// completion. A host sharing a layout across threads must guard it with a
/// single lock spanning the entire place-then-recompute sequence, since the
/// free-space state is momentarily stale during it.
#[derive(Clone)]
pub struct Layout {
    /// The canvas items are placed on
    pub canvas: Canvas,
    /// All the items that have been placed, indexed by a unique key
    pub placed_items: SlotMap<PItemKey, PlacedItem>,
    /// Derived free-space state, rebuilt after every placement
    free_space: FreeSpaceEngine,
}

impl Layout {
    pub fn new(canvas: Canvas) -> Self {
        Layout {
            canvas,
            placed_items: SlotMap::with_key(),
            free_space: FreeSpaceEngine::new(canvas.bbox()),
        }
    }

    pub fn from_snapshot(ls: &LayoutSnapshot) -> Self {
        let mut layout = Layout::new(ls.canvas);
        layout.restore(ls);
        layout
    }

    /// Saves the current state of the layout to be potentially restored to later.
    pub fn save(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            canvas: self.canvas,
            placed_items: self.placed_items.clone(),
            free_rects: self.free_space.free_rects().to_vec(),
        }
    }

    /// Restores the layout to a previous state using a snapshot.
    /// The free-space state is re-derived from the snapshot's placed items.
    pub fn restore(&mut self, snapshot: &LayoutSnapshot) {
        assert_eq!(self.canvas, snapshot.canvas);
        self.placed_items = snapshot.placed_items.clone();
        self.free_space.recompute(&self.placed_rects());
        debug_assert!(assertions::snapshot_matches_layout(self, snapshot));
    }

    /// Places an item at the origin of the first free rectangle it fits in
    /// and rebuilds the free-space state. Returns the unique key for the
    /// placed item.
    ///
    /// Nothing is mutated unless a fit is found, so a failed placement
    /// needs no rollback.
    pub fn place_item(&mut self, item: &Item) -> Result<PItemKey, PlacementError> {
        let Dims(w, h) = item.dims;
        if w <= 0 || h <= 0 || w > self.canvas.width || h > self.canvas.height {
            // the scan could never find a fit, fail before paying for one
            return Err(PlacementError::InvalidSize { dims: item.dims });
        }

        let rect = self
            .free_space
            .find_space(item.dims)
            .ok_or(PlacementError::NoSpace)?;

        let pk = self
            .placed_items
            .insert(PlacedItem::new(item, rect.origin()));
        self.free_space.recompute(&self.placed_rects());

        debug_assert!(assertions::layout_is_consistent(self));

        Ok(pk)
    }

    /// True if no items are placed
    pub fn is_empty(&self) -> bool {
        self.placed_items.is_empty()
    }

    /// Returns the free-space engine for this layout
    pub fn free_space(&self) -> &FreeSpaceEngine {
        &self.free_space
    }

    /// The extents currently occupied by placed items.
    pub fn placed_rects(&self) -> Vec<Rect> {
        self.placed_items.values().map(|pi| pi.rect).collect()
    }

    /// The ratio of occupied cells to total canvas cells.
    pub fn density(&self) -> f32 {
        self.placed_item_area() as f32 / self.canvas.area() as f32
    }

    /// The number of cells occupied by placed items.
    pub fn placed_item_area(&self) -> u64 {
        self.placed_items.values().map(|pi| pi.rect.area()).sum()
    }
}

/// Immutable and compact representation of a [`Layout`].
/// Can be used to restore a [`Layout`] back to a previous state.
#[derive(Clone, Debug)]
pub struct LayoutSnapshot {
    /// A copy of the canvas used in the layout
    pub canvas: Canvas,
    /// A copy of the placed items in the layout
    pub placed_items: SlotMap<PItemKey, PlacedItem>,
    /// The free rectangles at the time the snapshot was taken
    pub free_rects: Vec<Rect>,
}

impl LayoutSnapshot {
    /// Equivalent to [`Layout::density`]
    pub fn density(&self) -> f32 {
        self.placed_item_area() as f32 / self.canvas.area() as f32
    }

    /// Equivalent to [`Layout::placed_item_area`]
    pub fn placed_item_area(&self) -> u64 {
        self.placed_items.values().map(|pi| pi.rect.area()).sum()
    }
}

/// A placement request that could not be satisfied. Both kinds are
/// recoverable outcomes, not faults: the caller may retry with a different
/// size, defer, or drop the item. The layout is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// No free rectangle is large enough to hold the item
    NoSpace,
    /// The requested dimensions are non-positive or exceed the canvas
    InvalidSize { dims: Dims },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::NoSpace => write!(f, "no free rectangle can hold the item"),
            PlacementError::InvalidSize { dims } => {
                write!(f, "invalid item size: {}x{}", dims.width(), dims.height())
            }
        }
    }
}

impl std::error::Error for PlacementError {}
