use crate::Cell;
use serde::{Deserialize, Serialize};

/// External representation of an [`Instance`](crate::entities::Instance).
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtInstance {
    /// The canvas all items are to be placed on
    pub canvas: ExtCanvas,
    /// The items to be placed
    pub items: Vec<ExtItem>,
}

/// External representation of a [`Canvas`](crate::entities::Canvas).
#[derive(Serialize, Deserialize, Clone, Copy)]
pub struct ExtCanvas {
    pub width: Cell,
    pub height: Cell,
}

/// External representation of an [`Item`](crate::entities::Item).
#[derive(Serialize, Deserialize, Clone, Copy)]
pub struct ExtItem {
    /// Unique identifier of the item
    pub id: u64,
    pub width: Cell,
    pub height: Cell,
    /// Number of copies of this item to place
    #[serde(default = "demand_default")]
    pub demand: u64,
}

fn demand_default() -> u64 {
    1
}

/// External representation of a [`Solution`](crate::entities::Solution).
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtSolution {
    /// One entry per placed item: where and how large, in cell units
    pub placements: Vec<ExtPlacedItem>,
    /// The maximal free rectangles remaining on the canvas
    pub free_rects: Vec<ExtRect>,
    /// Ratio of occupied cells to canvas cells
    pub density: f32,
    pub run_time_sec: u64,
}

/// External representation of a [`PlacedItem`](crate::entities::PlacedItem).
#[derive(Serialize, Deserialize, Clone, Copy)]
pub struct ExtPlacedItem {
    /// Id of the placed item, ties the placement back to the host's payload
    pub item_id: u64,
    /// Origin cell assigned by the placement
    pub x: Cell,
    pub y: Cell,
    pub width: Cell,
    pub height: Cell,
}

/// An axis-aligned rectangle: origin cell plus dimensions.
#[derive(Serialize, Deserialize, Clone, Copy)]
pub struct ExtRect {
    pub x: Cell,
    pub y: Cell,
    pub width: Cell,
    pub height: Cell,
}
