use crate::entities::{Canvas, Item};
use crate::util::assertions;

/// Instance of the packing problem: a set of items to be placed, with their
/// demanded quantities, onto a single fixed-size canvas.
#[derive(Debug, Clone)]
pub struct Instance {
    /// The items to be placed and their demands
    pub items: Vec<(Item, usize)>,
    /// The canvas all items are to be placed on
    pub canvas: Canvas,
}

impl Instance {
    pub fn new(items: Vec<(Item, usize)>, canvas: Canvas) -> Self {
        assert!(
            assertions::instance_item_ids_correct(&items),
            "All items should have consecutive IDs starting from 0"
        );

        Self { items, canvas }
    }

    pub fn item(&self, id: usize) -> &Item {
        &self.items[id].0
    }

    pub fn item_qty(&self, id: usize) -> usize {
        self.items[id].1
    }

    pub fn total_item_qty(&self) -> usize {
        self.items.iter().map(|(_, qty)| *qty).sum()
    }

    /// Total cell area demanded by all items. Can exceed the canvas area,
    /// in which case not every item will find a place.
    pub fn total_item_area(&self) -> u64 {
        self.items
            .iter()
            .map(|(item, qty)| item.area() * *qty as u64)
            .sum()
    }
}
