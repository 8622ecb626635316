use crate::entities::{Instance, Layout, PItemKey, PlacementError, Solution};
use crate::util::assertions;
use itertools::Itertools;
use std::time::Instant;

/// Modifiable counterpart of [`Instance`]: tracks which items still need to
/// be placed and forwards placement requests to its [`Layout`].
#[derive(Clone)]
pub struct Problem {
    pub instance: Instance,
    pub layout: Layout,
    /// Remaining demand per item id
    pub item_demand_qtys: Vec<usize>,
}

impl Problem {
    pub fn new(instance: Instance) -> Self {
        let item_demand_qtys = instance.items.iter().map(|(_, qty)| *qty).collect_vec();
        let layout = Layout::new(instance.canvas);

        Self {
            instance,
            layout,
            item_demand_qtys,
        }
    }

    /// Places one unit of the item with the given id. On success the
    /// remaining demand of that item is decremented.
    pub fn place_item(&mut self, item_id: usize) -> Result<PItemKey, PlacementError> {
        let item = self.instance.item(item_id);
        let pk = self.layout.place_item(item)?;
        self.item_demand_qtys[item_id] -= 1;
        Ok(pk)
    }

    /// Creates a snapshot of the current state of the problem as a [`Solution`].
    pub fn save(&self) -> Solution {
        let solution = Solution {
            layout_snapshot: self.layout.save(),
            time_stamp: Instant::now(),
        };

        debug_assert!(assertions::problem_matches_solution(self, &solution));

        solution
    }

    /// Restores the state of the problem to the given [`Solution`].
    pub fn restore(&mut self, solution: &Solution) {
        self.layout.restore(&solution.layout_snapshot);

        // re-derive the remaining demands from the restored layout
        self.item_demand_qtys
            .iter_mut()
            .enumerate()
            .for_each(|(id, qty)| *qty = self.instance.item_qty(id));
        self.layout
            .placed_items
            .iter()
            .for_each(|(_, pi)| self.item_demand_qtys[pi.item_id] -= 1);

        debug_assert!(assertions::problem_matches_solution(self, solution));
    }

    pub fn density(&self) -> f32 {
        self.layout.density()
    }
}
