use crate::config::{FFPConfig, ItemOrder};
use freerects::entities::{Instance, PlacementError, Problem, Solution};
use itertools::Itertools;
use log::{info, warn};
use rand::prelude::SmallRng;
use rand::seq::SliceRandom;
use std::cmp::Reverse;
use std::time::Instant;
use thousands::Separable;

/// First-Fit Placer: feeds the items of an instance to the layout in the
/// configured order and anchors each at the first free rectangle it fits in.
pub struct FFPOptimizer {
    pub instance: Instance,
    pub problem: Problem,
    pub config: FFPConfig,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
}

impl FFPOptimizer {
    pub fn new(instance: Instance, config: FFPConfig, rng: SmallRng) -> Self {
        let problem = Problem::new(instance.clone());
        Self {
            instance,
            problem,
            config,
            rng,
        }
    }

    pub fn solve(&mut self) -> Solution {
        let start = Instant::now();

        info!(
            "[FFP] instance demands {} items covering {} cells, canvas holds {}",
            self.instance.total_item_qty(),
            self.instance.total_item_area().separate_with_commas(),
            self.instance.canvas.area().separate_with_commas()
        );

        let order = item_placement_order(&self.instance, self.config.item_order, &mut self.rng);
        for item_id in order {
            //place all copies of this item type
            while self.problem.item_demand_qtys[item_id] > 0 {
                match self.problem.place_item(item_id) {
                    Ok(pk) => {
                        let rect = self.problem.layout.placed_items[pk].rect;
                        info!(
                            "[FFP] placing item {}/{} with id {} at ({}, {})",
                            self.problem.layout.placed_items.len(),
                            self.instance.total_item_qty(),
                            item_id,
                            rect.x_min,
                            rect.y_min,
                        );
                    }
                    Err(PlacementError::NoSpace) => {
                        // a smaller item may still fit, continue with the next type
                        warn!(
                            "[FFP] no free rectangle fits item {}, skipping its remaining demand ({})",
                            item_id, self.problem.item_demand_qtys[item_id]
                        );
                        break;
                    }
                    Err(err @ PlacementError::InvalidSize { .. }) => {
                        warn!("[FFP] {err}, skipping item {item_id}");
                        break;
                    }
                }
            }
        }

        let solution = self.problem.save();

        info!(
            "[FFP] optimization finished in {:.3}ms",
            start.elapsed().as_secs_f64() * 1000.0
        );
        info!(
            "[FFP] solution contains {} items covering {} of {} cells ({:.3}% density)",
            solution.layout_snapshot.placed_items.len(),
            solution
                .layout_snapshot
                .placed_item_area()
                .separate_with_commas(),
            self.instance.canvas.area().separate_with_commas(),
            solution.density() * 100.0
        );
        solution
    }
}

/// The order in which item ids are fed to the placement loop.
pub fn item_placement_order(
    instance: &Instance,
    order: ItemOrder,
    rng: &mut SmallRng,
) -> Vec<usize> {
    let ids = (0..instance.items.len()).collect_vec();
    match order {
        ItemOrder::Input => ids,
        //sort the items by descending cell area
        ItemOrder::DescArea => ids
            .into_iter()
            .sorted_by_key(|&id| Reverse(instance.item(id).area()))
            .collect_vec(),
        ItemOrder::Shuffled => {
            let mut ids = ids;
            ids.shuffle(rng);
            ids
        }
    }
}
